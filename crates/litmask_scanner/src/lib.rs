//! litmask_scanner: Hand-rolled literal-boundary scanner.
//!
//! A single-pass, character-level state machine over JavaScript/TypeScript
//! source text that records every string, template-literal piece, regex
//! literal, and comment as a span, without building a syntax tree. This is
//! the fast, dependency-light backend; the swc adapter is the strict one.

mod char_codes;
mod context;
mod scanner;

pub use context::PrevToken;
pub use scanner::{scan, ScanOptions, Scanner};
