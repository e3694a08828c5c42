//! litmask: Strip string, template, regex, and comment literals out of
//! JavaScript/TypeScript source so regex-based rewriting never matches text
//! that only looks like code because it sits inside a quoted literal.
//!
//! Two interchangeable backends produce the same literal-span model: the
//! hand-rolled single-pass scanner (fast, best-effort on malformed input)
//! and the swc tokenizer adapter (full-grammar accuracy, rejects invalid
//! input). The masking projector turns spans into a same-shape copy of the
//! source; the boundary list supports O(log n) offset membership tests.
//!
//! # Example
//!
//! ```
//! let source = "const key = \"secret\"; // token";
//! let masked = litmask::strip_literals(source).unwrap();
//! assert_eq!(masked.len(), source.len());
//! assert!(!masked.contains("secret"));
//! assert!(!masked.contains("token"));
//!
//! let bounds = litmask::literal_boundaries(source).unwrap();
//! assert!(bounds.is_literal_at(14)); // inside "secret"
//! assert!(!bounds.is_literal_at(0)); // `const` is code
//! ```

mod backend;
pub mod mask;

pub use backend::{Backend, ScannerBackend, SwcBackend};
pub use litmask_core::{
    is_literal_at, BoundaryList, LineMap, LiteralKind, LiteralSpan, ScanError, TextSpan,
};
pub use litmask_scanner::ScanOptions;
pub use litmask_swc::AdapterError;
pub use mask::{mask_spans, MaskOptions, DEFAULT_FILL};

use rayon::prelude::*;
use thiserror::Error;

/// Any failure of a literal-boundary backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StripError {
    /// The hand-rolled scanner hit its interpolation-nesting bound.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The reference tokenizer rejected the input.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Literal spans of `source`, via the hand-rolled scanner.
pub fn literal_spans(source: &str) -> Result<Vec<LiteralSpan>, StripError> {
    ScannerBackend::default().literal_spans(source)
}

/// A masked copy of `source`: identical char length and line structure,
/// literal interiors replaced by filler. Hand-rolled scanner, default mask
/// options.
pub fn strip_literals(source: &str) -> Result<String, StripError> {
    strip_literals_with(&ScannerBackend::default(), source, &MaskOptions::default())
}

/// A masked copy of `source` using an explicit backend and mask options.
pub fn strip_literals_with(
    backend: &impl Backend,
    source: &str,
    opts: &MaskOptions,
) -> Result<String, StripError> {
    let spans = backend.literal_spans(source)?;
    Ok(mask_spans(source, &spans, opts))
}

/// The boundary list of `source`, for offset membership tests without
/// rewriting the text. Hand-rolled scanner.
pub fn literal_boundaries(source: &str) -> Result<BoundaryList, StripError> {
    ScannerBackend::default().literal_boundaries(source)
}

/// Mask many independent sources in parallel.
///
/// Every scan is a pure function of its input with no shared state, so
/// sources are simply distributed across the rayon pool. Within one source
/// the scan stays sequential; later state depends on earlier state.
pub fn strip_literals_batch(sources: &[&str]) -> Vec<Result<String, StripError>> {
    sources.par_iter().map(|s| strip_literals(s)).collect()
}
