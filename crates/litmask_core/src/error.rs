//! Error types shared by the boundary producers.

use thiserror::Error;

/// Failures of the hand-rolled scanner.
///
/// The scanner is best-effort on malformed input, so the only way it fails
/// is by hitting the configured interpolation-nesting bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Template interpolations nested past the configured limit.
    #[error("template interpolation nesting exceeds {limit} levels at offset {offset}")]
    NestingTooDeep {
        /// Char offset of the `${` that overflowed the stack.
        offset: u32,
        /// The configured depth limit.
        limit: usize,
    },
}
