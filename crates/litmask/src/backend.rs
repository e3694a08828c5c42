//! Interchangeable literal-boundary producers.

use crate::StripError;
use litmask_core::{BoundaryList, LiteralSpan};
use litmask_scanner::ScanOptions;

/// A literal-boundary producer: anything that can classify the literal
/// regions of a source text. Callers depend on this interface, never on a
/// specific backend's internals, so backends can be swapped per call based
/// on the correctness/throughput trade-off.
pub trait Backend {
    /// Literal spans of `source`, sorted by start offset, delimiters
    /// included, interpolation expressions excluded.
    fn literal_spans(&self, source: &str) -> Result<Vec<LiteralSpan>, StripError>;

    /// The flattened alternating-region encoding of
    /// [`literal_spans`](Backend::literal_spans).
    fn literal_boundaries(&self, source: &str) -> Result<BoundaryList, StripError> {
        Ok(BoundaryList::from_spans(&self.literal_spans(source)?))
    }
}

/// The hand-rolled single-pass scanner. Fast and dependency-light;
/// best-effort on malformed input (unterminated literals run to the
/// newline or end of input instead of failing).
#[derive(Debug, Clone, Default)]
pub struct ScannerBackend {
    /// Scan limits applied to every source.
    pub options: ScanOptions,
}

impl Backend for ScannerBackend {
    fn literal_spans(&self, source: &str) -> Result<Vec<LiteralSpan>, StripError> {
        Ok(litmask_scanner::Scanner::with_options(source, self.options.clone()).scan()?)
    }
}

/// The swc tokenizer adapter. Full-grammar lexical accuracy, including the
/// regex/division cases the scanner's heuristic cannot see; rejects
/// syntactically invalid input instead of guessing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcBackend;

impl Backend for SwcBackend {
    fn literal_spans(&self, source: &str) -> Result<Vec<LiteralSpan>, StripError> {
        Ok(litmask_swc::literal_spans(source)?)
    }
}
