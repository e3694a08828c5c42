//! The masking projector.
//!
//! Projects a span list onto the source text, producing a copy with literal
//! interiors replaced by a filler character. The projection is shape
//! preserving: one filler char per replaced code point, every newline kept
//! verbatim wherever it occurs, so offsets and line/column positions in the
//! masked text map one-to-one onto the original.

use litmask_core::{LiteralKind, LiteralSpan};

/// The default filler character.
pub const DEFAULT_FILL: char = ' ';

/// Masking policy knobs.
#[derive(Debug, Clone)]
pub struct MaskOptions {
    /// The filler character. Must not be a line break.
    pub fill: char,
    /// Preserve `//`, `/*`, and a terminating `*/` instead of filling them.
    /// Off by default: a fully blanked comment can never re-trigger any
    /// downstream pattern.
    pub keep_comment_markers: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL,
            keep_comment_markers: false,
        }
    }
}

/// Project `spans` onto `source`.
///
/// The spans must be sorted by start offset and non-overlapping, which
/// every backend guarantees. String quotes and regex slashes survive (regex
/// flags are filled along with the pattern); template spans are filled
/// entirely, their interpolation expressions being already excluded from
/// the spans, so nothing is masked twice; comments follow
/// [`MaskOptions::keep_comment_markers`].
pub fn mask_spans(source: &str, spans: &[LiteralSpan], opts: &MaskOptions) -> String {
    debug_assert!(!is_line_break(opts.fill), "filler must not be a line break");
    debug_assert!(spans
        .windows(2)
        .all(|pair| pair[0].span.end <= pair[1].span.start));

    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut next = 0usize; // index of the first span not yet passed
    let mut closing = closing_delimiter(&chars, spans.first());
    for (i, &ch) in chars.iter().enumerate() {
        let offset = i as u32;
        while next < spans.len() && spans[next].span.end <= offset {
            next += 1;
            closing = closing_delimiter(&chars, spans.get(next));
        }
        let fill = match spans.get(next) {
            Some(ls) if ls.span.contains(offset) => !is_preserved(ls, offset, ch, closing, opts),
            _ => false,
        };
        out.push(if fill { opts.fill } else { ch });
    }
    out
}

/// The offset of a span's closing delimiter, when one survives masking.
///
/// For a string that is the closing quote; for a regex it is the last `/`
/// of the span, so that any trailing flag letters are filled rather than
/// left to look like an identifier next to an unterminated pattern.
fn closing_delimiter(chars: &[char], ls: Option<&LiteralSpan>) -> Option<u32> {
    let ls = ls?;
    if !ls.terminated {
        return None;
    }
    match ls.kind {
        LiteralKind::Str => Some(ls.span.end - 1),
        LiteralKind::Regex => (ls.span.start + 1..ls.span.end)
            .rev()
            .find(|&i| chars[i as usize] == '/'),
        _ => None,
    }
}

/// Whether the char at `offset` inside span `ls` escapes masking.
fn is_preserved(
    ls: &LiteralSpan,
    offset: u32,
    ch: char,
    closing: Option<u32>,
    opts: &MaskOptions,
) -> bool {
    if is_line_break(ch) {
        return true;
    }
    let span = ls.span;
    match ls.kind {
        LiteralKind::Str | LiteralKind::Regex => {
            offset == span.start || closing == Some(offset)
        }
        // Backticks and `${`/`}` are filled along with the content.
        LiteralKind::Template => false,
        LiteralKind::LineComment => opts.keep_comment_markers && offset <= span.start + 1,
        LiteralKind::BlockComment => {
            opts.keep_comment_markers
                && (offset <= span.start + 1 || (ls.terminated && offset + 2 >= span.end))
        }
    }
}

#[inline]
fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
