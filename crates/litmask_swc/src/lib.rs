//! litmask_swc: Reference tokenizer adapter over the swc lexer.
//!
//! Delegates lexical analysis to swc's full-grammar ECMAScript lexer and
//! maps its token stream (plus the comments it collects) into the shared
//! [`LiteralSpan`] model, producing exactly the delimiter-inclusive spans
//! the hand-rolled scanner emits. Strictly more accurate than the scanner's
//! local heuristics on ambiguous regex/division input, and strict about
//! malformed input: lexer errors are surfaced, never repaired. This is the
//! oracle the fast backend is validated against.

use litmask_core::{CharOffsets, LiteralKind, LiteralSpan};
use swc_core::common::comments::{CommentKind, SingleThreadedComments};
use swc_core::common::sync::Lrc;
use swc_core::common::Spanned;
use swc_core::common::{FileName, SourceMap, Span};
use swc_core::ecma::ast::EsVersion;
use swc_core::ecma::parser::token::{Token, TokenAndSpan};
use swc_core::ecma::parser::{lexer::Lexer, StringInput, Syntax, Tokens};
use thiserror::Error;

/// Failures of the reference tokenizer backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The lexer rejected the input. Propagated unchanged; this backend
    /// does not attempt partial recovery.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax {
        /// Char offset of the rejected construct.
        offset: u32,
        /// The lexer's own description.
        message: String,
    },
    /// A template literal was still open at end of input.
    #[error("unterminated template literal starting at offset {offset}")]
    Unterminated {
        /// Char offset where the open template content began.
        offset: u32,
    },
}

/// Template-reassembly state, one frame per open construct.
///
/// The swc lexer reports a template literal as separate backtick, content,
/// `${`, and `}` tokens; this stack glues them back into the same
/// delimiter-inclusive pieces the hand scanner emits. It mirrors the
/// scanner's interpolation stack, driven by token kinds instead of chars.
enum Frame {
    /// A template whose content region is open (`piece_start` set) or
    /// currently interrupted by an interpolation (`None`).
    Template { piece_start: Option<u32> },
    /// An interpolation expression with its local brace depth.
    Interp { brace_depth: u32 },
}

/// Tokenize `source` with the swc lexer and return its literal spans,
/// sorted by start offset.
pub fn literal_spans(source: &str) -> Result<Vec<LiteralSpan>, AdapterError> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom("input.js".into()).into(),
        source.to_string(),
    );
    let comments = SingleThreadedComments::default();
    let mut lexer = Lexer::new(
        Syntax::Es(Default::default()),
        EsVersion::Es2022,
        StringInput::from(&*fm),
        Some(&comments),
    );

    // swc spans are 1-based byte positions; the shared model counts chars.
    let offsets = CharOffsets::new(source);
    let lo = |span: Span| offsets.char_at_byte(span.lo.0.saturating_sub(1));
    let hi = |span: Span| offsets.char_at_byte(span.hi.0.saturating_sub(1));

    let mut spans: Vec<LiteralSpan> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut first_error: Option<AdapterError> = None;

    for TokenAndSpan { token, span, .. } in &mut lexer {
        match token {
            Token::Str { .. } => {
                spans.push(LiteralSpan::new(lo(span), hi(span), LiteralKind::Str, true));
            }
            Token::Regex(..) => {
                spans.push(LiteralSpan::new(lo(span), hi(span), LiteralKind::Regex, true));
            }
            Token::Shebang(..) => {
                spans.push(LiteralSpan::new(
                    lo(span),
                    hi(span),
                    LiteralKind::LineComment,
                    true,
                ));
            }
            Token::BackQuote => match stack.last_mut() {
                Some(Frame::Template { piece_start }) if piece_start.is_some() => {
                    let start = piece_start.take().expect("checked above");
                    spans.push(LiteralSpan::new(start, hi(span), LiteralKind::Template, true));
                    stack.pop();
                }
                _ => stack.push(Frame::Template {
                    piece_start: Some(lo(span)),
                }),
            },
            Token::DollarLBrace => {
                if let Some(Frame::Template { piece_start }) = stack.last_mut() {
                    if let Some(start) = piece_start.take() {
                        spans.push(LiteralSpan::new(start, hi(span), LiteralKind::Template, true));
                    }
                }
                stack.push(Frame::Interp { brace_depth: 0 });
            }
            Token::LBrace => {
                if let Some(Frame::Interp { brace_depth }) = stack.last_mut() {
                    *brace_depth += 1;
                }
            }
            Token::RBrace => match stack.last_mut() {
                Some(Frame::Interp { brace_depth }) if *brace_depth > 0 => {
                    *brace_depth -= 1;
                }
                Some(Frame::Interp { .. }) => {
                    stack.pop();
                    if let Some(Frame::Template { piece_start }) = stack.last_mut() {
                        // Template content resumes at this `}`.
                        *piece_start = Some(lo(span));
                    }
                }
                _ => {}
            },
            Token::Error(err) => {
                let error_span = err.span();
                first_error = Some(AdapterError::Syntax {
                    offset: offsets.char_at_byte(error_span.lo.0.saturating_sub(1)),
                    message: err.into_kind().msg().to_string(),
                });
                break;
            }
            _ => {}
        }
    }

    let mut errors = lexer.take_errors();
    drop(lexer);
    if first_error.is_none() && !errors.is_empty() {
        let err = errors.remove(0);
        let error_span = err.span();
        first_error = Some(AdapterError::Syntax {
            offset: offsets.char_at_byte(error_span.lo.0.saturating_sub(1)),
            message: err.into_kind().msg().to_string(),
        });
    }
    if let Some(err) = first_error {
        return Err(err);
    }
    if !stack.is_empty() {
        let offset = stack
            .iter()
            .find_map(|frame| match frame {
                Frame::Template {
                    piece_start: Some(start),
                } => Some(*start),
                _ => None,
            })
            .unwrap_or(0);
        return Err(AdapterError::Unterminated { offset });
    }

    let (leading, trailing) = comments.take_all();
    for comment in leading
        .take()
        .into_values()
        .flatten()
        .chain(trailing.take().into_values().flatten())
    {
        let kind = match comment.kind {
            CommentKind::Line => LiteralKind::LineComment,
            CommentKind::Block => LiteralKind::BlockComment,
        };
        spans.push(LiteralSpan::new(
            lo(comment.span),
            hi(comment.span),
            kind,
            true,
        ));
    }

    spans.sort_by_key(|ls| (ls.span.start, ls.span.end));
    spans.dedup();
    debug_assert!(spans
        .windows(2)
        .all(|pair| pair[0].span.end <= pair[1].span.start));
    Ok(spans)
}
