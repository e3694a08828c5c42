//! The single-pass literal scanner.
//!
//! Walks the source text left to right exactly once, emitting a
//! [`LiteralSpan`] whenever a string, template piece, regex literal, or
//! comment closes. Auxiliary state is O(1) plus one explicit stack holding a
//! brace-depth counter per open template interpolation, so deeply nested
//! `${...}` never recurses.
//!
//! Unterminated-literal policy: best-effort. A quoted string cut off by a
//! raw newline or end of input closes unterminated at that point; template
//! pieces, regex literals, and block comments run to end of input. The
//! scanner only fails when interpolation nesting exceeds
//! [`ScanOptions::max_template_depth`].

use crate::char_codes::*;
use crate::context::PrevToken;
use litmask_core::{LiteralKind, LiteralSpan, ScanError};

/// Tunable limits for a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum depth of nested `${...}` interpolation frames. Exceeding it
    /// fails fast with [`ScanError::NestingTooDeep`] instead of letting
    /// adversarial input grow the stack without bound.
    pub max_template_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_template_depth: 64,
        }
    }
}

/// Scan source text with default options.
pub fn scan(source: &str) -> Result<Vec<LiteralSpan>, ScanError> {
    Scanner::new(source).scan()
}

/// The literal scanner. One instance scans one source text.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Kind of the previous significant token, for the regex heuristic.
    prev: PrevToken,
    /// Spans closed so far, in source order.
    spans: Vec<LiteralSpan>,
    /// One brace-depth counter per open `${...}` interpolation.
    interp_stack: Vec<u32>,
    /// Scan limits.
    opts: ScanOptions,
}

impl Scanner {
    /// Create a scanner for the given source text.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_options(source: &str, opts: ScanOptions) -> Self {
        Self {
            text: source.chars().collect(),
            pos: 0,
            prev: PrevToken::Start,
            spans: Vec::new(),
            interp_stack: Vec::new(),
            opts,
        }
    }

    /// Run the scan to completion and return the literal spans, ordered by
    /// start offset (single pass, so no sorting is needed).
    pub fn scan(mut self) -> Result<Vec<LiteralSpan>, ScanError> {
        self.scan_shebang();
        while !self.is_eof() {
            let ch = self.text[self.pos];
            match ch {
                '\'' | '"' => self.scan_string(ch),
                '`' => self.scan_template_piece()?,
                '/' => self.scan_slash(),
                '{' => {
                    if let Some(depth) = self.interp_stack.last_mut() {
                        *depth += 1;
                    }
                    self.pos += 1;
                    self.prev = PrevToken::BracketOpen;
                }
                '}' => self.scan_close_brace()?,
                '(' | '[' => {
                    self.pos += 1;
                    self.prev = PrevToken::BracketOpen;
                }
                ')' | ']' => {
                    self.pos += 1;
                    self.prev = PrevToken::BracketClose;
                }
                '.' if self.char_at(1).is_some_and(is_digit) => self.scan_number(),
                '0'..='9' => self.scan_number(),
                c if is_line_break(c) || is_white_space_single_line(c) => self.pos += 1,
                c if is_identifier_start(c) => self.scan_identifier(),
                _ => {
                    self.pos += 1;
                    self.prev = PrevToken::Operator;
                }
            }
        }
        Ok(self.spans)
    }

    // ========================================================================
    // Construct-specific scanning
    // ========================================================================

    /// Record a leading `#!` line. The reference tokenizers accept hashbang
    /// input, and masking it keeps both backends aligned.
    fn scan_shebang(&mut self) {
        if self.text.len() >= 2 && self.text[0] == '#' && self.text[1] == '!' {
            self.pos = 2;
            while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                self.pos += 1;
            }
            self.push_span(0, LiteralKind::LineComment, true);
        }
    }

    fn scan_string(&mut self, quote: char) {
        let start = self.pos as u32;
        self.pos += 1; // opening quote
        loop {
            if self.is_eof() {
                self.push_span(start, LiteralKind::Str, false);
                break;
            }
            let ch = self.text[self.pos];
            if ch == quote {
                self.pos += 1;
                self.push_span(start, LiteralKind::Str, true);
                break;
            }
            if ch == '\\' {
                self.skip_escape();
                continue;
            }
            if is_line_break(ch) {
                // Unterminated; the newline stays outside the span.
                self.push_span(start, LiteralKind::Str, false);
                break;
            }
            self.pos += 1;
        }
        self.prev = PrevToken::IdentOrLiteral;
    }

    /// Scan one template piece, entered either at the opening backtick or at
    /// the `}` that closes an interpolation. The piece span includes that
    /// delimiter and, when it ends at `${`, both of those characters too.
    fn scan_template_piece(&mut self) -> Result<(), ScanError> {
        let start = self.pos as u32;
        self.pos += 1; // the backtick or the resuming `}`
        loop {
            if self.is_eof() {
                self.push_span(start, LiteralKind::Template, false);
                self.prev = PrevToken::IdentOrLiteral;
                return Ok(());
            }
            let ch = self.text[self.pos];
            if ch == '\\' {
                self.skip_escape();
                continue;
            }
            if ch == '`' {
                self.pos += 1;
                self.push_span(start, LiteralKind::Template, true);
                self.prev = PrevToken::IdentOrLiteral;
                return Ok(());
            }
            if ch == '$' && self.char_at(1) == Some('{') {
                if self.interp_stack.len() >= self.opts.max_template_depth {
                    return Err(ScanError::NestingTooDeep {
                        offset: self.pos as u32,
                        limit: self.opts.max_template_depth,
                    });
                }
                self.pos += 2;
                self.interp_stack.push(0);
                self.push_span(start, LiteralKind::Template, true);
                // The interpolation expression begins here.
                self.prev = PrevToken::BracketOpen;
                return Ok(());
            }
            // Newlines are template content.
            self.pos += 1;
        }
    }

    /// A `}` either adjusts the innermost interpolation's brace depth,
    /// resumes template content, or is ordinary punctuation.
    fn scan_close_brace(&mut self) -> Result<(), ScanError> {
        match self.interp_stack.last_mut() {
            Some(depth) if *depth > 0 => {
                *depth -= 1;
                self.pos += 1;
                self.prev = PrevToken::BracketClose;
                Ok(())
            }
            Some(_) => {
                self.interp_stack.pop();
                self.scan_template_piece()
            }
            None => {
                self.pos += 1;
                self.prev = PrevToken::BracketClose;
                Ok(())
            }
        }
    }

    fn scan_slash(&mut self) {
        match self.char_at(1) {
            Some('/') => self.scan_line_comment(),
            Some('*') => self.scan_block_comment(),
            _ => {
                if self.prev.regex_allowed() {
                    self.scan_regex();
                } else {
                    // Division, possibly `/=`.
                    self.pos += 1;
                    if self.current_char() == Some('=') {
                        self.pos += 1;
                    }
                    self.prev = PrevToken::Operator;
                }
            }
        }
    }

    fn scan_line_comment(&mut self) {
        let start = self.pos as u32;
        self.pos += 2;
        while !self.is_eof() && !is_line_break(self.text[self.pos]) {
            self.pos += 1;
        }
        // Comments are trivia: the previous significant token stands.
        self.push_span(start, LiteralKind::LineComment, true);
    }

    fn scan_block_comment(&mut self) {
        let start = self.pos as u32;
        self.pos += 2;
        loop {
            if self.is_eof() {
                self.push_span(start, LiteralKind::BlockComment, false);
                return;
            }
            if self.text[self.pos] == '*' && self.char_at(1) == Some('/') {
                self.pos += 2;
                self.push_span(start, LiteralKind::BlockComment, true);
                return;
            }
            self.pos += 1;
        }
    }

    fn scan_regex(&mut self) {
        let start = self.pos as u32;
        self.pos += 1; // opening slash
        let mut in_character_class = false;
        loop {
            if self.is_eof() {
                self.push_span(start, LiteralKind::Regex, false);
                break;
            }
            let ch = self.text[self.pos];
            if ch == '\\' {
                self.skip_escape();
                continue;
            }
            if is_line_break(ch) {
                self.push_span(start, LiteralKind::Regex, false);
                break;
            }
            if ch == '[' {
                in_character_class = true;
            } else if ch == ']' {
                in_character_class = false;
            } else if ch == '/' && !in_character_class {
                self.pos += 1;
                // Trailing flags belong to the span.
                while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
                    self.pos += 1;
                }
                self.push_span(start, LiteralKind::Regex, true);
                break;
            }
            self.pos += 1;
        }
        self.prev = PrevToken::IdentOrLiteral;
    }

    fn scan_identifier(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
            self.pos += 1;
        }
        let word: String = self.text[start..self.pos].iter().collect();
        self.prev = PrevToken::classify_word(&word);
    }

    fn scan_number(&mut self) {
        let radix_prefix = self.text[self.pos] == '0'
            && matches!(self.char_at(1), Some('x' | 'X' | 'b' | 'B' | 'o' | 'O'));
        if radix_prefix {
            self.pos += 2;
            while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
                self.pos += 1;
            }
        } else {
            while !self.is_eof() {
                let ch = self.text[self.pos];
                if ch == 'e' || ch == 'E' {
                    self.pos += 1;
                    // Exponent sign, as in `1.5e+10`.
                    if matches!(self.current_char(), Some('+' | '-')) {
                        self.pos += 1;
                    }
                } else if is_digit(ch) || ch == '.' || is_identifier_part(ch) {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }
        self.prev = PrevToken::IdentOrLiteral;
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume a backslash and the character it escapes, if any.
    #[inline]
    fn skip_escape(&mut self) {
        self.pos += 1;
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Close a span at the current position.
    fn push_span(&mut self, start: u32, kind: LiteralKind, terminated: bool) {
        self.spans
            .push(LiteralSpan::new(start, self.pos as u32, kind, terminated));
    }
}
