// SPDX-License-Identifier: Apache-2.0

use alloc::format;
use alloc::string::{String, ToString};

use log::{debug, trace};

use crate::error::ScanError;
use crate::escape;
use crate::number::{self, Number};
use crate::scratch::Scratch;
use crate::token::{Grammar, Token};

/// A pull scanner over a complete in-memory document.
///
/// Each call to [`next`](Self::next) consumes one lexical unit and returns
/// its [`Token`] classification; the decoded payload is read through the
/// accessors (`str_value`, `int_value`, ...). String and symbol payloads
/// live in one fixed scratch buffer of [`SCRATCH_MAX`] bytes that is
/// overwritten on every call, so a caller that needs to retain a decoded
/// string must copy it out before requesting the next token.
///
/// The scanner never mutates the input and holds no heap memory. End of
/// input is the end of the slice; a raw NUL byte outside a string is also
/// treated as a terminator, matching the format's NUL-sentinel heritage.
///
/// [`SCRATCH_MAX`]: crate::SCRATCH_MAX
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    depth: i32,
    grammar: Grammar,
    scratch: Scratch,
    int_value: i64,
    float_value: f64,
    bool_value: bool,
    last_error: Option<ScanError>,
}

impl<'a> Scanner<'a> {
    /// Creates a classic-grammar (JSON) scanner.
    pub fn new(text: &'a str) -> Self {
        Self::with_grammar(text, Grammar::Classic)
    }

    /// Creates a scanner with an explicit grammar selection.
    pub fn with_grammar(text: &'a str, grammar: Grammar) -> Self {
        Scanner {
            text,
            pos: 0,
            depth: 0,
            grammar,
            scratch: Scratch::new(),
            int_value: 0,
            float_value: 0.0,
            bool_value: false,
            last_error: None,
        }
    }

    /// Consumes and classifies the next lexical unit.
    ///
    /// Malformed input is reported as [`Token::Eof`], same as clean
    /// termination; [`last_error`](Self::last_error) carries the
    /// distinction.
    pub fn next(&mut self) -> Token {
        self.scratch.clear();
        self.int_value = 0;
        self.float_value = 0.0;
        self.bool_value = false;
        self.last_error = None;

        let token = match self.scan() {
            Ok(token) => token,
            Err(e) => {
                debug!("scan failed at byte {}: {}", self.pos, e);
                self.last_error = Some(e);
                Token::Eof
            }
        };
        trace!("{:?} at byte {} depth {}", token, self.pos, self.depth);
        token
    }

    /// The decoded payload of the most recent `Str`/`Symbol`/`Setter`
    /// token. Overwritten by the next call to [`next`](Self::next).
    pub fn str_value(&self) -> &str {
        self.scratch.as_str()
    }

    /// The payload of the most recent `Int` token.
    pub fn int_value(&self) -> i64 {
        self.int_value
    }

    /// The payload of the most recent `Float` token.
    pub fn float_value(&self) -> f64 {
        self.float_value
    }

    /// The payload of the most recent `Bool` token.
    pub fn bool_value(&self) -> bool {
        self.bool_value
    }

    /// Current container/group nesting level.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Next unread byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Why the most recent [`next`](Self::next) returned [`Token::Eof`],
    /// if it did so because of malformed input. `None` after any other
    /// token and after a clean end of input.
    pub fn last_error(&self) -> Option<ScanError> {
        self.last_error
    }

    /// Compares the scratch content against `s` without allocating.
    ///
    /// This is how callers interpret `Symbol` tokens semantically, e.g.
    /// `scanner.str_eq("true")` under the extended grammar.
    pub fn str_eq(&self, s: &str) -> bool {
        self.scratch.eq_str(s)
    }

    /// Discards the subtree opened by `token`.
    ///
    /// Only meaningful immediately after `token` was produced by
    /// [`next`](Self::next): rescans until the nesting level falls back
    /// below the level the opening token established, leaving the cursor
    /// just past the matching close. Non-opening tokens are a no-op.
    pub fn skip(&mut self, token: Token) {
        if !token.opens_scope() {
            return;
        }
        let level = self.depth;
        loop {
            let t = self.next();
            if t == Token::Eof || self.depth < level {
                return;
            }
        }
    }

    /// Discards all remaining entries of the innermost open container,
    /// leaving the cursor just past its `End` (or at end of input).
    ///
    /// The passed token only gates the call: terminators are a no-op, any
    /// other token starts the discard loop from the current position. An
    /// opening token just produced therefore has its own members discarded,
    /// stopping at its own `End`.
    pub fn skip_to_end(&mut self, token: Token) {
        if token.is_terminator() {
            return;
        }
        loop {
            let t = self.next();
            if t.is_terminator() {
                return;
            }
            self.skip(t);
        }
    }

    /// Exact source text of the subtree opened by `token`, including both
    /// brackets. Consumes the subtree (a [`skip`](Self::skip)) as a side
    /// effect; returns `""` for non-opening tokens.
    pub fn raw_span(&mut self, token: Token) -> &'a str {
        if !token.opens_scope() {
            return "";
        }
        // The opening bracket was consumed when `token` was produced.
        let start = self.pos.saturating_sub(1);
        self.skip(token);
        self.text.get(start..self.pos).unwrap_or("")
    }

    /// Materializes the textual form of the most recent token: the exact
    /// source span for container tokens (consuming the subtree), the
    /// scratch copy for strings and symbols, and the formatted literal for
    /// scalars.
    pub fn to_string(&mut self, token: Token) -> String {
        match token {
            Token::Object | Token::Array | Token::Group => self.raw_span(token).to_string(),
            Token::Str | Token::Symbol | Token::Setter => self.str_value().to_string(),
            Token::Int => format!("{}", self.int_value),
            Token::Float => format!("{}", self.float_value),
            Token::Bool => if self.bool_value { "true" } else { "false" }.to_string(),
            Token::Null => "null".to_string(),
            Token::Eof | Token::End => String::new(),
        }
    }

    /// The most recent numeric payload as an integer, converting from the
    /// float representation if that is what was decoded.
    pub fn as_int(&self, token: Token) -> i64 {
        match token {
            Token::Int => self.int_value,
            Token::Float => self.float_value as i64,
            Token::Bool => self.bool_value as i64,
            _ => 0,
        }
    }

    /// The most recent numeric payload as a float, converting from the
    /// integer representation if that is what was decoded.
    pub fn as_float(&self, token: Token) -> f64 {
        match token {
            Token::Int => self.int_value as f64,
            Token::Float => self.float_value,
            Token::Bool => self.bool_value as i64 as f64,
            _ => 0.0,
        }
    }

    /// The dispatch loop: skip separators, then branch on the first byte
    /// of the next token.
    fn scan(&mut self) -> Result<Token, ScanError> {
        loop {
            let b = match self.text.as_bytes().get(self.pos) {
                Some(&b) => b,
                None => return Ok(Token::Eof),
            };
            match b {
                b'{' => {
                    self.pos += 1;
                    self.depth += 1;
                    return Ok(Token::Object);
                }
                b'[' => {
                    self.pos += 1;
                    self.depth += 1;
                    return Ok(Token::Array);
                }
                b'(' if self.grammar == Grammar::Extended => {
                    self.pos += 1;
                    self.depth += 1;
                    return Ok(Token::Group);
                }
                b'}' | b']' => {
                    self.pos += 1;
                    self.depth -= 1;
                    return Ok(Token::End);
                }
                b')' if self.grammar == Grammar::Extended => {
                    self.pos += 1;
                    self.depth -= 1;
                    return Ok(Token::End);
                }
                b'"' => {
                    self.scan_string()?;
                    return Ok(if self.eat_colon() {
                        Token::Setter
                    } else {
                        Token::Str
                    });
                }
                b'0'..=b'9' => return self.scan_number(),
                b'-' | b'+' if self.digit_follows() => return self.scan_number(),
                b' ' | b'\t' | b'\x0C' | b'\r' | b'\n' | b',' | b':' => self.pos += 1,
                // NUL terminates the document, matching the sentinel
                // convention the format comes from.
                0 => return Ok(Token::Eof),
                _ => return self.scan_word(b),
            }
        }
    }

    fn digit_follows(&self) -> bool {
        matches!(
            self.text.as_bytes().get(self.pos + 1),
            Some(b'0'..=b'9')
        )
    }

    /// Consumes a `:` directly after a string or symbol, turning it into a
    /// key. Whitespace between the payload and the colon leaves the colon
    /// to be skipped as an ordinary separator instead.
    fn eat_colon(&mut self) -> bool {
        if self.text.as_bytes().get(self.pos) == Some(&b':') {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Decodes a quoted string into the scratch buffer. The cursor is on
    /// the opening quote on entry and past the closing quote on success.
    fn scan_string(&mut self) -> Result<(), ScanError> {
        let bytes = self.text.as_bytes();
        self.pos += 1;
        loop {
            let b = match bytes.get(self.pos) {
                Some(&b) => b,
                None => return Err(ScanError::UnterminatedString),
            };
            match b {
                b'"' => {
                    self.pos += 1;
                    return Ok(());
                }
                b'\\' => {
                    self.pos += 1;
                    match bytes.get(self.pos) {
                        Some(b'u') => {
                            self.pos += 1;
                            let Some(hex) = bytes.get(self.pos..self.pos + 4) else {
                                return Err(ScanError::InvalidEscape);
                            };
                            let c = escape::unicode_escape([hex[0], hex[1], hex[2], hex[3]])?;
                            self.pos += 4;
                            self.scratch.push_char(c)?;
                        }
                        Some(&e) => {
                            self.scratch.push_byte(escape::simple_escape(e)?)?;
                            self.pos += 1;
                        }
                        None => return Err(ScanError::InvalidEscape),
                    }
                }
                0 => return Err(ScanError::UnterminatedString),
                _ => {
                    self.scratch.push_byte(b)?;
                    self.pos += 1;
                }
            }
        }
    }

    fn scan_number(&mut self) -> Result<Token, ScanError> {
        match number::scan(self.text.as_bytes(), &mut self.pos)? {
            Number::Int(v) => {
                self.int_value = v;
                Ok(Token::Int)
            }
            Number::Float(v) => {
                self.float_value = v;
                Ok(Token::Float)
            }
        }
    }

    /// A bare word: a literal under the classic grammar, a symbol run
    /// under the extended one.
    fn scan_word(&mut self, b: u8) -> Result<Token, ScanError> {
        match self.grammar {
            Grammar::Classic => match b {
                b't' => {
                    self.eat_literal("true")?;
                    self.bool_value = true;
                    Ok(Token::Bool)
                }
                b'f' => {
                    self.eat_literal("false")?;
                    Ok(Token::Bool)
                }
                b'n' => {
                    self.eat_literal("null")?;
                    Ok(Token::Null)
                }
                _ => Err(ScanError::InvalidCharacter(b)),
            },
            Grammar::Extended => self.scan_symbol(),
        }
    }

    fn eat_literal(&mut self, literal: &str) -> Result<(), ScanError> {
        let bytes = self.text.as_bytes();
        let end = self.pos + literal.len();
        if bytes.get(self.pos..end) != Some(literal.as_bytes()) {
            return Err(ScanError::InvalidLiteral);
        }
        // The literal must end at a word boundary: `nullx` is not `null`.
        if matches!(bytes.get(end), Some(b'a'..=b'z')) {
            return Err(ScanError::InvalidLiteral);
        }
        self.pos = end;
        Ok(())
    }

    /// Consumes a symbol run into the scratch buffer, up to the next
    /// separator, bracket, quote or end of input.
    fn scan_symbol(&mut self) -> Result<Token, ScanError> {
        let bytes = self.text.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            if is_symbol_boundary(b) {
                break;
            }
            self.scratch.push_byte(b)?;
            self.pos += 1;
        }
        Ok(if self.eat_colon() {
            Token::Setter
        } else {
            Token::Symbol
        })
    }
}

fn is_symbol_boundary(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t'
            | b'\x0C'
            | b'\r'
            | b'\n'
            | b','
            | b':'
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b'('
            | b')'
            | b'"'
            | 0
    )
}
