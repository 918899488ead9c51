// SPDX-License-Identifier: Apache-2.0

/// Tokens produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// No more input, or input that could not be tokenized under the active
    /// grammar. [`Scanner::last_error`](crate::Scanner::last_error) tells
    /// the two apart.
    Eof,
    /// Closes the innermost object, array or group.
    End,
    /// The start of an object (`{`).
    Object,
    /// The start of an array (`[`).
    Array,
    /// The start of a parenthesized group (`(`, extended grammar only).
    Group,
    /// A string or symbol immediately followed by `:`, i.e. a key.
    Setter,
    /// A bare identifier or operator run (extended grammar only).
    Symbol,
    /// A quoted string value.
    Str,
    /// An integer value.
    Int,
    /// A floating-point value.
    Float,
    /// A `true`/`false` literal (classic grammar only).
    Bool,
    /// A `null` literal (classic grammar only).
    Null,
}

impl Token {
    /// True for tokens that open a nested scope and can be passed to
    /// [`Scanner::skip`](crate::Scanner::skip).
    pub fn opens_scope(self) -> bool {
        matches!(self, Token::Object | Token::Array | Token::Group)
    }

    /// True for the two tokens that end iteration over a container's
    /// entries.
    pub fn is_terminator(self) -> bool {
        matches!(self, Token::Eof | Token::End)
    }
}

/// Grammar variant the scanner applies.
///
/// Both variants share containers, strings, numbers and setters. They only
/// differ in how bare words are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// JSON: `true`, `false` and `null` are dedicated literals; anything
    /// else outside a string is an error.
    #[default]
    Classic,
    /// DSL-style input: bare words become [`Token::Symbol`] runs and `(` /
    /// `)` open and close [`Token::Group`] scopes. Word interpretation is
    /// left to the caller via
    /// [`Scanner::str_eq`](crate::Scanner::str_eq).
    Extended,
}
