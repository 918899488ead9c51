// SPDX-License-Identifier: Apache-2.0

/// Out-of-band detail for a scan that returned [`Token::Eof`].
///
/// At the token level the scanner deliberately reports malformed input with
/// the same `Eof` value as clean termination, for compatibility with
/// callers written against that contract. The error recorded here is the
/// diagnostic side channel: it is `None` after a clean end of input and
/// `Some` after a failed decode.
///
/// [`Token::Eof`]: crate::Token::Eof
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A string or symbol payload did not fit the fixed scratch buffer.
    ScratchBufferFull,
    /// A backslash was followed by an unrecognized escape character, or the
    /// input ended inside an escape sequence.
    InvalidEscape,
    /// A `\uXXXX` escape contained a non-hex digit.
    InvalidUnicodeHex,
    /// A `\uXXXX` escape decoded to a value that is not a Unicode scalar.
    InvalidUnicodeCodepoint,
    /// The input ended, or contained a raw NUL byte, inside a string.
    UnterminatedString,
    /// A bare word did not match `true`, `false` or `null` (classic
    /// grammar).
    InvalidLiteral,
    /// A number had a misplaced sign, a second decimal point, no digits, or
    /// a non-integer exponent.
    MalformedNumber,
    /// A byte that cannot start any token under the active grammar.
    InvalidCharacter(u8),
}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScanError::InvalidCharacter(b) => write!(f, "invalid character 0x{b:02x}"),
            _ => write!(f, "{self:?}"),
        }
    }
}
