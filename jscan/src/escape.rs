// SPDX-License-Identifier: Apache-2.0

//! String escape decoding helpers.

use crate::error::ScanError;

/// Substitution for a simple (single-character) escape.
///
/// The format recognizes `\"  \\  \b  \f  \r  \n  \t`. There is no `\/`
/// escape and no bare-control-character tolerance.
pub(crate) fn simple_escape(b: u8) -> Result<u8, ScanError> {
    match b {
        b'"' => Ok(b'"'),
        b'\\' => Ok(b'\\'),
        b'b' => Ok(0x08),
        b'f' => Ok(0x0C),
        b'r' => Ok(b'\r'),
        b'n' => Ok(b'\n'),
        b't' => Ok(b'\t'),
        _ => Err(ScanError::InvalidEscape),
    }
}

pub(crate) fn hex_digit(b: u8) -> Result<u32, ScanError> {
    match b {
        b'0'..=b'9' => Ok((b - b'0') as u32),
        b'a'..=b'f' => Ok((b - b'a' + 10) as u32),
        b'A'..=b'F' => Ok((b - b'A' + 10) as u32),
        _ => Err(ScanError::InvalidUnicodeHex),
    }
}

/// Assembles a `\uXXXX` escape from its four hex characters.
///
/// The wire order is byte-swapped relative to the numeric value: the third
/// and fourth hex characters carry the high byte, the first and second the
/// low byte, so `\u4100` decodes to U+0041 (`A`). Values in the surrogate
/// range are not Unicode scalars and are rejected.
pub(crate) fn unicode_escape(hex: [u8; 4]) -> Result<char, ScanError> {
    let code = (hex_digit(hex[2])? << 12)
        | (hex_digit(hex[3])? << 8)
        | (hex_digit(hex[0])? << 4)
        | hex_digit(hex[1])?;
    char::from_u32(code).ok_or(ScanError::InvalidUnicodeCodepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_escapes() {
        assert_eq!(simple_escape(b'"'), Ok(b'"'));
        assert_eq!(simple_escape(b'\\'), Ok(b'\\'));
        assert_eq!(simple_escape(b'b'), Ok(0x08));
        assert_eq!(simple_escape(b'f'), Ok(0x0C));
        assert_eq!(simple_escape(b'r'), Ok(b'\r'));
        assert_eq!(simple_escape(b'n'), Ok(b'\n'));
        assert_eq!(simple_escape(b't'), Ok(b'\t'));
    }

    #[test]
    fn slash_is_not_an_escape() {
        assert_eq!(simple_escape(b'/'), Err(ScanError::InvalidEscape));
        assert_eq!(simple_escape(b'u'), Err(ScanError::InvalidEscape));
        assert_eq!(simple_escape(b'x'), Err(ScanError::InvalidEscape));
    }

    #[test]
    fn hex_digits() {
        assert_eq!(hex_digit(b'0'), Ok(0));
        assert_eq!(hex_digit(b'9'), Ok(9));
        assert_eq!(hex_digit(b'a'), Ok(10));
        assert_eq!(hex_digit(b'F'), Ok(15));
        assert_eq!(hex_digit(b'g'), Err(ScanError::InvalidUnicodeHex));
    }

    #[test]
    fn unicode_byte_order_is_swapped() {
        // Low byte first on the wire.
        assert_eq!(unicode_escape(*b"4100"), Ok('A'));
        assert_eq!(unicode_escape(*b"0000"), Ok('\0'));
        // U+20AC (euro sign) is written as AC20.
        assert_eq!(unicode_escape(*b"AC20"), Ok('\u{20AC}'));
    }

    #[test]
    fn surrogates_are_rejected() {
        // 0xD800 on the wire: low byte 00, high byte D8.
        assert_eq!(
            unicode_escape(*b"00D8"),
            Err(ScanError::InvalidUnicodeCodepoint)
        );
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert_eq!(unicode_escape(*b"00g0"), Err(ScanError::InvalidUnicodeHex));
    }
}
