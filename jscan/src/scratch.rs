// SPDX-License-Identifier: Apache-2.0

use crate::error::ScanError;

/// Capacity of the scanner's reusable decode buffer, in bytes.
pub const SCRATCH_MAX: usize = 1024;

/// Fixed-capacity decode target for string and symbol payloads.
///
/// The buffer holds the payload of the most recently produced token only;
/// every decode overwrites the previous content. Exceeding the capacity is
/// a decode failure, not a reallocation.
pub(crate) struct Scratch {
    buf: [u8; SCRATCH_MAX],
    len: usize,
}

impl Scratch {
    pub fn new() -> Self {
        Scratch {
            buf: [0; SCRATCH_MAX],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push_byte(&mut self, b: u8) -> Result<(), ScanError> {
        if self.len == SCRATCH_MAX {
            return Err(ScanError::ScratchBufferFull);
        }
        self.buf[self.len] = b;
        self.len += 1;
        Ok(())
    }

    pub fn push_char(&mut self, c: char) -> Result<(), ScanError> {
        let mut utf8 = [0u8; 4];
        for &b in c.encode_utf8(&mut utf8).as_bytes() {
            self.push_byte(b)?;
        }
        Ok(())
    }

    /// Current content as text.
    ///
    /// Bytes are only ever appended as whole UTF-8 sequences copied from a
    /// `&str` or produced by `encode_utf8`, except when a decode aborts
    /// mid-sequence on overflow; in that case the valid prefix is exposed.
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.buf[..self.len]) {
            Ok(s) => s,
            Err(e) => {
                let valid = e.valid_up_to();
                core::str::from_utf8(&self.buf[..valid]).unwrap_or("")
            }
        }
    }

    /// Allocation-free comparison against `s`.
    pub fn eq_str(&self, s: &str) -> bool {
        self.buf[..self.len] == *s.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_read_back() {
        let mut scratch = Scratch::new();
        scratch.push_byte(b'h').unwrap();
        scratch.push_byte(b'i').unwrap();
        assert_eq!(scratch.as_str(), "hi");
        assert_eq!(scratch.len(), 2);
        assert!(scratch.eq_str("hi"));
        assert!(!scratch.eq_str("h"));
        assert!(!scratch.eq_str("hi!"));
    }

    #[test]
    fn clear_resets_content() {
        let mut scratch = Scratch::new();
        scratch.push_char('é').unwrap();
        assert_eq!(scratch.as_str(), "é");
        scratch.clear();
        assert_eq!(scratch.len(), 0);
        assert!(scratch.eq_str(""));
    }

    #[test]
    fn overflow_is_an_error() {
        let mut scratch = Scratch::new();
        for _ in 0..SCRATCH_MAX {
            scratch.push_byte(b'x').unwrap();
        }
        assert_eq!(scratch.push_byte(b'x'), Err(ScanError::ScratchBufferFull));
        // The buffer itself stays intact.
        assert_eq!(scratch.len(), SCRATCH_MAX);
    }

    #[test]
    fn multibyte_char_overflow_exposes_valid_prefix() {
        let mut scratch = Scratch::new();
        for _ in 0..SCRATCH_MAX - 1 {
            scratch.push_byte(b'x').unwrap();
        }
        // Two-byte char no longer fits.
        assert_eq!(scratch.push_char('é'), Err(ScanError::ScratchBufferFull));
        assert_eq!(scratch.as_str().len(), SCRATCH_MAX - 1);
    }
}
