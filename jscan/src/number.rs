// SPDX-License-Identifier: Apache-2.0

//! The number decoder.

use crate::error::ScanError;

/// A decoded numeric payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

/// Decodes a number starting at `*pos`, leaving the cursor on the first
/// byte past it.
///
/// Digits accumulate through `(acc << 1) + (acc << 3) + digit`, a
/// strength-reduced multiply by ten; overflow wraps silently. A `.`
/// switches to fractional mode: the value so far becomes the float's whole
/// part and the accumulator restarts counting digits after the point, which
/// are divided by 10^count on completion. A sign is only legal as the very
/// first byte and is applied to the final value exactly once. An `e`/`E`
/// suffix re-enters this function to decode the exponent, which must itself
/// come out as an integer; the mantissa is then scaled by 10^exponent.
pub(crate) fn scan(text: &[u8], pos: &mut usize) -> Result<Number, ScanError> {
    let start = *pos;
    let mut int: i64 = 0;
    let mut whole: f64 = 0.0;
    let mut is_float = false;
    let mut negative = false;
    let mut any_digits = false;
    // Cursor position right after the most recent `.`, for counting
    // fractional digits.
    let mut frac_start = *pos;

    loop {
        let b = match text.get(*pos) {
            Some(&b) => b,
            None => 0,
        };
        match b {
            b'0'..=b'9' => {
                int = int
                    .wrapping_shl(1)
                    .wrapping_add(int.wrapping_shl(3))
                    .wrapping_add((b ^ b'0') as i64);
                *pos += 1;
                any_digits = true;
            }
            b'.' => {
                if is_float {
                    return Err(ScanError::MalformedNumber);
                }
                *pos += 1;
                frac_start = *pos;
                whole = int as f64;
                int = 0;
                is_float = true;
            }
            b'-' | b'+' => {
                if *pos != start {
                    return Err(ScanError::MalformedNumber);
                }
                negative = b == b'-';
                *pos += 1;
            }
            b'e' | b'E' if any_digits => {
                let frac_digits = *pos - frac_start;
                *pos += 1;
                let exponent = match scan(text, pos)? {
                    Number::Int(e) => e,
                    Number::Float(_) => return Err(ScanError::MalformedNumber),
                };
                let mut value = mantissa(int, whole, is_float, frac_digits);
                if negative {
                    value = -value;
                }
                return Ok(Number::Float(value * pow10(exponent)));
            }
            _ => {
                if !any_digits {
                    return Err(ScanError::MalformedNumber);
                }
                if is_float {
                    let mut value = mantissa(int, whole, true, *pos - frac_start);
                    if negative {
                        value = -value;
                    }
                    return Ok(Number::Float(value));
                }
                let value = if negative { int.wrapping_neg() } else { int };
                return Ok(Number::Int(value));
            }
        }
    }
}

fn mantissa(frac: i64, whole: f64, is_float: bool, frac_digits: usize) -> f64 {
    if !is_float {
        return frac as f64;
    }
    let mut scale = 1.0;
    for _ in 0..frac_digits {
        scale *= 10.0;
    }
    whole + frac as f64 / scale
}

/// 10^exp by repeated multiplication; a positive exponent scales up, a
/// negative one scales down.
fn pow10(exp: i64) -> f64 {
    let mut value = 1.0;
    if exp >= 0 {
        for _ in 0..exp {
            value *= 10.0;
        }
    } else {
        for _ in 0..exp.unsigned_abs() {
            value /= 10.0;
        }
    }
    value
}
