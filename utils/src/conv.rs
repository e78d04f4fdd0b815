//! Conversion between `i32` and NUL-terminated ASCII digit strings in bases 2 to 16
//!
//! The plain [`itoa`]/[`atoi`] pair reports failure with a `0` sentinel. The `try_` variants carry
//! the reason in a [`ConvError`].

use crate::const_max;

/// Digit glyphs, indexed by digit value
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Smallest supported base
pub const MIN_BASE: u32 = 2;
/// Largest supported base
pub const MAX_BASE: u32 = 16;

/// 32 binary digits + NUL
const BINARY_LEN: usize = u32::BITS as usize + 1;
/// Sign + 10 decimal digits + NUL
const DECIMAL_LEN: usize = 1 + 10 + 1;

/// Buffer size that fits the encoding of any `i32` in any supported base
pub const ITOA_BUF_LEN: usize = const_max!(BINARY_LEN, DECIMAL_LEN);

/// Possible errors while converting
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConvError {
    /// Base outside of `MIN_BASE..=MAX_BASE`
    InvalidBase(u32),
    /// Output buffer can't hold the digits, sign and terminator
    BufferTooSmall { needed: usize, got: usize },
    /// Byte at `index` isn't a digit of the requested base
    InvalidDigit { index: usize, byte: u8 },
    /// More digits were requested than the buffer holds
    DigitCountOutOfBounds { digits: u8, len: usize },
}

#[inline]
fn check_base(base: u32) -> Result<(), ConvError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ConvError::InvalidBase(base))
    }
}

/// Encode `data` in `base` into `buf`, most significant digit first, followed by a NUL.
///
/// Only base 10 gets a `-` sign. In every other base a negative value is written as its 32-bit
/// two's complement pattern, so `-1` in base 16 is `FFFFFFFF`.
///
/// Returns the encoded length, counting the sign and the terminator. Nothing is written on error.
#[allow(clippy::cast_sign_loss)]
pub fn try_itoa(data: i32, buf: &mut [u8], base: u32) -> Result<usize, ConvError> {
    check_base(base)?;

    let negative = data < 0 && base == 10;
    let mut magnitude = if negative {
        data.unsigned_abs()
    } else {
        data as u32
    };

    // Digits come out least significant first
    let mut reversed = [0u8; u32::BITS as usize];
    let mut count = 0;
    loop {
        reversed[count] = DIGITS[(magnitude % base) as usize];
        count += 1;
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }

    let needed = usize::from(negative) + count + 1;
    if buf.len() < needed {
        return Err(ConvError::BufferTooSmall {
            needed,
            got: buf.len(),
        });
    }

    let mut pos = 0;
    if negative {
        buf[pos] = b'-';
        pos += 1;
    }
    for &digit in reversed[..count].iter().rev() {
        buf[pos] = digit;
        pos += 1;
    }
    buf[pos] = 0;

    Ok(needed)
}

/// Decode the first `digits` bytes of `buf` (a leading `-` counts as one of them) as a number in
/// `base`.
///
/// Upper and lower case hex digits are both accepted. Accumulation wraps at 32 bits, so the two's
/// complement strings produced by [`try_itoa`] for negative values decode back to the same value.
#[allow(clippy::cast_possible_wrap)]
pub fn try_atoi(buf: &[u8], digits: u8, base: u32) -> Result<i32, ConvError> {
    check_base(base)?;

    let text = buf
        .get(..usize::from(digits))
        .ok_or(ConvError::DigitCountOutOfBounds {
            digits,
            len: buf.len(),
        })?;

    let (negative, body) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, text),
    };
    let offset = usize::from(negative);

    let mut result: u32 = 0;
    for (i, &byte) in body.iter().enumerate() {
        let value = char::from(byte)
            .to_digit(base)
            .ok_or(ConvError::InvalidDigit {
                index: i + offset,
                byte,
            })?;
        result = result.wrapping_mul(base).wrapping_add(value);
    }

    let result = result as i32;
    Ok(if negative { result.wrapping_neg() } else { result })
}

/// Encode `data` in `base` into `buf`. See [`try_itoa`].
///
/// Returns the encoded length including sign and terminator, or `0` if `base` is out of range or
/// `buf` is too short.
pub fn itoa(data: i32, buf: &mut [u8], base: u32) -> u8 {
    try_itoa(data, buf, base)
        .ok()
        .and_then(|len| u8::try_from(len).ok())
        .unwrap_or(0)
}

/// Decode `digits` bytes of `buf` in `base`. See [`try_atoi`].
///
/// Returns `0` on a bad base, a bad digit or a digit count past the end of `buf`.
pub fn atoi(buf: &[u8], digits: u8, base: u32) -> i32 {
    try_atoi(buf, digits, base).unwrap_or(0)
}
