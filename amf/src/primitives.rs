//! Codecs shared by both dialects: U29 varints, doubles and length checks.

use bytes::BufMut;

use crate::EncodingError;

pub(crate) const U29_MAX: u32 = (1 << 29) - 1;

/// Largest length that fits a U29 together with its inline flag bit.
pub(crate) const U28_MAX: u32 = (1 << 28) - 1;

pub(crate) const I29_MIN: i32 = -(1 << 28);
pub(crate) const I29_MAX: i32 = U29_MAX as i32;

const NAN_BITS: u64 = 0xFFF8_0000_0000_0000;

/// Returns the value as an AMF3 integer if it is integral and in range.
///
/// The upper bound is `2^29 - 1`, so values in `[2^28, 2^29 - 1]` are written
/// as integers even though decoders read them back as negative numbers.
pub(crate) fn as_i29(n: f64) -> Option<i32> {
    if n.fract() == 0.0 && n >= I29_MIN as f64 && n <= I29_MAX as f64 {
        Some(n as i32)
    } else {
        None
    }
}

pub(crate) fn put_u29<B: BufMut>(buf: &mut B, mut u29: u32) -> Result<(), EncodingError> {
    const ONE_BYTE_MAX: u32 = 2u32.pow(7) - 1;
    const TWO_BYTE_MAX: u32 = 2u32.pow(14) - 1;
    const THREE_BYTE_MAX: u32 = 2u32.pow(21) - 1;

    match u29 {
        n if n <= ONE_BYTE_MAX => {
            buf.put_u8(n as u8);
        }
        n if n <= TWO_BYTE_MAX => {
            let second = (u29 & 0x7F) as u8;
            u29 >>= 7;
            let first = 0x80 | (u29 & 0x7F) as u8;
            buf.put_slice(&[first, second]);
        }
        n if n <= THREE_BYTE_MAX => {
            let third = (u29 & 0x7F) as u8;
            u29 >>= 7;
            let second = 0x80 | (u29 & 0x7F) as u8;
            u29 >>= 7;
            let first = 0x80 | (u29 & 0x7F) as u8;
            buf.put_slice(&[first, second, third]);
        }
        n if n <= U29_MAX => {
            // last byte carries 8 bits
            let fourth = (u29 & 0xFF) as u8;
            u29 >>= 8;
            let third = 0x80 | (u29 & 0x7F) as u8;
            u29 >>= 7;
            let second = 0x80 | (u29 & 0x7F) as u8;
            u29 >>= 7;
            let first = 0x80 | (u29 & 0x7F) as u8;
            buf.put_slice(&[first, second, third, fourth]);
        }
        n => return Err(EncodingError::OutOfRangeU29(n)),
    }
    Ok(())
}

pub(crate) fn put_i29<B: BufMut>(buf: &mut B, i29: i32) -> Result<(), EncodingError> {
    if !(I29_MIN..=I29_MAX).contains(&i29) {
        return Err(EncodingError::OutOfRangeInteger(i29));
    }
    put_u29(buf, (i29 as u32) & U29_MAX)
}

/// Writes a length with the AMF3 inline flag set (`len << 1 | 1`).
pub(crate) fn put_inline_len<B: BufMut>(buf: &mut B, len: usize) -> Result<(), EncodingError> {
    put_u29(buf, ((len as u32) << 1) | 0b1)
}

/// Big-endian IEEE-754 double. NaN is always written as `FF F8 00 .. 00`.
pub(crate) fn put_double<B: BufMut>(buf: &mut B, d: f64) {
    if d.is_nan() {
        buf.put_u64(NAN_BITS);
    } else {
        buf.put_f64(d);
    }
}

pub(crate) fn check_string_len(len: usize, max: usize) -> Result<(), EncodingError> {
    if len > max {
        return Err(EncodingError::StringTooLong { len, max });
    }
    Ok(())
}

pub(crate) fn check_array_len(len: usize, max: usize) -> Result<(), EncodingError> {
    if len > max {
        return Err(EncodingError::ArrayTooLong { len, max });
    }
    Ok(())
}
