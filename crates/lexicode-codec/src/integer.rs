//! Fixed-width integer codecs.
//!
//! Unsigned integers are written big-endian as-is: most significant byte
//! first already sorts numerically. Signed integers flip the sign bit first,
//! mapping `MIN..=MAX` onto `0..=UMAX` in order, and then reuse the unsigned
//! codec.

use bytes::{Buf, BufMut};

use crate::error::{CodecError, Result};
use crate::traits::Lexicoder;

/// Sign bit of a 32-bit integer.
pub const SIGN_BIT_32: u32 = 0x8000_0000;

/// Sign bit of a 64-bit integer.
pub const SIGN_BIT_64: u64 = 0x8000_0000_0000_0000;

fn fixed_width(bytes: &[u8], expected: usize) -> Result<&[u8]> {
    if bytes.len() != expected {
        return Err(CodecError::Width {
            expected,
            found: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Unsigned 32-bit codec: 4 bytes, big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U32Lexicoder;

impl U32Lexicoder {
    /// Encoded width in bytes.
    pub const WIDTH: usize = 4;

    /// Write the encoding of `value` into `dst`.
    pub fn encode_into(&self, value: u32, dst: &mut impl BufMut) {
        dst.put_u32(value);
    }
}

impl Lexicoder<u32> for U32Lexicoder {
    fn encode(&self, value: &u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIDTH);
        self.encode_into(*value, &mut out);
        out
    }

    fn decode(&self, bytes: &[u8]) -> Result<u32> {
        let mut buf = fixed_width(bytes, Self::WIDTH)?;
        Ok(buf.get_u32())
    }
}

/// Unsigned 64-bit codec: 8 bytes, big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U64Lexicoder;

impl U64Lexicoder {
    /// Encoded width in bytes.
    pub const WIDTH: usize = 8;

    /// Write the encoding of `value` into `dst`.
    pub fn encode_into(&self, value: u64, dst: &mut impl BufMut) {
        dst.put_u64(value);
    }
}

impl Lexicoder<u64> for U64Lexicoder {
    fn encode(&self, value: &u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIDTH);
        self.encode_into(*value, &mut out);
        out
    }

    fn decode(&self, bytes: &[u8]) -> Result<u64> {
        let mut buf = fixed_width(bytes, Self::WIDTH)?;
        Ok(buf.get_u64())
    }
}

/// Signed 32-bit codec: `value ^ 0x80000000`, 4 bytes, big-endian.
///
/// `i32::MIN` encodes to `00 00 00 00` and `i32::MAX` to `ff ff ff ff`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I32Lexicoder {
    unsigned: U32Lexicoder,
}

impl I32Lexicoder {
    /// Encoded width in bytes.
    pub const WIDTH: usize = U32Lexicoder::WIDTH;

    pub fn new() -> Self {
        Self::default()
    }

    /// Write the encoding of `value` into `dst`.
    pub fn encode_into(&self, value: i32, dst: &mut impl BufMut) {
        self.unsigned.encode_into(value as u32 ^ SIGN_BIT_32, dst);
    }
}

impl Lexicoder<i32> for I32Lexicoder {
    fn encode(&self, value: &i32) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIDTH);
        self.encode_into(*value, &mut out);
        out
    }

    fn decode(&self, bytes: &[u8]) -> Result<i32> {
        Ok((self.unsigned.decode(bytes)? ^ SIGN_BIT_32) as i32)
    }
}

/// Signed 64-bit codec: `value ^ 0x8000000000000000`, 8 bytes, big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I64Lexicoder {
    unsigned: U64Lexicoder,
}

impl I64Lexicoder {
    /// Encoded width in bytes.
    pub const WIDTH: usize = U64Lexicoder::WIDTH;

    pub fn new() -> Self {
        Self::default()
    }

    /// Write the encoding of `value` into `dst`.
    pub fn encode_into(&self, value: i64, dst: &mut impl BufMut) {
        self.unsigned.encode_into(value as u64 ^ SIGN_BIT_64, dst);
    }
}

impl Lexicoder<i64> for I64Lexicoder {
    fn encode(&self, value: &i64) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIDTH);
        self.encode_into(*value, &mut out);
        out
    }

    fn decode(&self, bytes: &[u8]) -> Result<i64> {
        Ok((self.unsigned.decode(bytes)? ^ SIGN_BIT_64) as i64)
    }
}
