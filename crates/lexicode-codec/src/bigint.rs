//! Arbitrary-precision signed integer codec.
//!
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────┐
//! │ Length header (4B)   │ Magnitude (|len| bytes)                  │
//! │ i32 codec of ±len    │ two's complement, top bit of byte 0      │
//! │ (negated if value<0) │ flipped                                  │
//! └──────────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! The header decides order whenever lengths differ: longer positives sort
//! later, longer negatives (more negative) sort earlier. Equal lengths fall
//! through to the magnitude bytes, which compare correctly once the two's
//! complement sign bit is flipped.

use bytes::{Buf, BufMut};
use num_bigint::BigInt;
use num_traits::Signed;

use crate::error::{CodecError, Result};
use crate::integer::I32Lexicoder;
use crate::traits::Lexicoder;

/// Size of the length header.
pub const HEADER_LEN: usize = I32Lexicoder::WIDTH;

/// Largest magnitude, in bytes, that the length header can describe.
pub const MAX_MAGNITUDE_LEN: usize = i32::MAX as usize;

const TOP_BIT: u8 = 0x80;

/// Order-preserving codec for [`BigInt`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigIntLexicoder {
    header: I32Lexicoder,
}

impl BigIntLexicoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Lexicoder<BigInt> for BigIntLexicoder {
    /// # Panics
    ///
    /// Panics if the two's complement form of `value` is longer than
    /// [`MAX_MAGNITUDE_LEN`] bytes.
    fn encode(&self, value: &BigInt) -> Vec<u8> {
        let mut magnitude = value.to_signed_bytes_be();
        if magnitude.is_empty() {
            magnitude.push(0);
        }
        magnitude[0] ^= TOP_BIT;

        assert!(
            magnitude.len() <= MAX_MAGNITUDE_LEN,
            "integer magnitude of {} bytes exceeds the length header range",
            magnitude.len()
        );
        let len = magnitude.len() as i32;
        let len = if value.is_negative() { -len } else { len };

        let mut out = Vec::with_capacity(HEADER_LEN + magnitude.len());
        self.header.encode_into(len, &mut out);
        out.put_slice(&magnitude);
        out
    }

    fn decode(&self, bytes: &[u8]) -> Result<BigInt> {
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::Truncated {
                needed: HEADER_LEN,
                found: bytes.len(),
            });
        }

        let mut buf = bytes;
        let len = self.header.decode(&buf[..HEADER_LEN])?;
        buf.advance(HEADER_LEN);

        let declared = len.unsigned_abs() as usize;
        if declared == 0 {
            return Err(CodecError::EmptyMagnitude);
        }
        if buf.remaining() != declared {
            return Err(CodecError::LengthHeader {
                declared,
                remaining: buf.remaining(),
            });
        }

        let mut magnitude = buf.to_vec();
        magnitude[0] ^= TOP_BIT;
        if has_redundant_sign_byte(&magnitude) {
            return Err(CodecError::NonCanonical);
        }
        let value = BigInt::from_signed_bytes_be(&magnitude);

        if value.is_negative() != (len < 0) {
            return Err(CodecError::SignMismatch);
        }
        Ok(value)
    }
}

// A leading 0x00 or 0xFF that only repeats the sign of the next byte means
// the encoder would have produced a shorter magnitude for the same value.
fn has_redundant_sign_byte(magnitude: &[u8]) -> bool {
    match magnitude {
        [0x00, next, ..] => *next & TOP_BIT == 0,
        [0xFF, next, ..] => *next & TOP_BIT != 0,
        _ => false,
    }
}
