use crate::error::Result;
use crate::integer::{U64Lexicoder, SIGN_BIT_64};
use crate::traits::Lexicoder;

/// IEEE-754 double codec.
///
/// The raw bit pattern is transformed so that unsigned comparison matches
/// numeric order: negative values have every bit complemented, non-negative
/// values have the sign bit flipped. The result is written through the
/// unsigned 64-bit codec.
///
/// Order is `-inf < negatives < -0.0 < 0.0 < positives < inf`. The position
/// of NaN is undefined: each NaN bit pattern lands wherever its bits put it
/// (negative-signed NaNs below `-inf`, positive-signed NaNs above `inf`).
/// Every bit pattern, NaN payloads included, round-trips exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleLexicoder {
    bits: U64Lexicoder,
}

impl DoubleLexicoder {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_sortable(value: f64) -> u64 {
    let bits = value.to_bits() as i64;
    if bits < 0 {
        !bits as u64
    } else {
        bits as u64 ^ SIGN_BIT_64
    }
}

fn from_sortable(sortable: u64) -> f64 {
    let bits = sortable as i64;
    if bits < 0 {
        f64::from_bits(sortable ^ SIGN_BIT_64)
    } else {
        f64::from_bits(!bits as u64)
    }
}

impl Lexicoder<f64> for DoubleLexicoder {
    fn encode(&self, value: &f64) -> Vec<u8> {
        self.bits.encode(&to_sortable(*value))
    }

    fn decode(&self, bytes: &[u8]) -> Result<f64> {
        Ok(from_sortable(self.bits.decode(bytes)?))
    }
}
