use std::borrow::Cow;

use lexicode_frame::{escaped_len, unescape, Fields, FrameBuilder};

use crate::error::{CodecError, Result};
use crate::traits::Lexicoder;

/// Codec for `(A, B)` tuples.
///
/// ```text
/// escape(first.encode(a)) 0x00 escape(second.encode(b))
/// ```
///
/// Pairs sort by their first element, ties broken by the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairLexicoder<A, B> {
    first: A,
    second: B,
}

impl<A, B> PairLexicoder<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Codec for the first element.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Codec for the second element.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B, LA, LB> Lexicoder<(A, B)> for PairLexicoder<LA, LB>
where
    LA: Lexicoder<A>,
    LB: Lexicoder<B>,
{
    fn encode(&self, value: &(A, B)) -> Vec<u8> {
        join_pair(&self.first.encode(&value.0), &self.second.encode(&value.1))
    }

    fn decode(&self, bytes: &[u8]) -> Result<(A, B)> {
        let [first, second] = split_pair(bytes)?;
        Ok((self.first.decode(&first)?, self.second.decode(&second)?))
    }
}

/// Frame two element encodings into a pair encoding.
pub fn join_pair(first: &[u8], second: &[u8]) -> Vec<u8> {
    let mut frame = FrameBuilder::with_capacity(escaped_len(first) + 1 + escaped_len(second));
    frame.push_field(first).push_field(second);
    frame.finish()
}

/// Recover the two element encodings of a pair encoding.
///
/// Any field count other than two is a [`CodecError::FieldCount`].
pub fn split_pair(frame: &[u8]) -> Result<[Cow<'_, [u8]>; 2]> {
    let mut fields = Fields::new(frame);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => Ok([unescape(first)?, unescape(second)?]),
        _ => Err(CodecError::FieldCount {
            expected: 2,
            found: Fields::new(frame).count(),
        }),
    }
}
