use lexicode_frame::{escape, escaped_len, unescape};

use crate::error::{CodecError, Result};
use crate::traits::Lexicoder;

/// Trailing byte of every reversed encoding.
pub const SENTINEL: u8 = 0xFF;

/// Wraps a codec and inverts its ordering.
///
/// ```text
/// complement(escape(inner.encode(v))) 0xff
/// ```
///
/// Complementing alone would leave a shorter encoding sorting before the
/// longer encodings it prefixes. Escaped bytes are never `0x00`, so their
/// complements are never `0xff`, and the trailing sentinel therefore sorts
/// every encoding after the encodings it is a prefix of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseLexicoder<L> {
    inner: L,
}

impl<L> ReverseLexicoder<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    /// The wrapped codec.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<T, L> Lexicoder<T> for ReverseLexicoder<L>
where
    L: Lexicoder<T>,
{
    fn encode(&self, value: &T) -> Vec<u8> {
        reverse_encoding(&self.inner.encode(value))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        self.inner.decode(&restore_encoding(bytes)?)
    }
}

/// Turn an encoding into its order-reversed form.
pub fn reverse_encoding(encoded: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(escaped_len(encoded) + 1);
    out.extend(escape(encoded).iter().map(|byte| !byte));
    out.push(SENTINEL);
    out
}

/// Undo [`reverse_encoding`].
pub fn restore_encoding(bytes: &[u8]) -> Result<Vec<u8>> {
    let (&last, body) = bytes
        .split_last()
        .ok_or(CodecError::MissingSentinel { found: None })?;
    if last != SENTINEL {
        return Err(CodecError::MissingSentinel { found: Some(last) });
    }

    let escaped: Vec<u8> = body.iter().map(|byte| !byte).collect();
    Ok(unescape(&escaped)?.into_owned())
}
