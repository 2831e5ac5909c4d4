use std::marker::PhantomData;

use lexicode_codec::Lexicoder;
use tracing::debug;

use crate::entry::{EntryCodec, TypedEntry};
use crate::error::Result;

/// Decodes raw `(key, value)` pairs into [`TypedEntry`]s on demand.
///
/// A pair that fails to decode yields an error for that position only;
/// iteration continues with the next raw pair.
pub struct TypedEntries<'a, I, KC, VC, K, V> {
    inner: I,
    codec: &'a EntryCodec<KC, VC>,
    position: usize,
    _types: PhantomData<fn() -> (K, V)>,
}

impl<'a, I, KC, VC, K, V> TypedEntries<'a, I, KC, VC, K, V> {
    pub fn new(inner: I, codec: &'a EntryCodec<KC, VC>) -> Self {
        Self {
            inner,
            codec,
            position: 0,
            _types: PhantomData,
        }
    }

    /// Consume the adapter and return the raw iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, KC, VC, K, V, RK, RV> TypedEntries<'_, I, KC, VC, K, V>
where
    I: Iterator<Item = (RK, RV)>,
    RK: AsRef<[u8]>,
    RV: AsRef<[u8]>,
    KC: Lexicoder<K>,
    VC: Lexicoder<V>,
{
    fn decode(&self, position: usize, raw: (RK, RV)) -> Result<TypedEntry<K, V>> {
        let (raw_key, raw_value) = raw;
        self.codec
            .decode_entry(raw_key.as_ref(), raw_value.as_ref())
            .inspect_err(|err| debug!(position, error = %err, "raw entry failed to decode"))
    }
}

impl<I, KC, VC, K, V, RK, RV> Iterator for TypedEntries<'_, I, KC, VC, K, V>
where
    I: Iterator<Item = (RK, RV)>,
    RK: AsRef<[u8]>,
    RV: AsRef<[u8]>,
    KC: Lexicoder<K>,
    VC: Lexicoder<V>,
{
    type Item = Result<TypedEntry<K, V>>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let position = self.position;
        self.position += 1;
        Some(self.decode(position, raw))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
