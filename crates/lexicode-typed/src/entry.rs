use lexicode_codec::Lexicoder;

use crate::error::{Result, TypedError};
use crate::iter::TypedEntries;

/// A decoded key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedEntry<K, V> {
    pub key: K,
    pub value: V,
}

/// The key codec and value codec of one table.
#[derive(Debug, Clone, Default)]
pub struct EntryCodec<KC, VC> {
    key: KC,
    value: VC,
}

impl<KC, VC> EntryCodec<KC, VC> {
    pub fn new(key: KC, value: VC) -> Self {
        Self { key, value }
    }

    /// Codec used for keys.
    pub fn key_codec(&self) -> &KC {
        &self.key
    }

    /// Codec used for values.
    pub fn value_codec(&self) -> &VC {
        &self.value
    }

    /// Decode one raw entry.
    pub fn decode_entry<K, V>(&self, raw_key: &[u8], raw_value: &[u8]) -> Result<TypedEntry<K, V>>
    where
        KC: Lexicoder<K>,
        VC: Lexicoder<V>,
    {
        let key = self.key.decode(raw_key).map_err(TypedError::Key)?;
        let value = self.value.decode(raw_value).map_err(TypedError::Value)?;
        Ok(TypedEntry { key, value })
    }

    /// Encode a key for writing or for seeking a range start.
    pub fn encode_key<K>(&self, key: &K) -> Vec<u8>
    where
        KC: Lexicoder<K>,
    {
        self.key.encode(key)
    }

    /// Encode a value for writing back under an existing key.
    pub fn encode_value<V>(&self, value: &V) -> Vec<u8>
    where
        VC: Lexicoder<V>,
    {
        self.value.encode(value)
    }

    /// Encode a whole entry.
    pub fn encode_entry<K, V>(&self, key: &K, value: &V) -> (Vec<u8>, Vec<u8>)
    where
        KC: Lexicoder<K>,
        VC: Lexicoder<V>,
    {
        (self.encode_key(key), self.encode_value(value))
    }

    /// Lazily decode an iterator of raw entries.
    pub fn entries<I, K, V>(&self, raw: I) -> TypedEntries<'_, I::IntoIter, KC, VC, K, V>
    where
        I: IntoIterator,
    {
        TypedEntries::new(raw.into_iter(), self)
    }
}
