use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;

/// An order-preserving codec for values of type `T`.
///
/// Implementations guarantee, for all values `a` and `b`:
///
/// - `a < b` exactly when `encode(a) < encode(b)` under unsigned bytewise
///   comparison (inverted for [`ReverseLexicoder`](crate::ReverseLexicoder))
/// - `decode(encode(a)) == a`
///
/// Codecs are immutable once built, so a single instance can be shared
/// freely between threads.
pub trait Lexicoder<T> {
    /// Encode a value. Infallible for every value of `T`.
    fn encode(&self, value: &T) -> Vec<u8>;

    /// Decode bytes produced by [`Lexicoder::encode`].
    fn decode(&self, bytes: &[u8]) -> Result<T>;
}

impl<T, L: Lexicoder<T> + ?Sized> Lexicoder<T> for &L {
    fn encode(&self, value: &T) -> Vec<u8> {
        (**self).encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        (**self).decode(bytes)
    }
}

impl<T, L: Lexicoder<T> + ?Sized> Lexicoder<T> for Box<L> {
    fn encode(&self, value: &T) -> Vec<u8> {
        (**self).encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        (**self).decode(bytes)
    }
}

impl<T, L: Lexicoder<T> + ?Sized> Lexicoder<T> for Rc<L> {
    fn encode(&self, value: &T) -> Vec<u8> {
        (**self).encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        (**self).decode(bytes)
    }
}

impl<T, L: Lexicoder<T> + ?Sized> Lexicoder<T> for Arc<L> {
    fn encode(&self, value: &T) -> Vec<u8> {
        (**self).encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        (**self).decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, I32Lexicoder, StringLexicoder};

    #[test]
    fn boxed_trait_object_encodes() {
        let codec: Box<dyn Lexicoder<i32> + Send + Sync> = Box::new(I32Lexicoder::new());
        assert_eq!(codec.encode(&0), vec![0x80, 0x00, 0x00, 0x00]);
        assert_eq!(codec.decode(&[0x80, 0x00, 0x00, 0x00]).unwrap(), 0);
    }

    #[test]
    fn shared_element_codec() {
        let element = Arc::new(StringLexicoder);
        let codec = list(Arc::clone(&element));
        let values = vec!["x".to_string(), "y".to_string()];
        let decoded: Vec<String> = codec.decode(&codec.encode(&values)).unwrap();
        assert_eq!(decoded, values);
        assert_eq!(Arc::strong_count(&element), 2);
    }

    #[test]
    fn borrowed_codec() {
        let inner = I32Lexicoder::new();
        let by_ref = &inner;
        assert_eq!(by_ref.encode(&-1), inner.encode(&-1));
    }
}
