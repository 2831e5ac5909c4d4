//! Order-preserving binary codecs ("lexicoders").
//!
//! Every codec maps values to bytes such that unsigned bytewise comparison of
//! the encodings reproduces the natural ordering of the values. Encodings
//! compose: [`PairLexicoder`] and [`ListLexicoder`] frame their element
//! encodings into tuple-ordered keys, and [`ReverseLexicoder`] inverts the
//! order of any codec.
//!
//! ```
//! use lexicode_codec::{pair, reverse, I32Lexicoder, Lexicoder, StringLexicoder};
//!
//! let codec = pair(StringLexicoder, reverse(I32Lexicoder::new()));
//! let newer = codec.encode(&("row".to_string(), 20i32));
//! let older = codec.encode(&("row".to_string(), 10i32));
//! assert!(newer < older);
//!
//! let decoded: (String, i32) = codec.decode(&newer).unwrap();
//! assert_eq!(decoded, ("row".to_string(), 20i32));
//! ```

pub mod bigint;
pub mod error;
pub mod float;
pub mod integer;
pub mod list;
pub mod pair;
pub mod reverse;
pub mod text;
pub mod traits;

pub use bigint::BigIntLexicoder;
pub use error::{CodecError, Result};
pub use float::DoubleLexicoder;
pub use integer::{I32Lexicoder, I64Lexicoder, U32Lexicoder, U64Lexicoder};
pub use list::ListLexicoder;
pub use pair::PairLexicoder;
pub use reverse::{ReverseLexicoder, SENTINEL};
pub use text::{BytesLexicoder, StringLexicoder};
pub use traits::Lexicoder;

/// Codec for `(A, B)` tuples ordered by `first`, then `second`.
pub fn pair<A, B>(first: A, second: B) -> PairLexicoder<A, B> {
    PairLexicoder::new(first, second)
}

/// Codec for sequences ordered element by element, shorter prefix first.
pub fn list<L>(element: L) -> ListLexicoder<L> {
    ListLexicoder::new(element)
}

/// Codec that inverts the ordering of `inner`.
pub fn reverse<L>(inner: L) -> ReverseLexicoder<L> {
    ReverseLexicoder::new(inner)
}
