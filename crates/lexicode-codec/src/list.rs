use std::borrow::Cow;

use lexicode_frame::{unescape, Fields, FrameBuilder};

use crate::error::Result;
use crate::traits::Lexicoder;

/// Codec for variable-length sequences.
///
/// ```text
/// escape(e(v1)) 0x00 escape(e(v2)) 0x00 ... 0x00 escape(e(vn))
/// ```
///
/// Lists compare element by element; a strict prefix sorts before any
/// longer list that extends it. The empty list encodes to zero bytes.
///
/// A one-element list whose element encodes to zero bytes (for example
/// `[""]`) shares that empty encoding and decodes as the empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLexicoder<L> {
    element: L,
}

impl<L> ListLexicoder<L> {
    pub fn new(element: L) -> Self {
        Self { element }
    }

    /// Codec for each element.
    pub fn element(&self) -> &L {
        &self.element
    }
}

impl<T, L> Lexicoder<Vec<T>> for ListLexicoder<L>
where
    L: Lexicoder<T>,
{
    fn encode(&self, value: &Vec<T>) -> Vec<u8> {
        let encoded: Vec<Vec<u8>> = value.iter().map(|v| self.element.encode(v)).collect();
        join_elements(&encoded)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<T>> {
        split_elements(bytes)?
            .iter()
            .map(|field| self.element.decode(field))
            .collect()
    }
}

/// Frame element encodings into a list encoding.
pub fn join_elements<F: AsRef<[u8]>>(encoded: &[F]) -> Vec<u8> {
    let mut frame = FrameBuilder::with_capacity(FrameBuilder::framed_len(encoded));
    for element in encoded {
        frame.push_field(element.as_ref());
    }
    frame.finish()
}

/// Recover the element encodings of a list encoding.
pub fn split_elements(frame: &[u8]) -> Result<Vec<Cow<'_, [u8]>>> {
    if frame.is_empty() {
        return Ok(Vec::new());
    }
    Fields::new(frame)
        .map(|field| unescape(field).map_err(Into::into))
        .collect()
}
