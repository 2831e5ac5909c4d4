use std::iter::FusedIterator;

use crate::reserved::SEPARATOR;

/// Lazily yields the fields of a frame, borrowing from the input.
///
/// Yields the same fields as [`split`](crate::split) without collecting
/// them: at least one field, and a trailing empty field after a trailing
/// separator.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Fields<'a> {
    /// Start reading fields from a frame.
    pub fn new(frame: &'a [u8]) -> Self {
        Self { rest: Some(frame) }
    }

    /// The unread remainder of the frame, if any field is left.
    pub fn remainder(&self) -> Option<&'a [u8]> {
        self.rest
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.iter().position(|b| *b == SEPARATOR) {
            Some(end) => {
                self.rest = Some(&rest[end + 1..]);
                Some(&rest[..end])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.rest {
            Some(rest) => (1, Some(rest.len() + 1)),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Fields<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::concat;

    #[test]
    fn read_single_field() {
        let mut fields = Fields::new(b"hello");
        assert_eq!(fields.next(), Some(&b"hello"[..]));
        assert_eq!(fields.next(), None);
        assert_eq!(fields.next(), None);
    }

    #[test]
    fn read_multiple_fields() {
        let frame = concat(&[b"one".as_ref(), b"two", b"three"]);
        let fields: Vec<&[u8]> = Fields::new(&frame).collect();
        assert_eq!(fields, vec![&b"one"[..], b"two", b"three"]);
    }

    #[test]
    fn empty_frame_has_one_empty_field() {
        let mut fields = Fields::new(&[]);
        assert_eq!(fields.next(), Some(&[][..]));
        assert_eq!(fields.next(), None);
    }

    #[test]
    fn remainder_tracks_progress() {
        let frame = [b'a', SEPARATOR, b'b'];
        let mut fields = Fields::new(&frame);
        fields.next();
        assert_eq!(fields.remainder(), Some(&b"b"[..]));
        fields.next();
        assert_eq!(fields.remainder(), None);
    }
}
