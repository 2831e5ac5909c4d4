use std::borrow::Cow;

use crate::error::{FrameError, Result};
use crate::reader::Fields;
use crate::reserved::{is_reserved, ESCAPE, ESCAPED_ESCAPE, ESCAPED_SEPARATOR, SEPARATOR};

/// Length of `input` once escaped.
pub fn escaped_len(input: &[u8]) -> usize {
    input.len() + input.iter().filter(|b| is_reserved(**b)).count()
}

/// Escape a field so that it contains no raw [`SEPARATOR`].
///
/// ```text
/// 0x00 -> 0x01 0x01
/// 0x01 -> 0x01 0x02
/// other bytes unchanged
/// ```
///
/// The mapping is monotone (`0x00 < 0x01 < 0x02..`), so escaped fields keep
/// the bytewise order of their inputs. Input with nothing to escape is
/// returned borrowed.
pub fn escape(input: &[u8]) -> Cow<'_, [u8]> {
    let len = escaped_len(input);
    if len == input.len() {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(len);
    escape_into(input, &mut out);
    Cow::Owned(out)
}

/// Append the escaped form of `input` to `out`.
pub fn escape_into(input: &[u8], out: &mut Vec<u8>) {
    for &byte in input {
        match byte {
            SEPARATOR => out.extend_from_slice(&[ESCAPE, ESCAPED_SEPARATOR]),
            ESCAPE => out.extend_from_slice(&[ESCAPE, ESCAPED_ESCAPE]),
            other => out.push(other),
        }
    }
}

/// Reverse [`escape`].
///
/// Every escape marker must be followed by `0x01` or `0x02`; anything else,
/// including a marker at the very end, is rejected.
pub fn unescape(input: &[u8]) -> Result<Cow<'_, [u8]>> {
    let markers = input.iter().filter(|b| **b == ESCAPE).count();
    if markers == 0 {
        return Ok(Cow::Borrowed(input));
    }

    let mut out = Vec::with_capacity(input.len().saturating_sub(markers));
    let mut iter = input.iter().copied().enumerate();
    while let Some((offset, byte)) = iter.next() {
        if byte != ESCAPE {
            out.push(byte);
            continue;
        }
        match iter.next() {
            Some((_, code @ (ESCAPED_SEPARATOR | ESCAPED_ESCAPE))) => out.push(code - 1),
            Some((_, code)) => return Err(FrameError::InvalidEscape { offset, byte: code }),
            None => return Err(FrameError::DanglingEscape { offset }),
        }
    }
    Ok(Cow::Owned(out))
}

/// Join fields with a single [`SEPARATOR`] between consecutive fields.
///
/// No leading or trailing separator is written; zero fields produce an empty
/// frame. Fields must already be escaped.
///
/// ```text
/// ┌─────────┬──────┬─────────┬──────┬─────┬─────────┐
/// │ field 1 │ 0x00 │ field 2 │ 0x00 │ ... │ field n │
/// └─────────┴──────┴─────────┴──────┴─────┴─────────┘
/// ```
pub fn concat<F: AsRef<[u8]>>(fields: &[F]) -> Vec<u8> {
    let len = fields.iter().map(|f| f.as_ref().len()).sum::<usize>()
        + fields.len().saturating_sub(1);

    let mut out = Vec::with_capacity(len);
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(SEPARATOR);
        }
        out.extend_from_slice(field.as_ref());
    }
    out
}

/// Cut a frame on every raw [`SEPARATOR`].
///
/// Always returns at least one field: an empty frame yields one empty field
/// and a trailing separator yields a trailing empty field.
pub fn split(frame: &[u8]) -> Vec<&[u8]> {
    Fields::new(frame).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_bytes() {
        let escaped = escape(&[0x00, 0x01, 0x41]);
        assert_eq!(escaped.as_ref(), &[0x01, 0x01, 0x01, 0x02, 0x41]);
        assert_eq!(escaped_len(&[0x00, 0x01, 0x41]), 5);

        let restored = unescape(&escaped).unwrap();
        assert_eq!(restored.as_ref(), &[0x00, 0x01, 0x41]);
    }

    #[test]
    fn test_escape_borrows_plain_input() {
        let input = b"plain";
        assert!(matches!(escape(input), Cow::Borrowed(_)));
        assert!(matches!(unescape(input).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_adjacent_reserved_bytes() {
        let input = [0x01, 0x00, 0x00, 0x01, 0x01, 0x02];
        let escaped = escape(&input);
        assert!(!escaped.contains(&SEPARATOR));
        assert_eq!(unescape(&escaped).unwrap().as_ref(), &input);
    }

    #[test]
    fn test_escape_into_appends() {
        let mut out = vec![b'k', SEPARATOR];
        escape_into(&[0x00, 0x41, 0x01], &mut out);
        assert_eq!(out, vec![b'k', 0x00, 0x01, 0x01, 0x41, 0x01, 0x02]);
        assert_eq!(&out[2..], escape(&[0x00, 0x41, 0x01]).as_ref());
    }

    #[test]
    fn test_unescape_dangling_marker() {
        let err = unescape(&[0x41, 0x01]).unwrap_err();
        assert_eq!(err, FrameError::DanglingEscape { offset: 1 });
    }

    #[test]
    fn test_unescape_invalid_code() {
        let err = unescape(&[0x01, 0x07]).unwrap_err();
        assert_eq!(err, FrameError::InvalidEscape { offset: 0, byte: 0x07 });
    }

    #[test]
    fn test_concat_separators() {
        assert_eq!(concat(&[b"ab".as_ref(), b"c"]), vec![b'a', b'b', 0x00, b'c']);
        assert_eq!(concat(&[b"".as_ref(), b""]), vec![0x00]);
        assert!(concat::<&[u8]>(&[]).is_empty());
    }

    #[test]
    fn test_split_recovers_fields() {
        let fields: [&[u8]; 3] = [b"one", b"", b"three"];
        assert_eq!(split(&concat(&fields)), fields.to_vec());
    }

    #[test]
    fn test_split_edge_frames() {
        let empty: &[u8] = &[];
        assert_eq!(split(&[]), vec![empty]);
        assert_eq!(split(&[b'a', 0x00]), vec![&b"a"[..], empty]);
        assert_eq!(split(&[0x00]), vec![empty, empty]);
    }

    #[test]
    fn test_framed_fields_sort_as_tuples() {
        let short = concat(&[escape(b"a")]);
        let longer = concat(&[escape(b"a"), escape(b"b")]);
        let prefix_field = concat(&[escape(b"ab")]);

        assert!(short < longer);
        assert!(longer < prefix_field);
    }
}
