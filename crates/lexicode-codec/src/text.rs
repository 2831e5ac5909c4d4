use crate::error::Result;
use crate::traits::Lexicoder;

/// UTF-8 text codec: the encoding is the string's own bytes.
///
/// Bytewise order of UTF-8 matches code point order, which is the order
/// [`String`] itself uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringLexicoder;

impl Lexicoder<String> for StringLexicoder {
    fn encode(&self, value: &String) -> Vec<u8> {
        value.as_bytes().to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }
}

/// Raw byte string codec: the identity transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytesLexicoder;

impl Lexicoder<Vec<u8>> for BytesLexicoder {
    fn encode(&self, value: &Vec<u8>) -> Vec<u8> {
        value.clone()
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_string_passthrough() {
        let text = "héllo, 世界".to_string();
        let encoded = StringLexicoder.encode(&text);
        assert_eq!(encoded, text.as_bytes());
        assert_eq!(StringLexicoder.decode(&encoded).unwrap(), text);
    }

    #[test]
    fn test_empty_string() {
        assert!(StringLexicoder.encode(&String::new()).is_empty());
        assert_eq!(StringLexicoder.decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_string_order_matches_code_points() {
        let mut values: Vec<String> = ["b", "a", "ab", "", "\u{7f}", "\u{e9}", "\u{10000}", "\u{ffff}"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut by_bytes = values.clone();
        by_bytes.sort_by_key(|s| StringLexicoder.encode(s));
        values.sort();
        assert_eq!(by_bytes, values);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = StringLexicoder.decode(&[0x61, 0xFF, 0x62]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8(_)));
    }

    #[test]
    fn test_bytes_identity() {
        let raw = vec![0x00, 0x01, 0xFF];
        assert_eq!(BytesLexicoder.encode(&raw), raw);
        assert_eq!(BytesLexicoder.decode(&raw).unwrap(), raw);
    }
}
