use std::fmt;
use std::str::FromStr;

use lexicode_codec::list::{join_elements, split_elements};
use lexicode_codec::pair::{join_pair, split_pair};
use lexicode_codec::reverse::{restore_encoding, reverse_encoding};
use lexicode_codec::{
    BigIntLexicoder, BytesLexicoder, DoubleLexicoder, I32Lexicoder, I64Lexicoder, Lexicoder,
    StringLexicoder, U32Lexicoder, U64Lexicoder,
};

use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::parser;
use crate::value::Value;

/// A runtime description of a codec tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Schema {
    I32,
    U32,
    I64,
    U64,
    F64,
    BigInt,
    String,
    Bytes,
    Pair(Box<Schema>, Box<Schema>),
    List(Box<Schema>),
    Reverse(Box<Schema>),
}

impl Schema {
    /// Parse a type expression with default limits.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_config(input, &SchemaConfig::default())
    }

    /// Parse a type expression with explicit limits.
    pub fn parse_with_config(input: &str, config: &SchemaConfig) -> Result<Self> {
        parser::parse(input, config)
    }

    /// Nesting depth; scalars have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Schema::Pair(first, second) => 1 + first.depth().max(second.depth()),
            Schema::List(inner) | Schema::Reverse(inner) => 1 + inner.depth(),
            _ => 1,
        }
    }

    /// Encode a value.
    ///
    /// Fails with [`SchemaError::Unrepresentable`] when the value's shape
    /// does not match the schema.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let bytes = match (self, value) {
            (Schema::Reverse(inner), value) => reverse_encoding(&inner.encode(value)?),
            (Schema::I32, Value::I32(v)) => I32Lexicoder::new().encode(v),
            (Schema::U32, Value::U32(v)) => U32Lexicoder.encode(v),
            (Schema::I64, Value::I64(v)) => I64Lexicoder::new().encode(v),
            (Schema::U64, Value::U64(v)) => U64Lexicoder.encode(v),
            (Schema::F64, Value::F64(v)) => DoubleLexicoder::new().encode(v),
            (Schema::BigInt, Value::BigInt(v)) => BigIntLexicoder::new().encode(v),
            (Schema::String, Value::String(v)) => StringLexicoder.encode(v),
            (Schema::Bytes, Value::Bytes(v)) => BytesLexicoder.encode(v),
            (Schema::Pair(first, second), Value::Pair(a, b)) => {
                join_pair(&first.encode(a)?, &second.encode(b)?)
            }
            (Schema::List(element), Value::List(items)) => {
                let encoded = items
                    .iter()
                    .map(|item| element.encode(item))
                    .collect::<Result<Vec<_>>>()?;
                join_elements(&encoded)
            }
            (schema, value) => return Err(unrepresentable(schema, value)),
        };
        Ok(bytes)
    }

    /// Decode bytes produced by [`Schema::encode`] with the same schema.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let value = match self {
            Schema::I32 => Value::I32(I32Lexicoder::new().decode(bytes)?),
            Schema::U32 => Value::U32(U32Lexicoder.decode(bytes)?),
            Schema::I64 => Value::I64(I64Lexicoder::new().decode(bytes)?),
            Schema::U64 => Value::U64(U64Lexicoder.decode(bytes)?),
            Schema::F64 => Value::F64(DoubleLexicoder::new().decode(bytes)?),
            Schema::BigInt => Value::BigInt(BigIntLexicoder::new().decode(bytes)?),
            Schema::String => Value::String(StringLexicoder.decode(bytes)?),
            Schema::Bytes => Value::Bytes(BytesLexicoder.decode(bytes)?),
            Schema::Pair(first, second) => {
                let [a, b] = split_pair(bytes)?;
                Value::pair(first.decode(&a)?, second.decode(&b)?)
            }
            Schema::List(element) => Value::List(
                split_elements(bytes)?
                    .iter()
                    .map(|field| element.decode(field))
                    .collect::<Result<_>>()?,
            ),
            Schema::Reverse(inner) => inner.decode(&restore_encoding(bytes)?)?,
        };
        Ok(value)
    }
}

fn unrepresentable(schema: &Schema, value: &Value) -> SchemaError {
    let found = match value {
        Value::Pair(..) | Value::List(_) => value.type_name().to_string(),
        _ => format!("{} {value}", value.type_name()),
    };
    SchemaError::Unrepresentable {
        schema: schema.to_string(),
        found,
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::I32 => f.write_str("i32"),
            Schema::U32 => f.write_str("u32"),
            Schema::I64 => f.write_str("i64"),
            Schema::U64 => f.write_str("u64"),
            Schema::F64 => f.write_str("f64"),
            Schema::BigInt => f.write_str("bigint"),
            Schema::String => f.write_str("string"),
            Schema::Bytes => f.write_str("bytes"),
            Schema::Pair(first, second) => write!(f, "pair<{first},{second}>"),
            Schema::List(element) => write!(f, "list<{element}>"),
            Schema::Reverse(inner) => write!(f, "reverse<{inner}>"),
        }
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use lexicode_codec::{list, pair, reverse, CodecError};
    use num_bigint::BigInt;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn matches_static_codec_bytes() {
        let schema = Schema::parse("list<pair<string,reverse<bigint>>>").unwrap();
        let typed = list(pair(StringLexicoder, reverse(BigIntLexicoder::new())));

        let rows = vec![
            ("a".to_string(), BigInt::from(-5)),
            ("b\u{0}".to_string(), BigInt::from(10).pow(20)),
        ];
        let value = Value::List(
            rows.iter()
                .map(|(k, v)| Value::pair(k.as_str().into(), v.clone().into()))
                .collect(),
        );

        let dynamic = schema.encode(&value).unwrap();
        assert_eq!(dynamic, typed.encode(&rows));
        assert_eq!(schema.decode(&dynamic).unwrap(), value);
    }

    #[test]
    fn pair_string_int_roundtrip() {
        let schema: Schema = "pair<string,i32>".parse().unwrap();
        let value = Value::pair("a".into(), 5i32.into());
        let bytes = schema.encode(&value).unwrap();
        assert_eq!(schema.decode(&bytes).unwrap(), value);
    }

    #[test]
    fn reverse_keeps_value_shape() {
        let schema = Schema::parse("reverse<u64>").unwrap();
        let small = schema.encode(&Value::U64(1)).unwrap();
        let large = schema.encode(&Value::U64(2)).unwrap();
        assert!(large < small);
        assert_eq!(schema.decode(&small).unwrap(), Value::U64(1));
    }

    #[test]
    fn mismatched_value_is_unrepresentable() {
        let schema = Schema::parse("pair<string,i32>").unwrap();
        let err = schema
            .encode(&Value::pair("a".into(), Value::I64(5)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unrepresentable);
        assert_eq!(err.to_string(), "i64 5 is not representable as i32");
    }

    #[test]
    fn corrupt_bytes_are_format_errors() {
        let schema = Schema::parse("pair<string,i32>").unwrap();
        let err = schema.decode(b"no-separator").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            err,
            SchemaError::Codec(CodecError::FieldCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn depth_counts_nesting() {
        assert_eq!(Schema::I32.depth(), 1);
        assert_eq!(Schema::parse("pair<i32,list<i32>>").unwrap().depth(), 3);
    }
}
