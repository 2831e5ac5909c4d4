//! JSON mapping of [`Value`]s, guided by a [`Schema`].
//!
//! | Schema | JSON |
//! |---|---|
//! | `i32` `u32` `i64` `u64` | number |
//! | `f64` | number, or `"NaN"` / `"inf"` / `"-inf"` |
//! | `bigint` | decimal string (numbers accepted on input) |
//! | `string` | string |
//! | `bytes` | lowercase hex string |
//! | `pair<A,B>` | two-element array |
//! | `list<T>` | array |
//! | `reverse<T>` | same as `T` |

use num_bigint::BigInt;
use serde_json::{Number, Value as Json};

use crate::error::{Result, SchemaError};
use crate::schema::Schema;
use crate::value::Value;

impl Schema {
    /// Convert JSON into a value of this schema.
    pub fn value_from_json(&self, json: &Json) -> Result<Value> {
        let value = match (self, json) {
            (Schema::Reverse(inner), json) => inner.value_from_json(json)?,
            (Schema::I32, Json::Number(n)) => Value::I32(
                n.as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| mismatch(self, json))?,
            ),
            (Schema::U32, Json::Number(n)) => Value::U32(
                n.as_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(|| mismatch(self, json))?,
            ),
            (Schema::I64, Json::Number(n)) => {
                Value::I64(n.as_i64().ok_or_else(|| mismatch(self, json))?)
            }
            (Schema::U64, Json::Number(n)) => {
                Value::U64(n.as_u64().ok_or_else(|| mismatch(self, json))?)
            }
            (Schema::F64, Json::Number(n)) => {
                Value::F64(n.as_f64().ok_or_else(|| mismatch(self, json))?)
            }
            (Schema::F64, Json::String(s)) => Value::F64(match s.as_str() {
                "NaN" => f64::NAN,
                "inf" => f64::INFINITY,
                "-inf" => f64::NEG_INFINITY,
                _ => return Err(mismatch(self, json)),
            }),
            (Schema::BigInt, Json::Number(n)) => Value::BigInt(parse_bigint(&n.to_string(), self, json)?),
            (Schema::BigInt, Json::String(s)) => Value::BigInt(parse_bigint(s, self, json)?),
            (Schema::String, Json::String(s)) => Value::String(s.clone()),
            (Schema::Bytes, Json::String(s)) => {
                Value::Bytes(hex::decode(s).map_err(|_| mismatch(self, json))?)
            }
            (Schema::Pair(first, second), Json::Array(items)) if items.len() == 2 => Value::pair(
                first.value_from_json(&items[0])?,
                second.value_from_json(&items[1])?,
            ),
            (Schema::List(element), Json::Array(items)) => Value::List(
                items
                    .iter()
                    .map(|item| element.value_from_json(item))
                    .collect::<Result<_>>()?,
            ),
            _ => return Err(mismatch(self, json)),
        };
        Ok(value)
    }

    /// Parse JSON text into a value of this schema.
    pub fn value_from_json_str(&self, text: &str) -> Result<Value> {
        let json: Json = serde_json::from_str(text).map_err(|err| {
            SchemaError::Unrepresentable {
                schema: self.to_string(),
                found: format!("invalid JSON ({err})"),
            }
        })?;
        self.value_from_json(&json)
    }
}

impl Value {
    /// Convert to JSON using the mapping in this module.
    pub fn to_json(&self) -> Json {
        match self {
            Value::I32(v) => Json::from(*v),
            Value::U32(v) => Json::from(*v),
            Value::I64(v) => Json::from(*v),
            Value::U64(v) => Json::from(*v),
            Value::F64(v) => match Number::from_f64(*v) {
                Some(n) => Json::Number(n),
                None if v.is_nan() => Json::from("NaN"),
                None if *v > 0.0 => Json::from("inf"),
                None => Json::from("-inf"),
            },
            Value::BigInt(v) => Json::String(v.to_string()),
            Value::String(v) => Json::String(v.clone()),
            Value::Bytes(v) => Json::String(hex::encode(v)),
            Value::Pair(a, b) => Json::Array(vec![a.to_json(), b.to_json()]),
            Value::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
        }
    }
}

fn parse_bigint(text: &str, schema: &Schema, json: &Json) -> Result<BigInt> {
    text.parse().map_err(|_| mismatch(schema, json))
}

fn mismatch(schema: &Schema, json: &Json) -> SchemaError {
    SchemaError::Unrepresentable {
        schema: schema.to_string(),
        found: format!("JSON {json}"),
    }
}
