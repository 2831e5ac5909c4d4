//! Recursive-descent parser for type expressions.
//!
//! ```text
//! schema := scalar | "pair" "<" schema "," schema ">"
//!         | "list" "<" schema ">" | "reverse" "<" schema ">"
//! scalar := "i32" | "u32" | "i64" | "u64" | "f64"
//!         | "bigint" | "string" | "bytes"
//! ```
//!
//! Whitespace between tokens is ignored.

use tracing::debug;

use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::schema::Schema;

/// Parse a type expression with explicit limits.
pub fn parse(input: &str, config: &SchemaConfig) -> Result<Schema> {
    if input.len() > config.max_input_len {
        return Err(SchemaError::TooLong {
            len: input.len(),
            max: config.max_input_len,
        });
    }

    let mut parser = Parser {
        input,
        pos: 0,
        open: 0,
        max_depth: config.max_depth,
    };
    let schema = parser.schema()?;
    parser.skip_whitespace();
    if parser.pos != input.len() {
        return Err(parser.syntax("unexpected trailing input"));
    }

    debug!(%schema, depth = schema.depth(), "parsed schema");
    Ok(schema)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    open: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn schema(&mut self) -> Result<Schema> {
        self.skip_whitespace();
        let start = self.pos;
        let name = self.identifier();

        let schema = match name {
            "i32" => Schema::I32,
            "u32" => Schema::U32,
            "i64" => Schema::I64,
            "u64" => Schema::U64,
            "f64" => Schema::F64,
            "bigint" => Schema::BigInt,
            "string" => Schema::String,
            "bytes" => Schema::Bytes,
            "pair" => {
                self.enter()?;
                self.expect('<')?;
                let first = self.schema()?;
                self.expect(',')?;
                let second = self.schema()?;
                self.expect('>')?;
                self.open -= 1;
                Schema::Pair(Box::new(first), Box::new(second))
            }
            "list" => {
                self.enter()?;
                self.expect('<')?;
                let element = self.schema()?;
                self.expect('>')?;
                self.open -= 1;
                Schema::List(Box::new(element))
            }
            "reverse" => {
                self.enter()?;
                self.expect('<')?;
                let inner = self.schema()?;
                self.expect('>')?;
                self.open -= 1;
                Schema::Reverse(Box::new(inner))
            }
            "" => return Err(self.syntax("expected a type name")),
            other => {
                return Err(SchemaError::UnknownType {
                    name: other.to_string(),
                    position: start,
                })
            }
        };
        Ok(schema)
    }

    // Every composite holds at least one scalar, so `open + 1` is a lower
    // bound on the depth of the schema being parsed.
    fn enter(&mut self) -> Result<()> {
        self.open += 1;
        if self.open + 1 > self.max_depth {
            return Err(SchemaError::TooDeep {
                max: self.max_depth,
            });
        }
        Ok(())
    }

    fn identifier(&mut self) -> &'a str {
        let input = self.input;
        let start = self.pos;
        let len = input[start..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(input.len() - start);
        self.pos += len;
        &input[start..self.pos]
    }

    fn expect(&mut self, token: char) -> Result<()> {
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(token) {
            self.pos += token.len_utf8();
            Ok(())
        } else {
            Err(self.syntax(&format!("expected '{token}'")))
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn syntax(&self, message: &str) -> SchemaError {
        SchemaError::Syntax {
            position: self.pos,
            message: message.to_string(),
        }
    }
}
