use lexicode_schema::{Schema, Value};
use serde::Serialize;
use serde_json::Value as Json;
use tracing::debug;

use crate::cmd::{parse_schema, EncodeArgs};
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::{print_json, print_raw, print_table, OutputFormat};

#[derive(Serialize)]
struct EncodeOutput {
    schema: String,
    value: Json,
    len: usize,
    hex: String,
}

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = parse_schema(&args.schema)?;
    let (value, bytes) = encode_json(&schema, &args.value, "invalid value")?;
    debug!(len = bytes.len(), "encoded value");

    match format {
        OutputFormat::Json => print_json(&EncodeOutput {
            schema: schema.to_string(),
            value: value.to_json(),
            len: bytes.len(),
            hex: hex::encode(&bytes),
        })?,
        OutputFormat::Table => print_table(
            &["SCHEMA", "VALUE", "LEN", "HEX"],
            vec![vec![
                schema.to_string(),
                value.to_string(),
                bytes.len().to_string(),
                hex::encode(&bytes),
            ]],
        ),
        OutputFormat::Pretty => println!("{}", hex::encode(&bytes)),
        OutputFormat::Raw => print_raw(&bytes),
    }

    Ok(SUCCESS)
}

/// Parse `text` as JSON for `schema` and encode it.
pub fn encode_json(schema: &Schema, text: &str, context: &str) -> CliResult<(Value, Vec<u8>)> {
    let value = schema
        .value_from_json_str(text)
        .map_err(|err| schema_error(context, err))?;
    let bytes = schema
        .encode(&value)
        .map_err(|err| schema_error(context, err))?;
    Ok((value, bytes))
}
