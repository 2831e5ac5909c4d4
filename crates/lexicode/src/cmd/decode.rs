use serde::Serialize;
use serde_json::Value as Json;
use tracing::debug;

use crate::cmd::{parse_schema, DecodeArgs};
use crate::exit::{hex_error, json_error, schema_error, CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct DecodeOutput {
    schema: String,
    hex: String,
    value: Json,
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = parse_schema(&args.schema)?;
    let bytes = hex::decode(args.hex.trim()).map_err(|err| hex_error("invalid hex", err))?;
    let value = schema
        .decode(&bytes)
        .map_err(|err| schema_error("decode failed", err))?;
    debug!(len = bytes.len(), "decoded value");

    let json = value.to_json();
    match format {
        OutputFormat::Json => print_json(&DecodeOutput {
            schema: schema.to_string(),
            hex: hex::encode(&bytes),
            value: json,
        })?,
        OutputFormat::Table => print_table(
            &["SCHEMA", "HEX", "VALUE"],
            vec![vec![schema.to_string(), hex::encode(&bytes), json.to_string()]],
        ),
        OutputFormat::Pretty => {
            let text = serde_json::to_string_pretty(&json)
                .map_err(|err| json_error("serialize value", err))?;
            println!("{text}");
        }
        OutputFormat::Raw => println!("{json}"),
    }

    Ok(SUCCESS)
}
