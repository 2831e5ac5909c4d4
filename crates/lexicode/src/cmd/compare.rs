use serde::Serialize;
use tracing::debug;

use crate::cmd::encode::encode_json;
use crate::cmd::{parse_schema, CompareArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{ordering_name, ordering_symbol, print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct CompareOutput {
    schema: String,
    left: String,
    right: String,
    ordering: &'static str,
}

pub fn run(args: CompareArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = parse_schema(&args.schema)?;
    let (_, left) = encode_json(&schema, &args.left, "invalid left value")?;
    let (_, right) = encode_json(&schema, &args.right, "invalid right value")?;

    let ordering = left.cmp(&right);
    debug!(ordering = ordering_name(ordering), "compared encodings");

    match format {
        OutputFormat::Json => print_json(&CompareOutput {
            schema: schema.to_string(),
            left: hex::encode(&left),
            right: hex::encode(&right),
            ordering: ordering_name(ordering),
        })?,
        OutputFormat::Table => print_table(
            &["LEFT", "ORDER", "RIGHT"],
            vec![vec![
                hex::encode(&left),
                ordering_symbol(ordering).to_string(),
                hex::encode(&right),
            ]],
        ),
        OutputFormat::Pretty => println!(
            "{} {} {}",
            args.left.trim(),
            ordering_symbol(ordering),
            args.right.trim()
        ),
        OutputFormat::Raw => println!("{}", ordering as i8),
    }

    Ok(SUCCESS)
}
