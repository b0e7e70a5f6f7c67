//! Raw command - fetch a topic table and print every column, uncurated.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;

use crate::cli::RequestArgs;

use super::{CommandResult, output_writer, renderer, request_params};

pub fn run(
    request: RequestArgs,
    moe: bool,
    labels: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> CommandResult {
    let params = request_params(&request)?;
    let raw = renderer(&request, moe)?.render_raw(&params)?;
    let mut writer = output_writer(&output)?;

    if labels {
        for (code, label) in &raw.labels {
            writeln!(writer, "{}\t{}", code, label)?;
        }
    } else {
        serde_json::to_writer_pretty(&mut writer, &raw)?;
        writeln!(writer)?;
    }

    if verbose {
        eprintln!(
            "{} {} geographies, {} columns from {}",
            "Fetched".cyan().bold(),
            raw.table.len().to_string().white().bold(),
            raw.labels.len().to_string().white().bold(),
            raw.request.table_id
        );
    }

    Ok(())
}
