//! Render command - fetch a topic table and export its curated columns.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;

use crate::cli::{OutputFormat, RequestArgs};

use super::{CommandResult, output_writer, renderer, request_params};

pub fn run(
    request: RequestArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> CommandResult {
    let params = request_params(&request)?;
    let renderer = renderer(&request, false)?;

    if verbose {
        eprintln!(
            "{} {} ({}) for {}",
            "Rendering".cyan().bold(),
            params.topic.white(),
            params.resolve_topic()?.source_table(),
            params.geo_filter()?.white()
        );
    }

    let rendered = renderer.render_params(&params)?;
    let mut writer = output_writer(&output)?;

    match format {
        OutputFormat::Tsv => rendered.table.write_delimited(&mut writer, b'\t')?,
        OutputFormat::Csv => rendered.table.write_delimited(&mut writer, b',')?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &rendered)?;
            writeln!(writer)?;
        }
    }

    if let Some(path) = output {
        eprintln!(
            "{} {} rows to {}",
            "Saved".green().bold(),
            rendered.table.rows.len().to_string().white().bold(),
            path.display().to_string().white()
        );
    } else if verbose {
        eprintln!(
            "{} rows, release {}",
            rendered.table.rows.len().to_string().white().bold(),
            rendered.request.release
        );
    }

    Ok(())
}
