//! Migrate command - convert a parameter payload to the current schema.

use std::io::Read;
use std::path::PathBuf;

use census_curate::{SchemaVersion, migrate_params};
use colored::Colorize;

use super::{CommandResult, read_to_string};

pub fn run(file: Option<PathBuf>) -> CommandResult {
    let body = match file {
        Some(ref path) => read_to_string(path)?,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };

    let payload: serde_json::Value = serde_json::from_str(&body)?;
    let version = SchemaVersion::detect(&payload);
    let migrated = migrate_params(payload)?;

    if version == SchemaVersion::V1 {
        eprintln!("{}", "Already current (v1); unchanged.".yellow());
    }
    println!("{}", serde_json::to_string_pretty(&migrated)?);
    Ok(())
}
