//! CLI command implementations.

pub mod migrate;
pub mod raw;
pub mod render;
pub mod topics;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use census_curate::{
    CensusReporterClient, DataSource, MockSource, ParamsV1, RenderConfig, Renderer, Sumlevel,
};

use crate::cli::RequestArgs;

type CommandResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Parameters from `--params` or from the individual flags.
fn request_params(args: &RequestArgs) -> CommandResult<ParamsV1> {
    if let Some(ref path) = args.params {
        let payload: serde_json::Value = serde_json::from_str(&read_to_string(path)?)?;
        return Ok(ParamsV1::from_value(payload)?);
    }

    let topic = args.topic.clone().ok_or("--topic is required")?;
    let sumlevel: Sumlevel = args.sumlevel.parse()?;
    let mut params = ParamsV1::new(topic, sumlevel);
    if let Some(ref state) = args.state {
        params = params.with_statecode(state.to_lowercase());
    }
    Ok(params)
}

fn renderer(args: &RequestArgs, include_moe: bool) -> CommandResult<Renderer<Box<dyn DataSource>>> {
    let mut config = RenderConfig::from_env()?.with_moe(include_moe);
    if let Some(ref release) = args.release {
        config = config.with_release(release.clone());
    }

    let source: Box<dyn DataSource> = match args.offline {
        Some(ref path) => Box::new(MockSource::from_file(path)?),
        None => Box::new(CensusReporterClient::with_config(&config)?),
    };
    Ok(Renderer::with_config(source, config))
}

fn read_to_string(path: &Path) -> CommandResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e).into())
}

/// Output sink: a file when given, stdout otherwise.
fn output_writer(output: &Option<PathBuf>) -> CommandResult<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(
            File::create(path).map_err(|e| format!("Cannot create {}: {}", path.display(), e))?,
        ),
        None => Box::new(io::stdout().lock()),
    })
}
