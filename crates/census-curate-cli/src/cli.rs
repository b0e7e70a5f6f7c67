//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// census-curate: curated topic tables from the Census Reporter API
#[derive(Parser)]
#[command(name = "census-curate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a topic's table and print its curated columns
    Render {
        #[command(flatten)]
        request: RequestArgs,

        /// Output format
        #[arg(short, long, default_value = "tsv")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch a topic's table and print every raw column
    Raw {
        #[command(flatten)]
        request: RequestArgs,

        /// Include margin-of-error columns
        #[arg(long)]
        moe: bool,

        /// Print column labels instead of the table
        #[arg(long)]
        labels: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Migrate a parameter payload to the current schema
    Migrate {
        /// JSON payload file (stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// List topics, their source tables and curated columns
    Topics {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Request selection shared by `render` and `raw`.
#[derive(Args, Clone, Debug)]
pub struct RequestArgs {
    /// Topic name or table id (e.g. "poverty", "b17001")
    #[arg(short, long, required_unless_present = "params")]
    pub topic: Option<String>,

    /// Summary level: all_states, counties, places or metro_areas
    #[arg(short, long, default_value = "all_states")]
    pub sumlevel: String,

    /// Two-letter state code for state-scoped summary levels
    #[arg(long)]
    pub state: Option<String>,

    /// JSON parameter payload (v0 or v1) instead of --topic/--sumlevel/--state
    #[arg(long, conflicts_with_all = ["topic", "state"])]
    pub params: Option<PathBuf>,

    /// ACS release (default: CENSUS_REPORTER_RELEASE or "latest")
    #[arg(long)]
    pub release: Option<String>,

    /// Serve the request from a saved API response instead of the network
    #[arg(long, value_name = "RESPONSE_JSON")]
    pub offline: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use tsv, csv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
