//! pulseparse CLI - Normalize board item exports from the command line.

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pulseparse_fs::ParserConfig;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pulseparse")]
#[command(author, version, about = "Normalize board item exports")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "json")]
    format: output::OutputFormat,

    /// Config file (defaults to .pulseparse.yml in the current directory)
    #[arg(long, short = 'c', global = true, env = "PULSEPARSE_CONFIG")]
    config: Option<PathBuf>,

    /// Log per-item and per-column details
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform exported items (files, directories, or stdin)
    Transform {
        /// Input files or directories; `-` or nothing reads stdin
        inputs: Vec<PathBuf>,

        /// Write output to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse a single raw column value
    Parse {
        /// Declared column type (e.g. status, people, color_picker)
        #[arg(long = "type", short = 't')]
        kind: String,

        /// Display text of the column
        #[arg(long)]
        text: Option<String>,

        /// Raw value, usually JSON-encoded
        value: String,
    },

    /// List recognized column types
    Types,

    /// Write a default config file
    InitConfig {
        /// Target path (defaults to .pulseparse.yml)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the transformed output.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    match cli.command {
        Commands::Transform {
            inputs,
            output,
            compact,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::transform(&config, &inputs, output.as_deref(), compact, cli.format)
        }
        Commands::Parse { kind, text, value } => {
            commands::parse_value(&kind, text.as_deref(), &value, cli.format)
        }
        Commands::Types => commands::types(cli.format),
        Commands::InitConfig { path } => commands::init_config(path.as_deref(), cli.format),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ParserConfig> {
    match path {
        Some(path) => ParserConfig::load(path).context("Failed to load config"),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            ParserConfig::discover(cwd).context("Failed to load config")
        }
    }
}
