//! NoteCraft: AI text transforms and ephemeral note sharing over HTTP

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use notecraft::{
    config::{Config, LogFormat, LoggingConfig},
    transform::Operation,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notecraft")]
#[command(about = "AI text-transform and note-sharing service")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "notecraft.toml", global = true)]
    config: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen address (overrides the config file)
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the file (defaults to --config)
        path: Option<PathBuf>,
    },

    /// Run one transform and print the result as JSON
    Transform {
        /// summary, tags, grammar or glossary
        operation: Operation,

        /// Text to transform (read from stdin when omitted)
        text: Option<String>,

        /// Maximum tags or glossary terms
        #[arg(short, long)]
        max: Option<usize>,
    },
}

fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Load config and start logging for commands that need both
fn load_config(path: &Path, verbose: u8) -> Result<Config> {
    let config = Config::load_or_default(path)?;
    init_logging(&config.logging, verbose)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen } => {
            let config = load_config(&cli.config, cli.verbose)?;
            commands::serve(config, listen).await
        }
        Commands::Init { path } => {
            init_logging(&LoggingConfig::default(), cli.verbose)?;
            commands::init_config(&path.unwrap_or(cli.config))
        }
        Commands::Transform {
            operation,
            text,
            max,
        } => {
            let config = load_config(&cli.config, cli.verbose)?;
            commands::run_transform(config, operation, text, max).await
        }
    }
}
