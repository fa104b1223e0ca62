// Rust guideline compliant 2026-02-09

//! SoftResult CLI Application
//!
//! Builds, renders and validates response envelopes from the command line.

use anyhow::Result;
use clap::Parser;
use soft_result_cli::commands::{self, render::Kind, render::RenderArgs};
use soft_result_cli::{init_tracing, LogFormat};
use soft_result_core::{Config, Locale};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "srt",
    version,
    about = "SoftResult: standard response envelopes for web APIs",
    long_about = "Builds response envelopes through the canonical constructors, renders them the way an HTTP handler would, and validates envelope documents received from a server.",
    after_help = "Examples:\n  srt render ok --value '{\"id\":1}'\n  srt render not-found --message \"User not found\" --error-key id --error-value 7\n  srt check response.json --status 400\n  curl -s localhost:8080/users/1 | srt check -\n"
)]
struct Cli {
    /// Directory containing soft-result.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON bodies
    #[arg(long, global = true)]
    pretty: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log line format
    #[arg(long, value_enum, global = true, default_value = "plain")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Build an envelope and print the HTTP response it renders to
    Render {
        /// Outcome category
        #[arg(value_enum)]
        kind: Kind,

        /// Message text
        #[arg(long)]
        message: Option<String>,

        /// JSON payload (required for ok)
        #[arg(long)]
        value: Option<String>,

        /// Metadata key attached to the error
        #[arg(long)]
        error_key: Option<String>,

        /// Metadata value attached to the error (JSON or plain text)
        #[arg(long)]
        error_value: Option<String>,

        /// Locale name or code to stamp on the envelope
        #[arg(long)]
        locale: Option<Locale>,
    },

    /// Validate an envelope document and print its canonical form
    Check {
        /// File to read, or '-' for stdin
        source: String,

        /// HTTP status the document was served with
        #[arg(long)]
        status: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format)?;

    let config_dir = cli.config.unwrap_or_else(|| PathBuf::from("."));
    let mut config = Config::load(&config_dir)?;
    if cli.pretty {
        config.pretty = true;
    }
    let options = config.render_options();

    match cli.command {
        Commands::Render {
            kind,
            message,
            value,
            error_key,
            error_value,
            locale,
        } => {
            commands::render::execute(
                kind,
                RenderArgs {
                    message,
                    value,
                    error_key,
                    error_value,
                    locale,
                },
                &options,
            )?;
        }
        Commands::Check { source, status } => {
            commands::check::execute(&source, status, &options)?;
        }
    }

    Ok(())
}
