//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod analyze;
mod check;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;

#[derive(Parser)]
#[command(name = "titlescan")]
#[command(about = "Mortgage title-insurance document analysis service")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a local document and print the result as JSON
    Analyze {
        /// Path to the PDF or image file
        file: PathBuf,

        /// Declared media type (detected from the file when omitted)
        #[arg(short, long)]
        media_type: Option<String>,
    },

    /// Start the web server
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Check external tools and extraction service configuration
    Check,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings();

    match cli.command {
        Commands::Analyze { file, media_type } => {
            analyze::cmd_analyze(&settings, &file, media_type.as_deref()).await
        }
        Commands::Serve { bind } => serve::cmd_serve(&settings, bind.as_deref()).await,
        Commands::Check => check::cmd_check(&settings),
    }
}
