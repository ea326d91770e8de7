//! titlescan - mortgage title-insurance document analysis service.
//!
//! Extracts structured fields from uploaded title policy documents and
//! derives advisory compliance notes, served over HTTP or run one-shot
//! from the command line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use titlescan::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "titlescan=info"
    } else {
        "titlescan=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
