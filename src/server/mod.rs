//! Web server for the document analysis API.
//!
//! A thin transport over the analysis pipeline:
//! - One upload route accepting a multipart document
//! - A health probe reporting tool and credential availability
//! - Permissive CORS so browser clients can call it directly
//!
//! The server holds no per-request state beyond the shared analyzer;
//! every upload is handled independently.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::analyzer::DocumentAnalyzer;
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<DocumentAnalyzer>,
    /// Whether the extraction-service credential was present at startup.
    pub extractor_configured: bool,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            analyzer: Arc::new(DocumentAnalyzer::new(settings)),
            extractor_configured: settings.extractor.is_configured(),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
