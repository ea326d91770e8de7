//! One-shot document analysis command.

use std::path::Path;

use anyhow::Context;

use crate::analyzer::DocumentAnalyzer;
use crate::config::Settings;
use crate::media;
use crate::models::AnalysisRequest;

/// Analyze a local file and print the result as pretty JSON.
pub async fn cmd_analyze(
    settings: &Settings,
    file: &Path,
    media_type: Option<&str>,
) -> anyhow::Result<()> {
    let data =
        std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;

    let content_type = match media_type {
        Some(declared) => declared.to_string(),
        None => media::detect(&data, file)
            .map(|detected| detected.as_str().to_string())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "could not detect a supported media type for {}; pass --media-type",
                    file.display()
                )
            })?,
    };

    let analyzer = DocumentAnalyzer::new(settings);
    let result = analyzer
        .analyze(AnalysisRequest { content_type, data })
        .await
        .with_context(|| format!("analysis failed for {}", file.display()))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
