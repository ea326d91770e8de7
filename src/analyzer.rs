//! Document analysis orchestration.
//!
//! Validates the incoming payload, dispatches text extraction by media
//! type, invokes the field extraction service, and merges the result
//! with derived compliance notes. Each call is an independent unit of
//! work: no cache, no shared mutable state, and no retries. A failed
//! call surfaces its error and the caller decides whether to resubmit.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::compliance;
use crate::config::Settings;
use crate::error::AnalysisError;
use crate::extract::{ExtractionError, TextExtractor};
use crate::fields::{FieldExtractionClient, StructuredFieldExtractor};
use crate::media::MediaType;
use crate::models::{AnalysisRequest, AnalysisResult};

/// Maximum accepted payload size in bytes (10 MiB).
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// Orchestrates the per-request analysis pipeline.
pub struct DocumentAnalyzer {
    extractor: TextExtractor,
    fields: Arc<dyn StructuredFieldExtractor>,
}

impl DocumentAnalyzer {
    /// Create an analyzer with the default engines.
    pub fn new(settings: &Settings) -> Self {
        Self {
            extractor: TextExtractor::new(&settings.ocr_language),
            fields: Arc::new(FieldExtractionClient::new(settings.extractor.clone())),
        }
    }

    /// Create an analyzer with explicit engines.
    pub fn with_engines(
        extractor: TextExtractor,
        fields: Arc<dyn StructuredFieldExtractor>,
    ) -> Self {
        Self { extractor, fields }
    }

    /// Run the full pipeline over one uploaded document.
    ///
    /// Validation order is fixed: size bound first, then the media-type
    /// allow-list, then extraction, then the empty-text check. The first
    /// violated rule reports; later stages never run.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        if request.data.len() > MAX_FILE_BYTES {
            return Err(AnalysisError::FileTooLarge);
        }

        let media_type = MediaType::from_content_type(&request.content_type)
            .ok_or_else(|| AnalysisError::UnsupportedType(request.content_type.clone()))?;

        // The subprocess engines block; keep them off the async workers.
        let extractor = self.extractor.clone();
        let data = request.data;
        let text = tokio::task::spawn_blocking(move || extractor.extract(&data, media_type))
            .await
            .map_err(|e| {
                AnalysisError::Extraction(ExtractionError::ExtractionFailed(format!(
                    "extraction task failed: {}",
                    e
                )))
            })??;

        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        let session_id = Uuid::new_v4().to_string();
        info!(
            session_id,
            media_type = %media_type,
            chars = text.len(),
            "extracted document text"
        );

        let fields = self.fields.extract_fields(&text, &session_id).await?;
        let notes = compliance::generate_notes(&fields);

        Ok(AnalysisResult::completed(fields, notes))
    }
}
