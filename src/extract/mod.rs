//! Text extraction from document payloads.
//!
//! Turns raw file bytes of an accepted media type into plain text. PDF
//! payloads go through the poppler command-line tools; raster images are
//! normalized and run through Tesseract OCR. Engines sit behind narrow
//! capability traits so the pipeline can be exercised with deterministic
//! substitutes in tests.

mod pdf;
mod tesseract;

use std::sync::Arc;

use thiserror::Error;

use crate::media::MediaType;

pub use pdf::PopplerExtractor;
pub use tesseract::TesseractOcr;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The payload could not be decoded as its declared format.
    #[error("Failed to decode document: {0}")]
    DecodeFailed(String),

    /// An extraction tool ran and failed.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// A required external tool is not installed.
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability: plain text out of a paginated document payload.
pub trait TextFromDocument: Send + Sync {
    fn text_from_document(&self, data: &[u8]) -> Result<String, ExtractionError>;
}

/// Capability: plain text out of a raster image payload.
pub trait TextFromImage: Send + Sync {
    fn text_from_image(&self, data: &[u8]) -> Result<String, ExtractionError>;
}

/// Dispatches extraction to the engine matching the media type.
#[derive(Clone)]
pub struct TextExtractor {
    document: Arc<dyn TextFromDocument>,
    image: Arc<dyn TextFromImage>,
}

impl TextExtractor {
    /// Create an extractor backed by the poppler and Tesseract tools.
    pub fn new(ocr_language: &str) -> Self {
        Self {
            document: Arc::new(PopplerExtractor::new()),
            image: Arc::new(TesseractOcr::new().with_language(ocr_language)),
        }
    }

    /// Create an extractor with explicit engines.
    pub fn with_engines(
        document: Arc<dyn TextFromDocument>,
        image: Arc<dyn TextFromImage>,
    ) -> Self {
        Self { document, image }
    }

    /// Extract text from a payload of a known media type.
    pub fn extract(&self, data: &[u8], media_type: MediaType) -> Result<String, ExtractionError> {
        if media_type.is_image() {
            self.image.text_from_image(data)
        } else {
            self.document.text_from_document(data)
        }
    }
}

/// Check if a binary is available in PATH.
pub fn check_binary(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Availability of the external tools the default engines rely on.
pub fn check_tools() -> Vec<(&'static str, bool)> {
    ["pdfinfo", "pdftotext", "tesseract"]
        .iter()
        .map(|tool| (*tool, check_binary(tool)))
        .collect()
}

/// Handle command output, extracting stdout on success or mapping the
/// failure onto the extraction error taxonomy.
pub(crate) fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix,
                    stderr.trim()
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubDocument;
    impl TextFromDocument for StubDocument {
        fn text_from_document(&self, _data: &[u8]) -> Result<String, ExtractionError> {
            Ok("from document engine".to_string())
        }
    }

    struct StubImage;
    impl TextFromImage for StubImage {
        fn text_from_image(&self, _data: &[u8]) -> Result<String, ExtractionError> {
            Ok("from image engine".to_string())
        }
    }

    fn stub_extractor() -> TextExtractor {
        TextExtractor::with_engines(Arc::new(StubDocument), Arc::new(StubImage))
    }

    #[test]
    fn test_pdf_routes_to_document_engine() {
        let text = stub_extractor().extract(b"data", MediaType::Pdf).unwrap();
        assert_eq!(text, "from document engine");
    }

    #[test]
    fn test_images_route_to_image_engine() {
        let extractor = stub_extractor();
        for media_type in [
            MediaType::Jpeg,
            MediaType::Png,
            MediaType::Tiff,
            MediaType::Bmp,
        ] {
            let text = extractor.extract(b"data", media_type).unwrap();
            assert_eq!(text, "from image engine");
        }
    }

    #[test]
    fn test_check_tools_covers_default_engines() {
        let tools = check_tools();
        assert_eq!(tools.len(), 3);
        for (tool, available) in tools {
            println!("{}: {}", tool, if available { "found" } else { "not found" });
        }
    }
}
