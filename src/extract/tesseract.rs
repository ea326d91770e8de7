//! Image OCR via the Tesseract command-line tool.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::{handle_cmd_output, ExtractionError, TextFromImage};

/// OCR engine that shells out to the Tesseract CLI.
pub struct TesseractOcr {
    language: String,
}

impl TesseractOcr {
    pub fn new() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }

    /// Set the Tesseract language pack.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    fn run_tesseract(&self, image_path: &Path) -> Result<String, ExtractionError> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        handle_cmd_output(
            output,
            "tesseract (install tesseract-ocr)",
            "tesseract failed",
        )
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFromImage for TesseractOcr {
    fn text_from_image(&self, data: &[u8]) -> Result<String, ExtractionError> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| ExtractionError::DecodeFailed(format!("not a decodable image: {}", e)))?;

        // Tesseract handles three-channel input most reliably; flatten
        // alpha and palette modes before handing the image over.
        let rgb = decoded.to_rgb8();

        let scratch = TempDir::new()?;
        let image_path = scratch.path().join("ocr-input.png");
        rgb.save(&image_path).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to stage image: {}", e))
        })?;

        self.run_tesseract(&image_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecodable_image_is_rejected() {
        let ocr = TesseractOcr::new();
        let result = ocr.text_from_image(b"not image data");
        assert!(matches!(result, Err(ExtractionError::DecodeFailed(_))));
    }

    #[test]
    fn test_truncated_png_is_rejected() {
        // Valid PNG signature, nothing after it.
        let bytes = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let ocr = TesseractOcr::new();
        assert!(matches!(
            ocr.text_from_image(&bytes),
            Err(ExtractionError::DecodeFailed(_))
        ));
    }

    #[test]
    fn test_language_override() {
        let ocr = TesseractOcr::new().with_language("deu");
        assert_eq!(ocr.language, "deu");
    }
}
