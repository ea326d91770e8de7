//! PDF text extraction via the poppler command-line tools.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::debug;

use super::{handle_cmd_output, ExtractionError, TextFromDocument};

/// Extracts embedded text from PDFs with pdfinfo and pdftotext.
///
/// The page count comes from pdfinfo first; a payload pdfinfo cannot
/// parse is rejected as undecodable. Pages are then extracted one at a
/// time so a single bad page degrades to an empty page instead of
/// sinking the whole document.
pub struct PopplerExtractor;

impl PopplerExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Page count per pdfinfo, or an error when the file is not a PDF.
    fn page_count(&self, pdf_path: &Path) -> Result<u32, ExtractionError> {
        let output = Command::new("pdfinfo").arg(pdf_path).output();
        let stdout = handle_cmd_output(
            output,
            "pdfinfo (install poppler-utils)",
            "pdfinfo failed",
        )?;

        for line in stdout.lines() {
            if let Some(rest) = line.strip_prefix("Pages:") {
                if let Ok(pages) = rest.trim().parse::<u32>() {
                    return Ok(pages);
                }
            }
        }

        Err(ExtractionError::DecodeFailed(
            "pdfinfo reported no page count".to_string(),
        ))
    }

    /// Extract the text of a single page with pdftotext.
    fn page_text(&self, pdf_path: &Path, page: u32) -> Result<String, ExtractionError> {
        let page_arg = page.to_string();
        let output = Command::new("pdftotext")
            .args(["-layout", "-enc", "UTF-8"])
            .args(["-f", &page_arg, "-l", &page_arg])
            .arg(pdf_path)
            .arg("-")
            .output();

        handle_cmd_output(
            output,
            "pdftotext (install poppler-utils)",
            &format!("pdftotext failed on page {}", page),
        )
    }
}

impl Default for PopplerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFromDocument for PopplerExtractor {
    fn text_from_document(&self, data: &[u8]) -> Result<String, ExtractionError> {
        let mut file = NamedTempFile::new()?;
        file.write_all(data)?;
        file.flush()?;

        let page_count = self.page_count(file.path())?;
        if page_count == 0 {
            return Err(ExtractionError::DecodeFailed(
                "PDF contains no pages".to_string(),
            ));
        }
        debug!("extracting text from {} PDF page(s)", page_count);

        let mut pages = Vec::with_capacity(page_count as usize);
        for page in 1..=page_count {
            match self.page_text(file.path(), page) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    debug!("page {} yielded no text: {}", page, e);
                    pages.push(String::new());
                }
            }
        }

        Ok(pages.join("\n"))
    }
}
