//! Runtime configuration for titlescan.

use serde::{Deserialize, Serialize};

use crate::fields::FieldExtractorConfig;

/// Default server bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8001";

/// Default Tesseract language pack.
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// Runtime settings for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Address the web server binds to.
    pub bind: String,
    /// Tesseract language pack for image OCR.
    pub ocr_language: String,
    /// Field extraction service client configuration.
    pub extractor: FieldExtractorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
            extractor: FieldExtractorConfig::default(),
        }
    }
}

/// Load settings from the environment.
///
/// `.env` loading happens in main before this runs, so variables from a
/// local env file are visible here. Recognized variables:
/// - `TITLESCAN_BIND`: server bind address
/// - `TESSERACT_LANG`: OCR language pack
/// - plus the extractor client variables, see
///   [`FieldExtractorConfig::with_env_overrides`]
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    if let Ok(bind) = std::env::var("TITLESCAN_BIND") {
        settings.bind = bind;
    }
    if let Ok(language) = std::env::var("TESSERACT_LANG") {
        settings.ocr_language = language;
    }
    settings.extractor = settings.extractor.with_env_overrides();
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.bind, "127.0.0.1:8001");
        assert_eq!(settings.ocr_language, "eng");
        assert!(!settings.extractor.is_configured());
    }
}
