//! Accepted media types and content-type detection.

use std::path::Path;

/// Media types the analysis pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Jpeg,
    Png,
    Tiff,
    Bmp,
}

impl MediaType {
    /// Canonical MIME string for this media type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
        }
    }

    /// Match a declared content type against the allow-list.
    ///
    /// Also accepts the `image/jpg` alias some clients send for JPEG.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim().to_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/tiff" => Some(Self::Tiff),
            "image/bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// Whether this type goes through the raster OCR path.
    pub fn is_image(&self) -> bool {
        !matches!(self, Self::Pdf)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect the media type of a local file.
///
/// Sniffs the content first and falls back to the file extension for
/// payloads the magic-byte tables do not cover.
pub fn detect(data: &[u8], path: &Path) -> Option<MediaType> {
    if let Some(kind) = infer::get(data) {
        if let Some(media) = MediaType::from_content_type(kind.mime_type()) {
            return Some(media);
        }
    }

    let guessed = mime_guess::from_path(path).first_raw()?;
    MediaType::from_content_type(guessed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_allow_list() {
        assert_eq!(
            MediaType::from_content_type("application/pdf"),
            Some(MediaType::Pdf)
        );
        assert_eq!(
            MediaType::from_content_type("image/jpeg"),
            Some(MediaType::Jpeg)
        );
        assert_eq!(
            MediaType::from_content_type("image/jpg"),
            Some(MediaType::Jpeg)
        );
        assert_eq!(
            MediaType::from_content_type("image/png"),
            Some(MediaType::Png)
        );
        assert_eq!(
            MediaType::from_content_type("image/tiff"),
            Some(MediaType::Tiff)
        );
        assert_eq!(
            MediaType::from_content_type("image/bmp"),
            Some(MediaType::Bmp)
        );
    }

    #[test]
    fn test_content_type_rejections() {
        assert_eq!(MediaType::from_content_type("text/plain"), None);
        assert_eq!(MediaType::from_content_type("application/octet-stream"), None);
        assert_eq!(MediaType::from_content_type("image/gif"), None);
        assert_eq!(MediaType::from_content_type(""), None);
    }

    #[test]
    fn test_content_type_case_insensitive() {
        assert_eq!(
            MediaType::from_content_type("Application/PDF"),
            Some(MediaType::Pdf)
        );
        assert_eq!(
            MediaType::from_content_type(" image/PNG "),
            Some(MediaType::Png)
        );
    }

    #[test]
    fn test_canonical_strings() {
        assert_eq!(MediaType::Pdf.as_str(), "application/pdf");
        assert_eq!(MediaType::Jpeg.as_str(), "image/jpeg");
        assert_eq!(MediaType::Pdf.to_string(), "application/pdf");
    }

    #[test]
    fn test_image_split() {
        assert!(!MediaType::Pdf.is_image());
        assert!(MediaType::Jpeg.is_image());
        assert!(MediaType::Tiff.is_image());
    }

    #[test]
    fn test_detect_by_magic_bytes() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(
            detect(&png, Path::new("upload.bin")),
            Some(MediaType::Png)
        );

        let pdf = b"%PDF-1.4\n%stub";
        assert_eq!(detect(pdf, Path::new("upload.bin")), Some(MediaType::Pdf));
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            detect(b"no magic here", Path::new("scan.pdf")),
            Some(MediaType::Pdf)
        );
        assert_eq!(detect(b"no magic here", Path::new("notes.txt")), None);
    }
}
