//! Downloaded media file representation.

/// Extensions the downloader recognizes in URL paths.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "mp4", "webm"];

/// A media file downloaded into memory, held for the lifetime of one run.
#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Deterministic name: `<post_id>_<index>.<extension>`.
    pub filename: String,

    /// Raw file bytes.
    pub content: Vec<u8>,

    /// Content type reported by the media host.
    pub content_type: String,

    /// Title of the post this file came from.
    pub title: Option<String>,
}

impl MediaFile {
    /// Build a file from a completed download.
    pub fn new(
        post_id: &str,
        index: usize,
        url: &str,
        content: Vec<u8>,
        content_type: String,
        title: Option<String>,
    ) -> Self {
        let extension = infer_extension(&content_type, url);
        Self {
            filename: format!("{}_{}.{}", post_id, index, extension),
            content,
            content_type,
            title,
        }
    }
}

/// Infer the file extension for a download.
///
/// The content type reported by the host wins over the URL path suffix; an
/// unrecognized pair falls back to `jpg`.
pub fn infer_extension(content_type: &str, url: &str) -> String {
    if let Some(ext) = content_type_extension(content_type) {
        return ext.to_string();
    }

    if let Some(ext) = url_extension(url) {
        return ext;
    }

    "jpg".to_string()
}

/// Map a content type to its extension, ignoring parameters after `;`.
fn content_type_extension(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    match mime {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "video/mp4" => Some("mp4"),
        "video/webm" => Some("webm"),
        _ => None,
    }
}

/// Extract a supported extension from the URL path, if present.
fn url_extension(url: &str) -> Option<String> {
    // Drop the query string before looking at the path
    let path = url.split('?').next()?;
    let filename = path.rsplit('/').next()?;
    let ext = filename.rsplit('.').next()?.to_lowercase();

    if filename.contains('.') && SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_takes_precedence() {
        assert_eq!(infer_extension("image/png", "https://example.com/a.jpg"), "png");
    }

    #[test]
    fn test_url_fallback() {
        assert_eq!(infer_extension("application/octet-stream", "https://example.com/a.webm"), "webm");
        assert_eq!(
            infer_extension("", "https://example.com/pic.PNG?width=100"),
            "png"
        );
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(infer_extension("text/html", "https://example.com/page"), "jpg");
    }

    #[test]
    fn test_content_type_parameters_ignored() {
        assert_eq!(infer_extension("image/gif; charset=binary", "https://example.com/x"), "gif");
    }

    #[test]
    fn test_filename_format() {
        let file = MediaFile::new(
            "abc123",
            1,
            "https://i.example.com/x.png",
            vec![1, 2, 3],
            "image/png".to_string(),
            Some("a post".to_string()),
        );
        assert_eq!(file.filename, "abc123_1.png");
    }
}
