//! Best-effort inlining of local image assets.
//!
//! Remote URLs and already-embedded data URIs pass through untouched. A
//! local path is read and re-encoded as a data URI so the compiled document
//! stays self-contained. Any failure falls back to the original reference;
//! report generation must never fail because a logo file is missing.

use std::path::Path;

use base64::Engine;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read asset '{0}': {1}")]
    Read(String, std::io::Error),
}

/// Resolve a logo reference to something embeddable.
///
/// `reference` falls back to [`DEFAULT_LOGO_PATH`] when absent. The result
/// is either a data URI for a successfully read local file, or the
/// original reference unchanged.
pub fn resolve_logo(reference: Option<&str>) -> String {
    let reference = match reference {
        Some(r) if !r.trim().is_empty() => r,
        _ => DEFAULT_LOGO_PATH,
    };

    if is_remote(reference) || is_data_uri(reference) {
        return reference.to_string();
    }

    match inline_local_file(reference) {
        Ok(data_uri) => data_uri,
        Err(err) => {
            debug!(reference, %err, "logo inlining failed, keeping original reference");
            reference.to_string()
        }
    }
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

fn is_data_uri(reference: &str) -> bool {
    reference.starts_with("data:")
}

fn inline_local_file(path: &str) -> Result<String, AssetError> {
    let bytes =
        std::fs::read(path).map_err(|e| AssetError::Read(path.to_string(), e))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime_for(path), encoded))
}

fn mime_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn remote_urls_pass_through() {
        assert_eq!(
            resolve_logo(Some("https://example.com/logo.png")),
            "https://example.com/logo.png"
        );
    }

    #[test]
    fn data_uris_pass_through() {
        let uri = "data:image/png;base64,AAAA";
        assert_eq!(resolve_logo(Some(uri)), uri);
    }

    #[test]
    fn missing_reference_uses_default_path() {
        // No file at the default path in the test environment, so the
        // fallback returns the path itself.
        assert_eq!(resolve_logo(None), DEFAULT_LOGO_PATH);
        assert_eq!(resolve_logo(Some("  ")), DEFAULT_LOGO_PATH);
    }

    #[test]
    fn unreadable_path_falls_back_to_original() {
        assert_eq!(
            resolve_logo(Some("/definitely/not/here.png")),
            "/definitely/not/here.png"
        );
    }

    #[test]
    fn local_file_becomes_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.svg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"<svg/>").unwrap();

        let resolved = resolve_logo(path.to_str());
        assert!(resolved.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn mime_is_inferred_from_extension() {
        assert_eq!(mime_for("a/logo.PNG"), "image/png");
        assert_eq!(mime_for("a/logo.svg"), "image/svg+xml");
        assert_eq!(mime_for("a/logo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("a/logo"), "image/jpeg");
    }
}
