//! Client-side file downloads via a temporary object URL.

use crate::bridge;

/// MIME type used for exported icon documents.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Offers `contents` to the user as a downloaded file named `file_name`.
///
/// # Errors
///
/// Returns an error when the blob, object URL or anchor cannot be created.
pub fn download_text_file(file_name: &str, mime_type: &str, contents: &str) -> Result<(), String> {
    bridge::download_text(file_name, mime_type, contents)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_targets_report_download_failure_instead_of_succeeding() {
        let result = download_text_file("home.svg", SVG_MIME_TYPE, "<svg/>");
        assert!(result.is_err());
    }
}
