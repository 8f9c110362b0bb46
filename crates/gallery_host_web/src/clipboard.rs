//! Clipboard writes through `navigator.clipboard.writeText`.

use crate::bridge;

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error when the clipboard API is missing or the browser rejects the write.
pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
    bridge::write_clipboard_text(text).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn clipboard_is_unavailable_natively() {
        assert!(block_on(write_clipboard_text("<svg/>")).is_err());
    }
}
