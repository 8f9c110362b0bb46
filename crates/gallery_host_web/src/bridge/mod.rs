//! Routes host calls to the target-specific implementation.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub(crate) fn current_href() -> Result<String, String> {
    imp::current_href()
}

pub(crate) fn replace_href(href: &str) -> Result<(), String> {
    imp::replace_href(href)
}

pub(crate) async fn write_clipboard_text(text: &str) -> Result<(), String> {
    imp::write_clipboard_text(text).await
}

pub(crate) fn download_text(file_name: &str, mime_type: &str, contents: &str) -> Result<(), String> {
    imp::download_text(file_name, mime_type, contents)
}

pub(crate) fn focus_element_by_id(id: &str) -> bool {
    imp::focus_element_by_id(id)
}

pub(crate) fn active_element_kind() -> Option<super::focus::ElementKind> {
    imp::active_element_kind()
}
