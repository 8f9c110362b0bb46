use crate::focus::ElementKind;

const UNAVAILABLE: &str = "browser host unavailable on this target";

pub(super) fn current_href() -> Result<String, String> {
    Err(UNAVAILABLE.to_string())
}

pub(super) fn replace_href(href: &str) -> Result<(), String> {
    let _ = href;
    Err(UNAVAILABLE.to_string())
}

pub(super) async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let _ = text;
    Err(UNAVAILABLE.to_string())
}

pub(super) fn download_text(file_name: &str, mime_type: &str, contents: &str) -> Result<(), String> {
    let _ = (file_name, mime_type, contents);
    Err(UNAVAILABLE.to_string())
}

pub(super) fn focus_element_by_id(id: &str) -> bool {
    let _ = id;
    false
}

pub(super) fn active_element_kind() -> Option<ElementKind> {
    None
}
