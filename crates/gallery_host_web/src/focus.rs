//! Focus helpers for global keyboard shortcuts.

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Snapshot of the focused element used to decide whether typed keys belong to it.
pub struct ElementKind {
    /// Upper-case tag name (`INPUT`, `DIV`, ...).
    pub tag_name: String,
    /// `type` attribute for `<input>` elements.
    pub input_type: Option<String>,
    /// Whether the element is editable content.
    pub content_editable: bool,
}

const TEXT_INPUT_TYPES: &[&str] = &[
    "", "text", "search", "email", "url", "tel", "password", "number",
];

/// Returns `true` when keystrokes on `element` are text entry.
///
/// Text-like `<input>` types, `<textarea>`, `<select>` and editable content count; buttons,
/// sliders and other controls do not.
pub fn is_text_entry(element: &ElementKind) -> bool {
    if element.content_editable {
        return true;
    }
    match element.tag_name.to_ascii_uppercase().as_str() {
        "TEXTAREA" | "SELECT" => true,
        "INPUT" => {
            let input_type = element
                .input_type
                .as_deref()
                .unwrap_or_default()
                .to_ascii_lowercase();
            TEXT_INPUT_TYPES.contains(&input_type.as_str())
        }
        _ => false,
    }
}

/// Returns `true` when the currently focused element takes text entry.
pub fn active_element_accepts_text() -> bool {
    bridge::active_element_kind().is_some_and(|element| is_text_entry(&element))
}

/// Focuses the element with `id`; returns `true` only when focus was actually applied.
pub fn focus_element_by_id(id: &str) -> bool {
    bridge::focus_element_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag_name: &str, input_type: Option<&str>, content_editable: bool) -> ElementKind {
        ElementKind {
            tag_name: tag_name.to_string(),
            input_type: input_type.map(str::to_string),
            content_editable,
        }
    }

    #[test]
    fn text_fields_and_editable_content_take_text() {
        assert!(is_text_entry(&element("INPUT", Some("search"), false)));
        assert!(is_text_entry(&element("input", Some("TEXT"), false)));
        assert!(is_text_entry(&element("INPUT", None, false)));
        assert!(is_text_entry(&element("TEXTAREA", None, false)));
        assert!(is_text_entry(&element("DIV", None, true)));
    }

    #[test]
    fn buttons_and_sliders_do_not_take_text() {
        assert!(!is_text_entry(&element("BUTTON", None, false)));
        assert!(!is_text_entry(&element("INPUT", Some("range"), false)));
        assert!(!is_text_entry(&element("INPUT", Some("checkbox"), false)));
        assert!(!is_text_entry(&element("BODY", None, false)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_targets_have_no_focus() {
        assert!(!active_element_accepts_text());
        assert!(!focus_element_by_id("search"));
    }
}
