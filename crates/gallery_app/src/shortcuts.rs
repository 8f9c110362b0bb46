//! Global keyboard shortcuts.

use gallery_host_web::{active_element_accepts_text, focus_element_by_id};
use leptos::*;

/// DOM id of the search field targeted by the `/` shortcut.
pub const SEARCH_FIELD_ID: &str = "icon-search";

/// Returns `true` when `key` should move focus to the search field.
///
/// Modified keystrokes and keystrokes typed into a text-entry element are left alone.
pub fn should_focus_search(key: &str, has_modifier: bool, editing_text: bool) -> bool {
    key == "/" && !has_modifier && !editing_text
}

/// Installs the `/` shortcut for the lifetime of the calling component.
pub fn install_search_shortcut() {
    let listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let has_modifier = ev.ctrl_key() || ev.meta_key() || ev.alt_key();
        if !should_focus_search(&ev.key(), has_modifier, active_element_accepts_text()) {
            return;
        }
        ev.prevent_default();
        if !focus_element_by_id(SEARCH_FIELD_ID) {
            logging::warn!("search field `{SEARCH_FIELD_ID}` not found for shortcut");
        }
    });
    on_cleanup(move || listener.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_focuses_search_outside_text_entry() {
        assert!(should_focus_search("/", false, false));
    }

    #[test]
    fn slash_is_typed_normally_inside_text_entry() {
        assert!(!should_focus_search("/", false, true));
    }

    #[test]
    fn other_keys_and_modified_slash_are_ignored() {
        assert!(!should_focus_search("?", false, false));
        assert!(!should_focus_search("s", false, false));
        assert!(!should_focus_search("/", true, false));
    }
}
