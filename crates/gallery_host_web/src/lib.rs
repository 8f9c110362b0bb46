//! Browser (`wasm32`) host adapters for the icon gallery.
//!
//! This crate is the concrete browser-side wiring for the page address (read through
//! `window.location`, written with `history.replaceState`), clipboard writes, file downloads and
//! focus management. Every adapter compiles on native targets as well, where it reports the host
//! as unavailable, so the runtime crates and their tests build without a browser.
//!
//! Target-specific bindings live under `bridge/` (`bridge::wasm` / `bridge::non_wasm`).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod clipboard;
pub mod download;
pub mod focus;
pub mod location;

pub use clipboard::write_clipboard_text;
pub use download::{download_text_file, SVG_MIME_TYPE};
pub use focus::{active_element_accepts_text, focus_element_by_id, is_text_entry, ElementKind};
pub use location::WebLocationStore;
