//! Read-only icon catalog, search predicate, and SVG rendering helpers.
//!
//! The catalog joins two independently generated mappings (icon name to SVG body markup, and
//! icon name to search tags) into one ordered, immutable collection. Everything in this crate is
//! target-independent so the gallery runtime and its tests share the same lookup and filtering
//! rules.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bundled;
pub mod catalog;
pub mod render;
pub mod search;

pub use bundled::{bundled, BUNDLED_ICONS_JSON, BUNDLED_TAGS_JSON};
pub use catalog::{Catalog, CatalogError, IconEntry};
pub use render::{download_file_name, svg_snippet, IconStyle, StyleParams, ICON_VIEW_BOX};
pub use search::{filter, matches};
