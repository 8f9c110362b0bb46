//! Icon gallery runtime: provider, deferred search, icon rendering, and page composition.

pub mod components;
pub mod icon;
pub mod manifest;
pub mod runtime_context;
pub mod search_executor;
pub mod shortcuts;

pub use components::{GalleryEntry, GalleryShell};
pub use icon::{CatalogIcon, IconStyleScope};
pub use runtime_context::{use_gallery, GalleryContext, GalleryProvider};
