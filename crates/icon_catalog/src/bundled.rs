use std::sync::OnceLock;

use crate::catalog::{Catalog, CatalogError};

/// Generated icon-name-to-markup document shipped with the crate.
pub const BUNDLED_ICONS_JSON: &str = include_str!("../data/icons.json");
/// Generated icon-name-to-tags document shipped with the crate.
pub const BUNDLED_TAGS_JSON: &str = include_str!("../data/tags.json");

static BUNDLED: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

/// Returns the process-wide catalog decoded from the bundled data files.
///
/// Decoding happens once; later calls return the cached result.
///
/// # Errors
///
/// Returns the decode error when a bundled document is malformed.
pub fn bundled() -> Result<&'static Catalog, &'static CatalogError> {
    BUNDLED
        .get_or_init(|| Catalog::from_json(BUNDLED_ICONS_JSON, BUNDLED_TAGS_JSON))
        .as_ref()
}
