//! Address-bar store backed by `window.location` and `history.replaceState`.

use gallery_state::{QueryParamStore, StoreError};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser address store. Writes replace the current history entry.
pub struct WebLocationStore;

impl QueryParamStore for WebLocationStore {
    fn current_href(&self) -> Result<String, StoreError> {
        bridge::current_href().map_err(StoreError::Unavailable)
    }

    fn replace_href(&self, href: &str) -> Result<(), StoreError> {
        bridge::replace_href(href).map_err(StoreError::Replace)
    }
}
