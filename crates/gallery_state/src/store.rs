//! Persistence adapter contract for address-bar parameters.

use std::{cell::RefCell, rc::Rc};

use thiserror::Error;

use crate::location;

#[derive(Debug, Error)]
/// Failures reading or rewriting the page address.
pub enum StoreError {
    /// The host has no address to read (for example, no browser window).
    #[error("address store unavailable: {0}")]
    Unavailable(String),
    /// The current address could not be parsed.
    #[error("invalid address `{href}`: {source}")]
    InvalidAddress {
        /// Rejected address.
        href: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// The host refused the history replacement.
    #[error("address replacement failed: {0}")]
    Replace(String),
}

/// Host service exposing the current page address and history-replacing writes.
pub trait QueryParamStore {
    /// Returns the current absolute address.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the host has no address.
    fn current_href(&self) -> Result<String, StoreError>;

    /// Replaces the current address without creating a navigable history entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Replace`] when the host rejects the write.
    fn replace_href(&self, href: &str) -> Result<(), StoreError>;

    /// Reads the first value of parameter `key`.
    ///
    /// # Errors
    ///
    /// Propagates address read and parse failures.
    fn read_param(&self, key: &str) -> Result<Option<String>, StoreError> {
        location::read_param(&self.current_href()?, key)
    }

    /// Sets `key` to `value`, or removes it when `value` is empty.
    ///
    /// Writes that would not change the address are skipped.
    ///
    /// # Errors
    ///
    /// Propagates address read, parse and replacement failures.
    fn write_param(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let href = self.current_href()?;
        let next = location::with_param(&href, key, value)?;
        if next == href {
            return Ok(());
        }
        self.replace_href(&next)
    }
}

/// Address used by [`MemoryQueryStore::default`].
pub const DEFAULT_MEMORY_HREF: &str = "http://localhost/";

#[derive(Debug, Default)]
struct MemoryLocation {
    href: String,
    replacements: Vec<String>,
}

#[derive(Debug, Clone)]
/// In-memory address store that records every replacement. Clones share state.
pub struct MemoryQueryStore {
    inner: Rc<RefCell<MemoryLocation>>,
}

impl Default for MemoryQueryStore {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_HREF)
    }
}

impl MemoryQueryStore {
    /// Creates a store positioned at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryLocation {
                href: href.into(),
                replacements: Vec::new(),
            })),
        }
    }

    /// Current address.
    pub fn href(&self) -> String {
        self.inner.borrow().href.clone()
    }

    /// Every address written through [`QueryParamStore::replace_href`], oldest first.
    pub fn replacements(&self) -> Vec<String> {
        self.inner.borrow().replacements.clone()
    }
}

impl QueryParamStore for MemoryQueryStore {
    fn current_href(&self) -> Result<String, StoreError> {
        Ok(self.href())
    }

    fn replace_href(&self, href: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.href = href.to_string();
        inner.replacements.push(href.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_records_replacements_and_shares_state() {
        let store = MemoryQueryStore::default();
        let shared = store.clone();
        let store_obj: &dyn QueryParamStore = &store;

        store_obj.write_param("size", "32").expect("write");
        assert_eq!(shared.href(), "http://localhost/?size=32");
        assert_eq!(
            store_obj.read_param("size").expect("read"),
            Some("32".to_string())
        );
        assert_eq!(shared.replacements(), vec!["http://localhost/?size=32"]);
    }

    #[test]
    fn unchanged_writes_are_skipped() {
        let store = MemoryQueryStore::new("http://localhost/?size=32");
        store.write_param("size", "32").expect("write");
        store.write_param("icon", "").expect("remove missing");
        assert!(store.replacements().is_empty());
    }
}
