//! Catalog construction and lookup.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One icon known to the gallery.
pub struct IconEntry {
    /// Unique icon name.
    pub name: String,
    /// SVG body markup (trusted, pre-sanitized).
    pub markup: String,
    /// Search tags in source order.
    pub tags: Vec<String>,
}

#[derive(Debug, Error)]
/// Errors raised while decoding catalog source documents.
pub enum CatalogError {
    /// A source document was not valid JSON.
    #[error("{source_name} is not valid JSON: {error}")]
    Json {
        /// Which source failed (`icons` or `tags`).
        source_name: &'static str,
        /// Underlying decode error.
        #[source]
        error: serde_json::Error,
    },
    /// A source document was valid JSON but not an object.
    #[error("{source_name} must be a JSON object keyed by icon name")]
    NotAnObject {
        /// Which source failed.
        source_name: &'static str,
    },
    /// A value in a source document had the wrong shape.
    #[error("{source_name} entry `{name}` must be {expected}")]
    InvalidEntry {
        /// Which source failed.
        source_name: &'static str,
        /// Icon name whose value was rejected.
        name: String,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Immutable, insertion-ordered mapping from icon name to [`IconEntry`].
pub struct Catalog {
    entries: Vec<IconEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Joins a markup source with a tags source.
    ///
    /// Catalog keys are exactly the markup keys, in iteration order. Names that only appear in
    /// the tags source are ignored and names without tag data get an empty tag list. A name that
    /// repeats in the markup source keeps its first position and takes the last markup value.
    pub fn from_sources<M, K, V>(
        markup_by_name: M,
        tags_by_name: &HashMap<String, Vec<String>>,
    ) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut catalog = Self::default();
        for (name, markup) in markup_by_name {
            let name = name.into();
            let markup = markup.into();
            if let Some(&slot) = catalog.index.get(&name) {
                catalog.entries[slot].markup = markup;
                continue;
            }
            let tags = tags_by_name.get(&name).cloned().unwrap_or_default();
            catalog.index.insert(name.clone(), catalog.entries.len());
            catalog.entries.push(IconEntry { name, markup, tags });
        }
        catalog
    }

    /// Decodes the two JSON source documents and joins them.
    ///
    /// `icons_json` must be an object of `name -> markup string`; `tags_json` an object of
    /// `name -> [tag, ...]`. Key order of `icons_json` is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when either document is malformed.
    pub fn from_json(icons_json: &str, tags_json: &str) -> Result<Self, CatalogError> {
        let icons = parse_object("icons", icons_json)?;
        let tags = parse_object("tags", tags_json)?;

        let mut markup_by_name = Vec::with_capacity(icons.len());
        for (name, value) in icons {
            let Value::String(markup) = value else {
                return Err(CatalogError::InvalidEntry {
                    source_name: "icons",
                    name,
                    expected: "a markup string",
                });
            };
            markup_by_name.push((name, markup));
        }

        let mut tags_by_name = HashMap::with_capacity(tags.len());
        for (name, value) in tags {
            let tags = match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(tag) => Some(tag),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>(),
                _ => None,
            };
            let Some(tags) = tags else {
                return Err(CatalogError::InvalidEntry {
                    source_name: "tags",
                    name,
                    expected: "an array of strings",
                });
            };
            tags_by_name.insert(name, tags);
        }

        Ok(Self::from_sources(markup_by_name, &tags_by_name))
    }

    /// Looks up an entry by exact name. Unknown names return `None`.
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Returns `true` when `name` is a known icon.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, IconEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder text for the search field.
    pub fn search_placeholder(&self) -> String {
        format!("Search {} icons...", self.len())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a IconEntry;
    type IntoIter = std::slice::Iter<'a, IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_object(source_name: &'static str, raw: &str) -> Result<Map<String, Value>, CatalogError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CatalogError::NotAnObject { source_name }),
        Err(error) => Err(CatalogError::Json { source_name, error }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tags(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(name, tags)| {
                (
                    name.to_string(),
                    tags.iter().map(|tag| tag.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn every_markup_key_appears_once_with_its_tags_or_empty() {
        let catalog = Catalog::from_sources(
            [("home", "<path/>"), ("search", "<circle/>"), ("x", "<line/>")],
            &tags(&[("home", &["nav"]), ("search", &["nav", "ui"])]),
        );

        let names: Vec<_> = catalog.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["home", "search", "x"]);
        assert_eq!(catalog.get("home").expect("home").tags, vec!["nav"]);
        assert_eq!(catalog.get("search").expect("search").tags, vec!["nav", "ui"]);
        assert!(catalog.get("x").expect("x").tags.is_empty());
    }

    #[test]
    fn tag_only_names_are_ignored() {
        let catalog = Catalog::from_sources(
            [("home", "<path/>")],
            &tags(&[("home", &["nav"]), ("ghost", &["boo"])]),
        );

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.contains("ghost"));
        assert_eq!(catalog.get("ghost"), None);
    }

    #[test]
    fn repeated_markup_name_keeps_first_slot_and_last_value() {
        let catalog = Catalog::from_sources(
            [("a", "<one/>"), ("b", "<two/>"), ("a", "<three/>")],
            &HashMap::new(),
        );

        let names: Vec<_> = catalog.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(catalog.get("a").expect("a").markup, "<three/>");
    }

    #[test]
    fn json_sources_preserve_document_order() {
        let catalog = Catalog::from_json(
            r#"{"zeta":"<z/>","alpha":"<a/>","mid":"<m/>"}"#,
            r#"{"alpha":["first"],"unused":["x"]}"#,
        )
        .expect("catalog");

        let names: Vec<_> = catalog.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(catalog.get("alpha").expect("alpha").tags, vec!["first"]);
        assert_eq!(catalog.search_placeholder(), "Search 3 icons...");
    }

    #[test]
    fn malformed_json_sources_are_reported() {
        assert!(matches!(
            Catalog::from_json("{", "{}"),
            Err(CatalogError::Json { source_name: "icons", .. })
        ));
        assert!(matches!(
            Catalog::from_json("{}", "[]"),
            Err(CatalogError::NotAnObject { source_name: "tags" })
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"a":1}"#, "{}"),
            Err(CatalogError::InvalidEntry { source_name: "icons", .. })
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"a":"<a/>"}"#, r#"{"a":["ok",2]}"#),
            Err(CatalogError::InvalidEntry { source_name: "tags", .. })
        ));
    }
}
