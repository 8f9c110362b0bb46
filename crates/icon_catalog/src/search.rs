//! Case-insensitive icon search.

use crate::catalog::{Catalog, IconEntry};

/// Returns `true` when the entry's name or any of its tags contains `query`, ignoring case.
///
/// An empty query matches every entry.
pub fn matches(entry: &IconEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowered(entry, &query.to_lowercase())
}

fn matches_lowered(entry: &IconEntry, needle: &str) -> bool {
    entry.name.to_lowercase().contains(needle)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Returns catalog entries matching `query`, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a IconEntry> {
    if query.is_empty() {
        return catalog.iter().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| matches_lowered(entry, &needle))
        .collect()
}

impl Catalog {
    /// Returns entries matching `query`, in catalog order. See [`filter`].
    pub fn filter(&self, query: &str) -> Vec<&IconEntry> {
        filter(self, query)
    }

    /// Names of the entries matching `query`, in catalog order.
    pub fn filter_names(&self, query: &str) -> Vec<String> {
        filter(self, query)
            .into_iter()
            .map(|entry| entry.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn scenario() -> Catalog {
        let mut tags = HashMap::new();
        tags.insert("home".to_string(), vec!["nav".to_string()]);
        tags.insert(
            "search".to_string(),
            vec!["nav".to_string(), "ui".to_string()],
        );
        Catalog::from_sources([("home", "<path/>"), ("search", "<circle/>")], &tags)
    }

    fn names(results: Vec<&IconEntry>) -> Vec<&str> {
        results.into_iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn tag_query_returns_matches_in_catalog_order() {
        let catalog = scenario();
        assert_eq!(names(catalog.filter("nav")), vec!["home", "search"]);
        assert_eq!(names(catalog.filter("zzz")), Vec::<&str>::new());
    }

    #[test]
    fn query_matches_names_and_tags_but_not_markup() {
        let catalog = scenario();
        assert_eq!(names(catalog.filter("sear")), vec!["search"]);
        assert_eq!(names(catalog.filter("ui")), vec!["search"]);
        // "circle" only appears inside the markup of `search`.
        assert_eq!(names(catalog.filter("circle")), Vec::<&str>::new());
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let catalog = scenario();
        assert_eq!(names(catalog.filter("")), vec!["home", "search"]);
    }

    #[test]
    fn matching_ignores_case_on_both_sides() {
        let catalog = scenario();
        assert_eq!(names(catalog.filter("NAV")), vec!["home", "search"]);
        assert_eq!(names(catalog.filter("HoMe")), vec!["home"]);
    }

    #[test]
    fn filter_is_a_complete_subset_for_bundled_data() {
        let catalog = crate::bundled().expect("bundled catalog");
        let everything = catalog.filter_names("");
        for query in ["a", "nav", "DEL", "arrow", "e", "theme", "  ", "x"] {
            let results = catalog.filter_names(query);
            let mut cursor = everything.iter();
            for name in &results {
                assert!(
                    cursor.any(|candidate| candidate == name),
                    "{name} out of order for {query:?}"
                );
            }
            for entry in catalog.iter() {
                assert_eq!(
                    matches(entry, query),
                    results.contains(&entry.name),
                    "{} vs {query:?}",
                    entry.name
                );
            }
        }
    }
}
