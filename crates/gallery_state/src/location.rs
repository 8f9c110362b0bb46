//! Pure address rewriting with `URLSearchParams` semantics.

use url::Url;

use crate::store::StoreError;

fn parse(href: &str) -> Result<Url, StoreError> {
    Url::parse(href).map_err(|source| StoreError::InvalidAddress {
        href: href.to_string(),
        source,
    })
}

/// Reads the first value of query parameter `key` from an absolute address.
///
/// # Errors
///
/// Returns [`StoreError::InvalidAddress`] when `href` is not an absolute URL.
pub fn read_param(href: &str, key: &str) -> Result<Option<String>, StoreError> {
    let url = parse(href)?;
    let value = url
        .query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned());
    Ok(value)
}

/// Returns `href` with parameter `key` set to `value`, or removed when `value` is empty.
///
/// Setting replaces the first occurrence in place and drops later duplicates; a new key is
/// appended. Other parameters and the fragment are untouched. When no parameters remain the `?`
/// is dropped as well.
///
/// # Errors
///
/// Returns [`StoreError::InvalidAddress`] when `href` is not an absolute URL.
pub fn with_param(href: &str, key: &str, value: &str) -> Result<String, StoreError> {
    let mut url = parse(href)?;
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    if value.is_empty() {
        pairs.retain(|(name, _)| name != key);
    } else if let Some(first) = pairs.iter().position(|(name, _)| name == key) {
        pairs[first].1 = value.to_string();
        let mut index = 0;
        pairs.retain(|(name, _)| {
            let keep = name != key || index == first;
            index += 1;
            keep
        });
    } else {
        pairs.push((key.to_string(), value.to_string()));
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(name, value)| (name.as_str(), value.as_str())));
    }
    Ok(url.into())
}
