//! Shared helpers.

use std::collections::HashMap;

/// Look up `key` in a configuration map, falling back to the map's
/// `"default"` entry when the key itself is absent.
pub(crate) fn fetch_or_default<'a, V>(map: &'a HashMap<String, V>, key: &str) -> Option<&'a V> {
    map.get(key).or_else(|| map.get("default"))
}
