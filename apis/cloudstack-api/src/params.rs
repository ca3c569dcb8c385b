// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Query parameter map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Command parameters, kept in key order
///
/// CloudStack parameter names are case-insensitive on the server, but a
/// request carries each name once; setting a key again replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every entry of `other` into `self`, replacing existing keys
    pub fn merge(&mut self, other: QueryParams) {
        self.0.extend(other.0);
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces() {
        let mut params = QueryParams::new();
        params.set("zoneid", "1");
        params.set("zoneid", "2");
        assert_eq!(params.get("zoneid"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_iteration_in_key_order() {
        let params = QueryParams::new()
            .with("name", "web")
            .with("account", "admin")
            .with("zoneid", "z1");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["account", "name", "zoneid"]);
    }

    #[test]
    fn test_merge_and_remove() {
        let mut params = QueryParams::new().with("a", "1").with("b", "2");
        params.merge(QueryParams::new().with("b", "3").with("c", "4"));
        assert_eq!(params.get("b"), Some("3"));
        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert!(!params.contains("a"));
        assert_eq!(params.len(), 2);
    }
}
