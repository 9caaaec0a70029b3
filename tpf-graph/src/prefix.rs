//! Prefix mappings for IRI shortening
//!
//! A `PrefixMap` is a label → namespace-IRI table. Iteration order is
//! deterministic (BTreeMap), so prefix declarations serialize stably
//! regardless of insertion order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label → namespace mapping used to shorten serialized IRIs
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixMap(BTreeMap<String, String>);

impl PrefixMap {
    /// Create an empty prefix map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix mapping
    pub fn add(&mut self, label: impl Into<String>, namespace: impl Into<String>) {
        self.0.insert(label.into(), namespace.into());
    }

    /// Get the namespace for a label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Number of mappings
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (label, namespace) pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, n)| (l.as_str(), n.as_str()))
    }

    /// Find the mapping whose namespace prefixes `iri`, longest match first
    ///
    /// Returns `(label, local)` where `local` is the remainder of the IRI
    /// after the namespace. The caller decides whether `local` is a valid
    /// Turtle local name.
    pub fn shorten<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        self.0
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(label, ns)| (label.as_str(), &iri[ns.len()..]))
    }
}

impl<L: Into<String>, N: Into<String>> FromIterator<(L, N)> for PrefixMap {
    fn from_iter<T: IntoIterator<Item = (L, N)>>(iter: T) -> Self {
        PrefixMap(
            iter.into_iter()
                .map(|(l, n)| (l.into(), n.into()))
                .collect(),
        )
    }
}
