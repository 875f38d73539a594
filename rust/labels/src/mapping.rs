// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered region name → point indices table.

use rustc_hash::FxHashMap;

/// The ordered name → indices table produced by a converter.
///
/// Iteration follows insertion order, which is the order the scheme defines
/// its regions in. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Vec<usize>)>,
    /// Region name → position in `entries`.
    index: FxHashMap<String, usize>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a region.
    ///
    /// Panics if `name` is already present: region names come from static
    /// scheme tables, so a repeat means the table is corrupt.
    pub fn insert(&mut self, name: impl Into<String>, indices: Vec<usize>) {
        let name = name.into();
        assert!(
            !self.index.contains_key(&name),
            "duplicate region name '{name}'"
        );
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, indices));
    }

    /// Point indices of a region.
    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Checks if a region exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Region names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, indices)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(name, indices)| (name.as_str(), indices.as_slice()))
    }

    /// Returns the number of regions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping has no regions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All indices of all regions, concatenated in definition order.
    pub fn all_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect()
    }

    /// Largest index referenced by any region.
    pub fn max_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .flat_map(|(_, indices)| indices.iter().copied())
            .max()
    }

    /// Name of the first region containing `point`.
    pub fn region_of(&self, point: usize) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, indices)| indices.contains(&point))
            .map(|(name, _)| name.as_str())
    }
}
