// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry of named scheme converters.
//!
//! Converters are registered explicitly under a group label naming their
//! target scheme. Several converters may share a label when they reach the
//! same target from different source schemes (`ear_ibug_55` from both 110 and
//! 55 points); they coexist in registration order and the input's point count
//! decides which one applies.
//!
//! The built-in catalog is populated once per process and is read-only
//! afterwards, so it can be shared freely between threads.

use std::fmt;
use std::sync::OnceLock;

use landmark_lite_shape::PointSource;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::scheme::{ConversionSpec, Labelling};

/// Signature every converter implements.
pub type ConverterFn = fn(&dyn PointSource) -> Result<Labelling>;

/// A registered converter.
#[derive(Clone, Copy)]
pub struct Converter {
    /// Unique converter name.
    pub name: &'static str,
    /// Group label used for lookup.
    pub group: &'static str,
    /// Point count the converter accepts.
    pub source_points: usize,
    func: ConverterFn,
}

impl Converter {
    /// Creates a catalog entry from a conversion table and the function that
    /// runs it.
    pub fn new(spec: &'static ConversionSpec, func: ConverterFn) -> Self {
        Self {
            name: spec.name,
            group: spec.group,
            source_points: spec.source_points,
            func,
        }
    }

    /// Creates a catalog entry for a hand-written converter.
    pub fn from_fn(
        name: &'static str,
        group: &'static str,
        source_points: usize,
        func: ConverterFn,
    ) -> Self {
        Self {
            name,
            group,
            source_points,
            func,
        }
    }

    /// Runs the converter.
    pub fn apply(&self, input: &dyn PointSource) -> Result<Labelling> {
        (self.func)(input)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("source_points", &self.source_points)
            .finish_non_exhaustive()
    }
}

/// A set of converters, looked up by group label or name.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Converter>,
    /// Group label → entry positions, in registration order.
    by_group: FxHashMap<&'static str, Vec<usize>>,
    /// Converter name → entry position.
    by_name: FxHashMap<&'static str, usize>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of built-in ear and skull converters.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let mut catalog = Catalog::new();
            crate::schemes::register_builtin(&mut catalog);
            tracing::info!(
                converters = catalog.len(),
                groups = catalog.by_group.len(),
                "Built landmark converter catalog"
            );
            catalog
        })
    }

    /// Adds a converter.
    ///
    /// Converters sharing a group label are kept side by side. Panics if a
    /// converter with the same name is already registered.
    pub fn register(&mut self, converter: Converter) -> &mut Self {
        let pos = self.entries.len();
        let previous = self.by_name.insert(converter.name, pos);
        assert!(
            previous.is_none(),
            "converter '{}' registered twice",
            converter.name
        );
        self.by_group.entry(converter.group).or_default().push(pos);
        self.entries.push(converter);
        self
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the number of registered converters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no converter is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All converters, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Converter> {
        self.entries.iter()
    }

    /// Group labels, sorted.
    pub fn groups(&self) -> Vec<&'static str> {
        let mut groups: Vec<&'static str> = self.by_group.keys().copied().collect();
        groups.sort_unstable();
        groups
    }

    /// Converters registered under `group`, in registration order.
    pub fn candidates(&self, group: &str) -> Vec<&Converter> {
        self.by_group
            .get(group)
            .map(|positions| positions.iter().map(|&p| &self.entries[p]).collect())
            .unwrap_or_default()
    }

    /// Converter by name.
    pub fn converter(&self, name: &str) -> Option<&Converter> {
        self.by_name.get(name).map(|&p| &self.entries[p])
    }

    /// The first converter under `group` declaring `n_points` as its source
    /// point count.
    pub fn select(&self, group: &str, n_points: usize) -> Option<&Converter> {
        self.candidates(group)
            .into_iter()
            .find(|c| c.source_points == n_points)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Labels `input` with the first converter under `group` that accepts it.
    ///
    /// Candidates are tried in registration order; a candidate rejecting the
    /// input's cardinality is skipped.
    pub fn apply(&self, group: &str, input: &dyn PointSource) -> Result<Labelling> {
        let candidates = self.candidates(group);
        if candidates.is_empty() {
            return Err(Error::UnknownGroup(group.to_string()));
        }

        for converter in &candidates {
            tracing::trace!(
                group,
                converter = converter.name,
                n_points = input.n_points(),
                "Trying converter"
            );
            match converter.apply(input) {
                Ok(labelling) => return Ok(labelling),
                Err(Error::CardinalityMismatch { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(Error::NoMatchingConverter {
            group: group.to_string(),
            actual: input.n_points(),
            accepted: candidates.iter().map(|c| c.source_points).collect(),
        })
    }
}
