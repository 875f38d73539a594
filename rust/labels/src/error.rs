// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for labelling operations.

/// Result type alias for labelling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while labelling a point set.
///
/// Corrupt scheme tables (out-of-range indices, duplicate region names) are
/// not represented here: they panic at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input point count does not match the scheme's point count.
    #[error("expected {expected} points, got {actual}")]
    CardinalityMismatch { expected: usize, actual: usize },

    /// No converter is registered under the requested group label.
    #[error("no converters registered under group '{0}'")]
    UnknownGroup(String),

    /// Every converter under the group rejected the input's point count.
    #[error("no converter in group '{group}' accepts {actual} points (accepted: {accepted:?})")]
    NoMatchingConverter {
        group: String,
        actual: usize,
        accepted: Vec<usize>,
    },
}
