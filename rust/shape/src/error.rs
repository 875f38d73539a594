// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for shape construction.

/// Result type alias for shape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building shapes from untrusted coordinates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A coordinate row has a different length than the first row.
    #[error("point {row} has {actual} coordinates, expected {expected}")]
    RaggedPoints {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Only 2D and 3D points are supported.
    #[error("unsupported point dimension: {0} (expected 2 or 3)")]
    UnsupportedDimension(usize),
}
