// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cardinality gate run by every converter before touching its input.

use landmark_lite_shape::PointSource;

use crate::error::{Error, Result};

/// Checks that `input` has exactly `expected` points.
///
/// There is no coercion: a cloud with more or fewer points is rejected even if
/// a prefix would fit the scheme.
pub fn validate_input(input: &dyn PointSource, expected: usize) -> Result<()> {
    let actual = input.n_points();
    if actual != expected {
        tracing::debug!(expected, actual, "Rejected point set with wrong cardinality");
        return Err(Error::CardinalityMismatch { expected, actual });
    }
    Ok(())
}
