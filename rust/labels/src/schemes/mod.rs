// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in landmark schemes, grouped by anatomy.

pub mod ear;
pub mod skull;

use crate::catalog::Catalog;

/// Registers every built-in converter, ears first.
pub fn register_builtin(catalog: &mut Catalog) {
    ear::register(catalog);
    skull::register(catalog);
}
