// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Landmark-Lite Shape
//!
//! Shape containers consumed by the landmark labelling engine.
//!
//! Every container stores its points as a flat, row-major coordinate buffer
//! (2D or 3D) and exposes it through the [`PointSource`] trait, so a labeller
//! can accept a raw [`PointCloud`], an already labelled
//! [`LabelledPointGraph`] or a [`TriMesh`] interchangeably.
//!
//! Point order is always preserved: point `i` of an input keeps meaning the
//! same landmark after construction, subsetting only ever happens through an
//! explicit index list.

pub mod error;
pub mod graph;
pub mod mesh;
pub mod points;

pub use error::{Error, Result};
pub use graph::LabelledPointGraph;
pub use mesh::TriMesh;
pub use points::{PointCloud, PointSource};
