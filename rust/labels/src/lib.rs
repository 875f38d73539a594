// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Landmark-Lite Labels
//!
//! Semantic labelling of anonymous landmark point sets.
//!
//! A landmark *scheme* fixes a point count and an ordering convention: point
//! `i` always means the same anatomical landmark. A *converter* takes a point
//! set in one scheme, checks its cardinality, optionally subsets or splits
//! it, and produces a labelled structure in another scheme: named regions,
//! chain connectivity for every region and the ordered name → indices
//! [`Mapping`].
//!
//! Converters are driven by declarative tables ([`ConversionSpec`]) and are
//! registered by group label in a [`Catalog`]. Several converters may share a
//! group label when they lead to the same target scheme from different
//! source schemes; [`Catalog::apply`] picks the first candidate whose
//! cardinality check passes.
//!
//! ```
//! use landmark_lite_labels::{ears_ibug_55_to_ears_ibug_14, Catalog};
//! use landmark_lite_shape::{PointCloud, PointSource};
//!
//! let ear = PointCloud::new(2, vec![0.0; 55 * 2]);
//! let labelled = ears_ibug_55_to_ears_ibug_14(&ear).unwrap();
//! assert_eq!(labelled.mapping.len(), 3);
//!
//! // Same thing, dispatched by group label
//! let labelled = Catalog::builtin().apply("ear_ibug_14", &ear).unwrap();
//! assert_eq!(labelled.shape.as_graph().unwrap().n_points(), 14);
//! ```

pub mod catalog;
pub mod connectivity;
pub mod error;
pub mod mapping;
pub mod scheme;
pub mod schemes;
pub mod validate;

pub use catalog::{Catalog, Converter, ConverterFn};
pub use connectivity::{concat_connectivity, connectivity_from_indices, connectivity_from_range};
pub use error::{Error, Result};
pub use mapping::Mapping;
pub use scheme::{
    ChainSpec, ConversionSpec, IndexSet, LabelledShape, Labelling, MeshSpec, RegionSpec,
    SchemeSpec, Selection, Target,
};
pub use schemes::ear::{
    ears_ibug_110_to_ears_ibug_110, ears_ibug_110_to_ears_ibug_55, ears_ibug_14_to_ears_ibug_14,
    ears_ibug_50_to_ears_ibug_14, ears_ibug_50_to_ears_ibug_50, ears_ibug_55_to_ears_ibug_14,
    ears_ibug_55_to_ears_ibug_50, ears_ibug_55_to_ears_ibug_55,
    ears_ibug_55_to_ears_ibug_55_trimesh,
};
pub use schemes::skull::{
    skull_gosh_44_to_skull_gosh_44, skull_gosh_50_to_skull_gosh_44,
    skull_gosh_50_to_skull_gosh_50,
};
pub use validate::validate_input;
