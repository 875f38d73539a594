// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GOSH skull landmark schemes.
//!
//! The 50-point scheme covers midline, maxilla, both orbits (closed loops),
//! mandible, midline skull, inner mandible and skull base. The 44-point
//! scheme drops the mental foramen and anterior skull landmarks; its midline
//! runs through point 33, which sits between the mandible and inner mandible
//! blocks after the points are renumbered.

use landmark_lite_shape::PointSource;

use crate::catalog::{Catalog, Converter, ConverterFn};
use crate::error::Result;
use crate::scheme::{
    ChainSpec, ConversionSpec, IndexSet, Labelling, RegionSpec, SchemeSpec, Selection, Target,
};

use IndexSet::{Concat, List, Span};

pub const SKULL_GOSH_50: SchemeSpec = SchemeSpec {
    name: "skull_gosh_50",
    n_points: 50,
    regions: &[
        RegionSpec {
            name: "midline",
            chains: &[ChainSpec::open(Span(0, 11))],
        },
        RegionSpec {
            name: "maxilla",
            chains: &[ChainSpec::open(Span(11, 19))],
        },
        RegionSpec {
            name: "left_eye",
            chains: &[ChainSpec::closed(Span(19, 22))],
        },
        RegionSpec {
            name: "right_eye",
            chains: &[ChainSpec::closed(Span(22, 25))],
        },
        RegionSpec {
            name: "mandible",
            chains: &[ChainSpec::open(Span(25, 35))],
        },
        RegionSpec {
            name: "midline_skull",
            chains: &[ChainSpec::open(Span(35, 38))],
        },
        RegionSpec {
            name: "inner_mandible",
            chains: &[ChainSpec::open(Span(38, 42))],
        },
        RegionSpec {
            name: "skull_base",
            chains: &[ChainSpec::open(Span(42, 46)), ChainSpec::open(Span(46, 50))],
        },
    ],
};

pub const SKULL_GOSH_44: SchemeSpec = SchemeSpec {
    name: "skull_gosh_44",
    n_points: 44,
    regions: &[
        RegionSpec {
            name: "midline",
            chains: &[ChainSpec::open(Concat(&[List(&[0, 33]), Span(1, 11)]))],
        },
        RegionSpec {
            name: "maxilla",
            chains: &[ChainSpec::open(Span(11, 19))],
        },
        RegionSpec {
            name: "left_eye",
            chains: &[ChainSpec::closed(Span(19, 22))],
        },
        RegionSpec {
            name: "right_eye",
            chains: &[ChainSpec::closed(Span(22, 25))],
        },
        RegionSpec {
            name: "mandible",
            chains: &[ChainSpec::open(Span(25, 29)), ChainSpec::open(Span(29, 33))],
        },
        RegionSpec {
            name: "inner_mandible",
            chains: &[ChainSpec::open(Span(34, 36))],
        },
        RegionSpec {
            name: "skull_base",
            chains: &[ChainSpec::open(Span(36, 40)), ChainSpec::open(Span(40, 44))],
        },
    ],
};

/// Points of the 50-point skull kept by the 44-point scheme.
pub const SKULL_GOSH_44_SELECTION: IndexSet =
    Concat(&[Span(0, 29), Span(31, 36), List(&[38]), Span(41, 50)]);

pub const SKULL_GOSH_50_TO_SKULL_GOSH_50: ConversionSpec = ConversionSpec {
    name: "skull_gosh_50_to_skull_gosh_50",
    group: "skull_gosh_50",
    source_points: 50,
    target: Target::Graph {
        selection: Selection::All,
        scheme: &SKULL_GOSH_50,
    },
};

pub const SKULL_GOSH_50_TO_SKULL_GOSH_44: ConversionSpec = ConversionSpec {
    name: "skull_gosh_50_to_skull_gosh_44",
    group: "skull_gosh_44",
    source_points: 50,
    target: Target::Graph {
        selection: Selection::Subset(SKULL_GOSH_44_SELECTION),
        scheme: &SKULL_GOSH_44,
    },
};

pub const SKULL_GOSH_44_TO_SKULL_GOSH_44: ConversionSpec = ConversionSpec {
    name: "skull_gosh_44_to_skull_gosh_44",
    group: "skull_gosh_44",
    source_points: 44,
    target: Target::Graph {
        selection: Selection::All,
        scheme: &SKULL_GOSH_44,
    },
};

/// Applies the GOSH 50-point labels.
///
/// Regions: `midline`, `maxilla`, `left_eye`, `right_eye`, `mandible`,
/// `midline_skull`, `inner_mandible`, `skull_base`.
pub fn skull_gosh_50_to_skull_gosh_50(input: &dyn PointSource) -> Result<Labelling> {
    SKULL_GOSH_50_TO_SKULL_GOSH_50.apply(input)
}

/// Applies the GOSH 44-point labels to a 50-point skull, dropping the mental
/// foramen and anterior skull landmarks.
pub fn skull_gosh_50_to_skull_gosh_44(input: &dyn PointSource) -> Result<Labelling> {
    SKULL_GOSH_50_TO_SKULL_GOSH_44.apply(input)
}

pub fn skull_gosh_44_to_skull_gosh_44(input: &dyn PointSource) -> Result<Labelling> {
    SKULL_GOSH_44_TO_SKULL_GOSH_44.apply(input)
}

/// Registers every skull converter.
pub fn register(catalog: &mut Catalog) {
    let converters: [(&'static ConversionSpec, ConverterFn); 3] = [
        (&SKULL_GOSH_50_TO_SKULL_GOSH_50, skull_gosh_50_to_skull_gosh_50),
        (&SKULL_GOSH_50_TO_SKULL_GOSH_44, skull_gosh_50_to_skull_gosh_44),
        (&SKULL_GOSH_44_TO_SKULL_GOSH_44, skull_gosh_44_to_skull_gosh_44),
    ];
    for (spec, func) in converters {
        catalog.register(Converter::new(spec, func));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landmark_lite_shape::PointCloud;

    fn skull(n: usize) -> PointCloud {
        PointCloud::new(3, (0..n).flat_map(|i| [i as f64, 0.0, 1.0]).collect())
    }

    #[test]
    fn selection_renumbers_to_44() {
        let sel = SKULL_GOSH_44_SELECTION.to_vec();
        assert_eq!(sel.len(), 44);
        assert_eq!(&sel[27..31], &[27, 28, 31, 32]);
        assert_eq!(sel[34], 38);
        assert_eq!(sel[35], 41);
    }

    #[test]
    fn skull_base_chains_stay_separate() {
        let result = skull_gosh_50_to_skull_gosh_50(&skull(50)).unwrap();
        let graph = result.shape.as_graph().unwrap();
        assert_eq!(result.mapping.get("skull_base"), Some(&(42..50).collect::<Vec<usize>>()[..]));
        let base = graph.region_edges("skull_base").unwrap();
        assert_eq!(base.len(), 6);
        assert!(!base.contains(&(45, 46)));
    }

    #[test]
    fn fifty_to_44_midline_passes_through_33() {
        let result = skull_gosh_50_to_skull_gosh_44(&skull(50)).unwrap();
        let graph = result.shape.as_graph().unwrap();
        assert_eq!(graph.n_points(), 44);
        assert_eq!(
            result.mapping.get("midline"),
            Some(&[0, 33, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10][..])
        );
        // Output point 33 is input point 35
        assert_eq!(graph.point(33), &[35.0, 0.0, 1.0]);
        assert_eq!(graph.edges()[0], (0, 33));
        assert_eq!(graph.edges()[1], (33, 1));
    }

    #[test]
    fn forty_four_schemes_agree() {
        let from_50 = skull_gosh_50_to_skull_gosh_44(&skull(50)).unwrap();
        let from_44 = skull_gosh_44_to_skull_gosh_44(&skull(44)).unwrap();
        assert_eq!(from_50.mapping, from_44.mapping);
        assert_eq!(
            from_50.shape.as_graph().unwrap().edges(),
            from_44.shape.as_graph().unwrap().edges()
        );
    }
}
