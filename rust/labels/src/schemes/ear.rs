// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IBUG ear landmark schemes.
//!
//! - `ear_ibug_110`: left and right ears, 55 points each
//! - `ear_ibug_55`: a single ear (outer helix, inner helix, tragus/concha/
//!   inferior crus, superior crus)
//! - `ear_ibug_50`: a single ear without the superior crus
//! - `ear_ibug_14`: coarse single ear, every 3rd-5th point of the 55-point
//!   outline
//! - `ear_ibug_55_trimesh`: the 55-point ear as a fixed triangulation
//!
//! References: <http://www.multipie.org/>,
//! <http://ibug.doc.ic.ac.uk/resources/ibug-ears/>

use landmark_lite_shape::PointSource;

use crate::catalog::{Catalog, Converter, ConverterFn};
use crate::error::Result;
use crate::scheme::{
    ChainSpec, ConversionSpec, IndexSet, Labelling, MeshSpec, RegionSpec, SchemeSpec, Selection,
    Target,
};

use IndexSet::{List, Span};

// =============================================================================
// Target schemes
// =============================================================================

pub const EAR_IBUG_110: SchemeSpec = SchemeSpec {
    name: "ear_ibug_110",
    n_points: 110,
    regions: &[
        RegionSpec {
            name: "left_outer_helix",
            chains: &[ChainSpec::open(Span(0, 20))],
        },
        RegionSpec {
            name: "left_inner_helix",
            chains: &[ChainSpec::open(Span(20, 35))],
        },
        RegionSpec {
            name: "left_tragus_concha_inf_crus",
            chains: &[ChainSpec::open(Span(35, 50))],
        },
        RegionSpec {
            name: "left_sup_crus",
            chains: &[ChainSpec::open(Span(50, 55))],
        },
        RegionSpec {
            name: "right_outer_helix",
            chains: &[ChainSpec::open(Span(55, 75))],
        },
        RegionSpec {
            name: "right_inner_helix",
            chains: &[ChainSpec::open(Span(75, 90))],
        },
        RegionSpec {
            name: "right_tragus_concha_inf_crus",
            chains: &[ChainSpec::open(Span(90, 105))],
        },
        RegionSpec {
            name: "right_sup_crus",
            chains: &[ChainSpec::open(Span(105, 110))],
        },
    ],
};

pub const EAR_IBUG_55: SchemeSpec = SchemeSpec {
    name: "ear_ibug_55",
    n_points: 55,
    regions: &[
        RegionSpec {
            name: "outer_helix",
            chains: &[ChainSpec::open(Span(0, 20))],
        },
        RegionSpec {
            name: "inner_helix",
            chains: &[ChainSpec::open(Span(20, 35))],
        },
        RegionSpec {
            name: "tragus_concha_inf_crus",
            chains: &[ChainSpec::open(Span(35, 50))],
        },
        RegionSpec {
            name: "sup_crus",
            chains: &[ChainSpec::open(Span(50, 55))],
        },
    ],
};

pub const EAR_IBUG_50: SchemeSpec = SchemeSpec {
    name: "ear_ibug_50",
    n_points: 50,
    regions: &[
        RegionSpec {
            name: "outer_helix",
            chains: &[ChainSpec::open(Span(0, 20))],
        },
        RegionSpec {
            name: "inner_helix",
            chains: &[ChainSpec::open(Span(20, 35))],
        },
        RegionSpec {
            name: "tragus_concha_inf_crus",
            chains: &[ChainSpec::open(Span(35, 50))],
        },
    ],
};

pub const EAR_IBUG_14: SchemeSpec = SchemeSpec {
    name: "ear_ibug_14",
    n_points: 14,
    regions: &[
        RegionSpec {
            name: "outer_helix",
            chains: &[ChainSpec::open(Span(0, 6))],
        },
        RegionSpec {
            name: "inner_helix",
            chains: &[ChainSpec::open(Span(6, 10))],
        },
        RegionSpec {
            name: "tragus_concha_inf_crus",
            chains: &[ChainSpec::open(Span(10, 14))],
        },
    ],
};

/// Points of the 55 (or 50) point ear kept by the 14-point scheme.
pub const EAR_IBUG_14_SELECTION: IndexSet = IndexSet::Concat(&[
    List(&[0, 3, 7, 11, 16, 19]),
    List(&[20, 25, 31, 34]),
    List(&[35, 39, 44, 49]),
]);

pub const EAR_IBUG_55_TRIMESH: MeshSpec = MeshSpec {
    name: "ear_ibug_55_trimesh",
    n_points: 55,
    label: "tri",
    triangles: &[
        [38, 19, 0], [45, 52, 51], [20, 35, 0], [35, 20, 47],
        [36, 38, 0], [35, 36, 0], [4, 24, 3], [45, 43, 42],
        [43, 33, 42], [44, 45, 51], [50, 44, 51], [44, 43, 45],
        [43, 44, 50], [31, 12, 13], [31, 50, 51], [52, 46, 47],
        [46, 52, 45], [46, 35, 47], [46, 36, 35], [46, 45, 42],
        [36, 46, 42], [33, 15, 16], [31, 32, 50], [15, 32, 14],
        [32, 15, 33], [32, 43, 50], [43, 32, 33], [32, 13, 14],
        [33, 34, 42], [24, 23, 3], [32, 31, 13], [41, 36, 42],
        [34, 33, 16], [34, 41, 42], [34, 18, 19], [23, 2, 3],
        [53, 52, 47], [25, 4, 5], [25, 24, 4], [7, 8, 27],
        [41, 37, 36], [41, 40, 38], [8, 9, 27], [36, 37, 38],
        [37, 41, 38], [17, 34, 16], [34, 17, 18], [15, 17, 16],
        [34, 40, 41], [52, 30, 51], [30, 11, 12], [30, 31, 51],
        [1, 22, 0], [54, 48, 49], [31, 30, 12], [2, 22, 1],
        [23, 22, 2], [20, 48, 47], [9, 28, 27], [28, 53, 27],
        [28, 9, 10], [26, 7, 27], [26, 6, 7], [6, 26, 5],
        [38, 39, 19], [54, 49, 24], [26, 25, 5], [39, 34, 19],
        [39, 40, 34], [40, 39, 38], [49, 22, 23], [49, 48, 20],
        [29, 28, 10], [11, 29, 10], [53, 29, 52], [28, 29, 53],
        [54, 26, 27], [25, 54, 24], [29, 30, 52], [30, 29, 11],
        [53, 54, 27], [26, 54, 25], [54, 53, 47], [48, 54, 47],
        [21, 20, 0], [21, 49, 20], [22, 21, 0], [49, 23, 24],
        [49, 21, 22],
    ],
};

// =============================================================================
// Conversions
// =============================================================================

pub const EARS_IBUG_110_TO_EARS_IBUG_110: ConversionSpec = ConversionSpec {
    name: "ears_ibug_110_to_ears_ibug_110",
    group: "ear_ibug_110",
    source_points: 110,
    target: Target::Graph {
        selection: Selection::All,
        scheme: &EAR_IBUG_110,
    },
};

pub const EARS_IBUG_110_TO_EARS_IBUG_55: ConversionSpec = ConversionSpec {
    name: "ears_ibug_110_to_ears_ibug_55",
    group: "ear_ibug_55",
    source_points: 110,
    target: Target::Split {
        parts: &[Span(0, 55), Span(55, 110)],
        scheme: &EAR_IBUG_55,
    },
};

pub const EARS_IBUG_55_TO_EARS_IBUG_55: ConversionSpec = ConversionSpec {
    name: "ears_ibug_55_to_ears_ibug_55",
    group: "ear_ibug_55",
    source_points: 55,
    target: Target::Graph {
        selection: Selection::All,
        scheme: &EAR_IBUG_55,
    },
};

pub const EARS_IBUG_55_TO_EARS_IBUG_50: ConversionSpec = ConversionSpec {
    name: "ears_ibug_55_to_ears_ibug_50",
    group: "ear_ibug_50",
    source_points: 55,
    target: Target::Graph {
        selection: Selection::Subset(Span(0, 50)),
        scheme: &EAR_IBUG_50,
    },
};

pub const EARS_IBUG_50_TO_EARS_IBUG_50: ConversionSpec = ConversionSpec {
    name: "ears_ibug_50_to_ears_ibug_50",
    group: "ear_ibug_50",
    source_points: 50,
    target: Target::Graph {
        selection: Selection::All,
        scheme: &EAR_IBUG_50,
    },
};

pub const EARS_IBUG_55_TO_EARS_IBUG_14: ConversionSpec = ConversionSpec {
    name: "ears_ibug_55_to_ears_ibug_14",
    group: "ear_ibug_14",
    source_points: 55,
    target: Target::Graph {
        selection: Selection::Subset(EAR_IBUG_14_SELECTION),
        scheme: &EAR_IBUG_14,
    },
};

pub const EARS_IBUG_50_TO_EARS_IBUG_14: ConversionSpec = ConversionSpec {
    name: "ears_ibug_50_to_ears_ibug_14",
    group: "ear_ibug_14",
    source_points: 50,
    target: Target::Graph {
        selection: Selection::Subset(EAR_IBUG_14_SELECTION),
        scheme: &EAR_IBUG_14,
    },
};

pub const EARS_IBUG_14_TO_EARS_IBUG_14: ConversionSpec = ConversionSpec {
    name: "ears_ibug_14_to_ears_ibug_14",
    group: "ear_ibug_14",
    source_points: 14,
    target: Target::Graph {
        selection: Selection::All,
        scheme: &EAR_IBUG_14,
    },
};

pub const EARS_IBUG_55_TO_EARS_IBUG_55_TRIMESH: ConversionSpec = ConversionSpec {
    name: "ears_ibug_55_to_ears_ibug_55_trimesh",
    group: "ear_ibug_55_trimesh",
    source_points: 55,
    target: Target::Mesh(&EAR_IBUG_55_TRIMESH),
};

/// Labels both ears of a 110-point bilateral cloud.
///
/// Regions: `left_outer_helix`, `left_inner_helix`,
/// `left_tragus_concha_inf_crus`, `left_sup_crus`, then the same four with a
/// `right_` prefix.
pub fn ears_ibug_110_to_ears_ibug_110(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_110_TO_EARS_IBUG_110.apply(input)
}

/// Splits a 110-point bilateral cloud into left (points 0..55) and right
/// (points 55..110) 55-point ears sharing one mapping.
pub fn ears_ibug_110_to_ears_ibug_55(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_110_TO_EARS_IBUG_55.apply(input)
}

/// Regions: `outer_helix`, `inner_helix`, `tragus_concha_inf_crus`, `sup_crus`.
pub fn ears_ibug_55_to_ears_ibug_55(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_55_TO_EARS_IBUG_55.apply(input)
}

/// Drops the superior crus (points 50..55).
pub fn ears_ibug_55_to_ears_ibug_50(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_55_TO_EARS_IBUG_50.apply(input)
}

/// Regions: `outer_helix`, `inner_helix`, `tragus_concha_inf_crus`.
pub fn ears_ibug_50_to_ears_ibug_50(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_50_TO_EARS_IBUG_50.apply(input)
}

/// Down-samples a 55-point ear to the coarse 14-point scheme.
pub fn ears_ibug_55_to_ears_ibug_14(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_55_TO_EARS_IBUG_14.apply(input)
}

/// Down-samples a 50-point ear to the coarse 14-point scheme.
pub fn ears_ibug_50_to_ears_ibug_14(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_50_TO_EARS_IBUG_14.apply(input)
}

pub fn ears_ibug_14_to_ears_ibug_14(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_14_TO_EARS_IBUG_14.apply(input)
}

/// Triangulates a 55-point ear with the fixed IBUG triangle list; the mapping
/// has a single `tri` entry covering every point.
pub fn ears_ibug_55_to_ears_ibug_55_trimesh(input: &dyn PointSource) -> Result<Labelling> {
    EARS_IBUG_55_TO_EARS_IBUG_55_TRIMESH.apply(input)
}

/// Registers every ear converter.
pub fn register(catalog: &mut Catalog) {
    let converters: [(&'static ConversionSpec, ConverterFn); 9] = [
        (&EARS_IBUG_110_TO_EARS_IBUG_110, ears_ibug_110_to_ears_ibug_110),
        (&EARS_IBUG_110_TO_EARS_IBUG_55, ears_ibug_110_to_ears_ibug_55),
        (&EARS_IBUG_55_TO_EARS_IBUG_55, ears_ibug_55_to_ears_ibug_55),
        (&EARS_IBUG_55_TO_EARS_IBUG_50, ears_ibug_55_to_ears_ibug_50),
        (&EARS_IBUG_55_TO_EARS_IBUG_14, ears_ibug_55_to_ears_ibug_14),
        (&EARS_IBUG_50_TO_EARS_IBUG_50, ears_ibug_50_to_ears_ibug_50),
        (&EARS_IBUG_50_TO_EARS_IBUG_14, ears_ibug_50_to_ears_ibug_14),
        (&EARS_IBUG_14_TO_EARS_IBUG_14, ears_ibug_14_to_ears_ibug_14),
        (&EARS_IBUG_55_TO_EARS_IBUG_55_TRIMESH, ears_ibug_55_to_ears_ibug_55_trimesh),
    ];
    for (spec, func) in converters {
        catalog.register(Converter::new(spec, func));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landmark_lite_shape::PointCloud;

    fn cloud(n: usize) -> PointCloud {
        PointCloud::new(2, (0..n).flat_map(|i| [i as f64, -(i as f64)]).collect())
    }

    #[test]
    fn fourteen_point_selection() {
        assert_eq!(
            EAR_IBUG_14_SELECTION.to_vec(),
            vec![0, 3, 7, 11, 16, 19, 20, 25, 31, 34, 35, 39, 44, 49]
        );
    }

    #[test]
    fn bilateral_regions() {
        let result = ears_ibug_110_to_ears_ibug_110(&cloud(110)).unwrap();
        let graph = result.shape.as_graph().unwrap();
        assert_eq!(result.mapping.len(), 8);
        assert_eq!(result.mapping.get("right_sup_crus"), Some(&[105, 106, 107, 108, 109][..]));
        // 8 open chains over 110 points
        assert_eq!(graph.n_edges(), 110 - 8);
    }

    #[test]
    fn fifty_five_to_fifty_drops_sup_crus_points() {
        let result = ears_ibug_55_to_ears_ibug_50(&cloud(55)).unwrap();
        let graph = result.shape.as_graph().unwrap();
        assert_eq!(graph.n_points(), 50);
        assert!(!result.mapping.contains("sup_crus"));
        assert_eq!(graph.point(49), &[49.0, -49.0]);
    }

    #[test]
    fn fifty_to_fourteen_uses_same_selection() {
        let from_55 = ears_ibug_55_to_ears_ibug_14(&cloud(55)).unwrap();
        let from_50 = ears_ibug_50_to_ears_ibug_14(&cloud(50)).unwrap();
        assert_eq!(from_55.mapping, from_50.mapping);
        let a = from_55.shape.as_graph().unwrap();
        let b = from_50.shape.as_graph().unwrap();
        assert_eq!(a.coords(), b.coords());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn trimesh_covers_every_point() {
        let result = ears_ibug_55_to_ears_ibug_55_trimesh(&cloud(55)).unwrap();
        let mesh = result.shape.as_mesh().unwrap();
        assert_eq!(mesh.n_tris(), 89);
        assert_eq!(result.mapping.names().collect::<Vec<_>>(), vec!["tri"]);
        assert_eq!(result.mapping.get("tri"), Some(&(0..55).collect::<Vec<usize>>()[..]));
        let mut used = vec![false; 55];
        for tri in mesh.triangles() {
            for &i in tri {
                used[i] = true;
            }
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn identity_schemes_keep_points() {
        let cases: [(ConverterFn, usize); 3] = [
            (ears_ibug_55_to_ears_ibug_55, 55),
            (ears_ibug_50_to_ears_ibug_50, 50),
            (ears_ibug_14_to_ears_ibug_14, 14),
        ];
        for (f, n) in cases {
            let input = cloud(n);
            let result = f(&input).unwrap();
            let graph = result.shape.as_graph().unwrap();
            assert_eq!(graph.coords(), input.coords());
        }
    }
}
