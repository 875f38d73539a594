// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative scheme tables and the conversion engine that runs them.
//!
//! Every converter follows the same protocol:
//!
//! 1. check the input's point count against the source scheme;
//! 2. take the output points from the input (all of them, an explicit index
//!    selection, or several slices for a split);
//! 3. walk the target scheme's regions in order, building each region's chain
//!    connectivity and its mapping entry;
//! 4. hand points, edges and mapping to [`LabelledPointGraph`] (or points and
//!    a fixed triangle list to [`TriMesh`]).
//!
//! Only step 1 can fail. All region and selection indices in the tables are
//! already expressed in the *output* point space, so nothing is renumbered at
//! runtime.

use landmark_lite_shape::{LabelledPointGraph, PointCloud, PointSource, TriMesh};

use crate::connectivity::connectivity_from_indices;
use crate::error::Result;
use crate::mapping::Mapping;
use crate::validate::validate_input;

// =============================================================================
// Index tables
// =============================================================================

/// An ordered list of point indices, written as table data.
#[derive(Debug, Clone, Copy)]
pub enum IndexSet {
    /// Half-open range `start..end`.
    Span(usize, usize),
    /// Explicit indices, in order.
    List(&'static [usize]),
    /// Several sets, one after the other.
    Concat(&'static [IndexSet]),
}

impl IndexSet {
    /// Number of indices.
    pub fn len(&self) -> usize {
        match *self {
            IndexSet::Span(start, end) => end.saturating_sub(start),
            IndexSet::List(list) => list.len(),
            IndexSet::Concat(parts) => parts.iter().map(IndexSet::len).sum(),
        }
    }

    /// Check if the set has no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the set into an index vector.
    pub fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len());
        self.extend_into(&mut out);
        out
    }

    fn extend_into(&self, out: &mut Vec<usize>) {
        match *self {
            IndexSet::Span(start, end) => out.extend(start..end),
            IndexSet::List(list) => out.extend_from_slice(list),
            IndexSet::Concat(parts) => {
                for part in parts {
                    part.extend_into(out);
                }
            }
        }
    }
}

/// One linked run of indices inside a region.
#[derive(Debug, Clone, Copy)]
pub struct ChainSpec {
    pub indices: IndexSet,
    /// Link the last index back to the first.
    pub closed: bool,
}

impl ChainSpec {
    /// An open curve.
    pub const fn open(indices: IndexSet) -> Self {
        Self {
            indices,
            closed: false,
        }
    }

    /// A closed loop (eye sockets and other ring-like features).
    pub const fn closed(indices: IndexSet) -> Self {
        Self {
            indices,
            closed: true,
        }
    }
}

/// A named anatomical region made of one or more chains.
///
/// The region's mapping entry is the concatenation of its chains; chains
/// are never linked to each other.
#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    pub name: &'static str,
    pub chains: &'static [ChainSpec],
}

/// A target scheme whose regions are connected by chains.
#[derive(Debug, Clone, Copy)]
pub struct SchemeSpec {
    pub name: &'static str,
    pub n_points: usize,
    pub regions: &'static [RegionSpec],
}

impl SchemeSpec {
    /// Builds the global edge list and the ordered mapping.
    ///
    /// Panics if a region references a point outside `0..n_points` or a
    /// region name repeats.
    pub fn build(&self) -> (Vec<(usize, usize)>, Mapping) {
        let mut edges = Vec::new();
        let mut mapping = Mapping::new();

        for region in self.regions {
            let mut indices = Vec::new();
            for chain in region.chains {
                let chain_indices = chain.indices.to_vec();
                if let Some(&bad) = chain_indices.iter().find(|&&i| i >= self.n_points) {
                    panic!(
                        "scheme '{}' region '{}' references point {bad} outside 0..{}",
                        self.name, region.name, self.n_points
                    );
                }
                edges.extend(connectivity_from_indices(&chain_indices, chain.closed));
                indices.extend(chain_indices);
            }
            mapping.insert(region.name, indices);
        }

        (edges, mapping)
    }
}

/// A target scheme given as a fixed triangulation.
#[derive(Debug, Clone, Copy)]
pub struct MeshSpec {
    pub name: &'static str,
    pub n_points: usize,
    /// Mapping entry covering every point.
    pub label: &'static str,
    pub triangles: &'static [[usize; 3]],
}

/// Which input points make up an output.
#[derive(Debug, Clone, Copy)]
pub enum Selection {
    /// Every input point, in input order.
    All,
    /// The listed input points, in list order.
    Subset(IndexSet),
}

impl Selection {
    fn apply(&self, points: &PointCloud) -> PointCloud {
        match self {
            Selection::All => points.clone(),
            Selection::Subset(set) => points.select(&set.to_vec()),
        }
    }
}

/// What a converter produces.
#[derive(Debug, Clone, Copy)]
pub enum Target {
    /// One labelled graph.
    Graph {
        selection: Selection,
        scheme: &'static SchemeSpec,
    },
    /// One labelled graph per part, all sharing the scheme's mapping.
    Split {
        parts: &'static [IndexSet],
        scheme: &'static SchemeSpec,
    },
    /// A triangle mesh over all input points.
    Mesh(&'static MeshSpec),
}

// =============================================================================
// Results
// =============================================================================

/// The labelled structure produced by a converter.
#[derive(Debug, Clone)]
pub enum LabelledShape {
    Graph(LabelledPointGraph),
    /// One input split into several outputs (e.g. left and right ears).
    Split(Vec<LabelledPointGraph>),
    Mesh(TriMesh),
}

impl LabelledShape {
    /// The graph, for single-graph results.
    pub fn as_graph(&self) -> Option<&LabelledPointGraph> {
        match self {
            LabelledShape::Graph(g) => Some(g),
            _ => None,
        }
    }

    /// The mesh, for triangulated results.
    pub fn as_mesh(&self) -> Option<&TriMesh> {
        match self {
            LabelledShape::Mesh(m) => Some(m),
            _ => None,
        }
    }

    /// Every labelled graph in the result (empty for meshes).
    pub fn graphs(&self) -> Vec<&LabelledPointGraph> {
        match self {
            LabelledShape::Graph(g) => vec![g],
            LabelledShape::Split(gs) => gs.iter().collect(),
            LabelledShape::Mesh(_) => Vec::new(),
        }
    }

    /// Point count of each output.
    pub fn output_sizes(&self) -> Vec<usize> {
        match self {
            LabelledShape::Graph(g) => vec![g.n_points()],
            LabelledShape::Split(gs) => gs.iter().map(|g| g.n_points()).collect(),
            LabelledShape::Mesh(m) => vec![m.n_points()],
        }
    }
}

/// A converter's result: the labelled structure and the mapping behind it.
#[derive(Debug, Clone)]
pub struct Labelling {
    pub shape: LabelledShape,
    pub mapping: Mapping,
}

// =============================================================================
// Conversion
// =============================================================================

/// Table describing one scheme conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConversionSpec {
    /// Converter name, e.g. `ears_ibug_110_to_ears_ibug_55`.
    pub name: &'static str,
    /// Group label the converter is registered under.
    pub group: &'static str,
    /// Point count of the source scheme.
    pub source_points: usize,
    pub target: Target,
}

impl ConversionSpec {
    /// Runs the conversion on `input`.
    ///
    /// Fails only with a cardinality mismatch. The input is never modified.
    pub fn apply(&self, input: &dyn PointSource) -> Result<Labelling> {
        validate_input(input, self.source_points)?;
        let points = input.to_point_cloud();

        let labelling = match self.target {
            Target::Graph { selection, scheme } => {
                let out = selection.apply(&points);
                self.check_output(&out, scheme.n_points);
                let (edges, mapping) = scheme.build();
                let graph = LabelledPointGraph::from_mapping(out, edges, mapping.iter());
                Labelling {
                    shape: LabelledShape::Graph(graph),
                    mapping,
                }
            }
            Target::Split { parts, scheme } => {
                let (edges, mapping) = scheme.build();
                let graphs = parts
                    .iter()
                    .map(|part| {
                        let out = Selection::Subset(*part).apply(&points);
                        self.check_output(&out, scheme.n_points);
                        LabelledPointGraph::from_mapping(out, edges.clone(), mapping.iter())
                    })
                    .collect();
                Labelling {
                    shape: LabelledShape::Split(graphs),
                    mapping,
                }
            }
            Target::Mesh(mesh) => {
                self.check_output(&points, mesh.n_points);
                let mut mapping = Mapping::new();
                mapping.insert(mesh.label, (0..points.n_points()).collect());
                Labelling {
                    shape: LabelledShape::Mesh(TriMesh::new(points, mesh.triangles.to_vec())),
                    mapping,
                }
            }
        };

        tracing::debug!(
            converter = self.name,
            group = self.group,
            regions = labelling.mapping.len(),
            outputs = ?labelling.shape.output_sizes(),
            "Applied landmark labels"
        );

        Ok(labelling)
    }

    fn check_output(&self, out: &PointCloud, expected: usize) {
        assert_eq!(
            out.n_points(),
            expected,
            "converter '{}' selects {} points for a {expected}-point scheme",
            self.name,
            out.n_points()
        );
    }
}
