// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Undirected point graph with named point groups (labels).
//!
//! A [`LabelledPointGraph`] is an ordered point set, an undirected edge list
//! over it, and an ordered table of labels, each naming a subset of point
//! indices. It is the output container for landmark labellers:
//!
//! - **Nodes** = landmark points (order preserved from the input)
//! - **Edges** = the chain connectivity of each labelled region
//! - **Labels** = anatomical region names, in definition order
//!
//! Edges are stored exactly as supplied: no sorting, no deduplication.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::points::{PointCloud, PointSource};

/// Per-point adjacency: (neighbour index, edge index). Landmark chains have
/// degree 2 almost everywhere.
type Adjacency = SmallVec<[(usize, usize); 4]>;

/// A point graph with an ordered set of named index groups.
#[derive(Debug, Clone)]
pub struct LabelledPointGraph {
    points: PointCloud,
    edges: Vec<(usize, usize)>,
    /// Labels in definition order.
    labels: Vec<(String, Vec<usize>)>,
    /// Label name → position in `labels`.
    label_index: FxHashMap<String, usize>,
    /// Point index → list of (neighbour index, edge index).
    adjacency: Vec<Adjacency>,
}

impl LabelledPointGraph {
    /// Builds a labelled graph from points, an edge list and an ordered
    /// name → indices table.
    ///
    /// Point order, edge order and label order are kept as given. Panics if an
    /// edge endpoint or label index is out of range, or if a label name
    /// repeats; those indicate a corrupt labelling table, not bad input.
    pub fn from_mapping<'a, I>(points: PointCloud, edges: Vec<(usize, usize)>, mapping: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [usize])>,
    {
        let n = points.n_points();

        let mut adjacency = vec![Adjacency::new(); n];
        for (idx, &(a, b)) in edges.iter().enumerate() {
            assert!(
                a < n && b < n,
                "edge {idx} ({a}, {b}) references a point outside 0..{n}"
            );
            adjacency[a].push((b, idx));
            adjacency[b].push((a, idx));
        }

        let mut labels = Vec::new();
        let mut label_index = FxHashMap::default();
        for (name, indices) in mapping {
            if let Some(&bad) = indices.iter().find(|&&i| i >= n) {
                panic!("label '{name}' references point {bad} outside 0..{n}");
            }
            let previous = label_index.insert(name.to_string(), labels.len());
            assert!(previous.is_none(), "duplicate label '{name}'");
            labels.push((name.to_string(), indices.to_vec()));
        }

        Self {
            points,
            edges,
            labels,
            label_index,
            adjacency,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The underlying points.
    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Returns the number of edges.
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// Label names in definition order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of labels.
    pub fn n_labels(&self) -> usize {
        self.labels.len()
    }

    /// Checks if a label exists.
    pub fn has_label(&self, name: &str) -> bool {
        self.label_index.contains_key(name)
    }

    /// Point indices of a label, in label order.
    pub fn indices(&self, name: &str) -> Option<&[usize]> {
        self.label_index
            .get(name)
            .map(|&pos| self.labels[pos].1.as_slice())
    }

    /// The points of a label, as a fresh point cloud.
    pub fn with_label(&self, name: &str) -> Option<PointCloud> {
        self.indices(name).map(|idx| self.points.select(idx))
    }

    /// Edges whose endpoints both belong to the given label.
    pub fn region_edges(&self, name: &str) -> Option<Vec<(usize, usize)>> {
        let indices = self.indices(name)?;
        let mut member = vec![false; self.n_points()];
        for &i in indices {
            member[i] = true;
        }
        Some(
            self.edges
                .iter()
                .copied()
                .filter(|&(a, b)| member[a] && member[b])
                .collect(),
        )
    }

    // =========================================================================
    // Adjacency
    // =========================================================================

    /// Adjacent point indices, in edge insertion order.
    pub fn neighbours(&self, point: usize) -> Vec<usize> {
        self.adjacency[point]
            .iter()
            .map(|&(neighbour, _)| neighbour)
            .collect()
    }

    /// Returns the degree (number of incident edges) of a point.
    pub fn degree(&self, point: usize) -> usize {
        self.adjacency[point].len()
    }

    /// Returns points with no incident edge.
    pub fn isolated_points(&self) -> Vec<usize> {
        (0..self.n_points())
            .filter(|&p| self.degree(p) == 0)
            .collect()
    }

    /// Connected components via BFS, each listed in visit order.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let n = self.n_points();
        let mut visited = vec![false; n];
        let mut components = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            visited[start] = true;
            queue.push_back(start);

            while let Some(node) = queue.pop_front() {
                component.push(node);
                for &(neighbour, _) in &self.adjacency[node] {
                    if !visited[neighbour] {
                        visited[neighbour] = true;
                        queue.push_back(neighbour);
                    }
                }
            }

            components.push(component);
        }

        components
    }
}

impl PointSource for LabelledPointGraph {
    fn n_points(&self) -> usize {
        self.points.n_points()
    }

    fn n_dims(&self) -> usize {
        self.points.n_dims()
    }

    fn coords(&self) -> &[f64] {
        self.points.coords()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PointCloud {
        PointCloud::new(2, vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 5.0, 5.0])
    }

    fn make_graph() -> LabelledPointGraph {
        // 0 - 1 - 2 - 3 - 0 (ring), 4 on its own
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
        let ring: &[usize] = &[0, 1, 2, 3];
        let lone: &[usize] = &[4];
        LabelledPointGraph::from_mapping(square(), edges, [("ring", ring), ("lone", lone)])
    }

    #[test]
    fn preserves_order() {
        let g = make_graph();
        assert_eq!(g.n_points(), 5);
        assert_eq!(g.edges(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(g.labels().collect::<Vec<_>>(), vec!["ring", "lone"]);
        assert_eq!(g.indices("ring"), Some(&[0, 1, 2, 3][..]));
    }

    #[test]
    fn label_point_access() {
        let g = make_graph();
        let lone = g.with_label("lone").unwrap();
        assert_eq!(lone.n_points(), 1);
        assert_eq!(lone.point(0), &[5.0, 5.0]);
        assert!(g.with_label("missing").is_none());
    }

    #[test]
    fn degrees_and_components() {
        let g = make_graph();
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.neighbours(0), vec![1, 3]);
        assert_eq!(g.isolated_points(), vec![4]);
        let comps = g.connected_components();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[1], vec![4]);
    }

    #[test]
    fn region_edges_filters_by_membership() {
        let g = make_graph();
        assert_eq!(g.region_edges("ring").unwrap().len(), 4);
        assert!(g.region_edges("lone").unwrap().is_empty());
    }

    #[test]
    fn edges_are_not_deduplicated() {
        let pc = PointCloud::new(2, vec![0.0; 4]);
        let idx: &[usize] = &[0, 1];
        let g = LabelledPointGraph::from_mapping(pc, vec![(0, 1), (1, 0)], [("pair", idx)]);
        assert_eq!(g.n_edges(), 2);
    }

    #[test]
    #[should_panic(expected = "outside 0..2")]
    fn edge_out_of_range_panics() {
        let pc = PointCloud::new(2, vec![0.0; 4]);
        let idx: &[usize] = &[0, 1];
        LabelledPointGraph::from_mapping(pc, vec![(0, 2)], [("pair", idx)]);
    }

    #[test]
    #[should_panic(expected = "duplicate label 'a'")]
    fn duplicate_label_panics() {
        let pc = PointCloud::new(2, vec![0.0; 4]);
        let idx: &[usize] = &[0];
        LabelledPointGraph::from_mapping(pc, Vec::new(), [("a", idx), ("a", idx)]);
    }
}
