// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle mesh over an ordered point set

use rustc_hash::FxHashMap;

use nalgebra::{Point3, Vector3};

use crate::points::{PointCloud, PointSource};

/// Triangle mesh with an explicit triangle list.
#[derive(Debug, Clone)]
pub struct TriMesh {
    points: PointCloud,
    /// Triangle corner indices (i0, i1, i2)
    triangles: Vec<[usize; 3]>,
}

impl TriMesh {
    /// Create a mesh from points and a fixed triangle list.
    ///
    /// Panics if a triangle corner references a point outside the cloud.
    pub fn new(points: PointCloud, triangles: Vec<[usize; 3]>) -> Self {
        let n = points.n_points();
        for (t, tri) in triangles.iter().enumerate() {
            assert!(
                tri.iter().all(|&i| i < n),
                "triangle {t} {tri:?} references a point outside 0..{n}"
            );
        }
        Self { points, triangles }
    }

    /// The underlying points.
    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    /// Triangle list, in construction order
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Get triangle count
    #[inline]
    pub fn n_tris(&self) -> usize {
        self.triangles.len()
    }

    /// Unique undirected edges, each as `(min, max)`, in first-seen order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.edge_use_counts().into_iter().map(|(e, _)| e).collect()
    }

    /// Edges used by exactly one triangle.
    pub fn boundary_edges(&self) -> Vec<(usize, usize)> {
        self.edge_use_counts()
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|(e, _)| e)
            .collect()
    }

    /// Unit face normals, one per triangle (3D meshes only).
    ///
    /// Degenerate triangles get a zero vector.
    pub fn face_normals(&self) -> Option<Vec<Vector3<f64>>> {
        let corners = self.corners()?;
        Some(
            corners
                .iter()
                .map(|[a, b, c]| {
                    let n = (b - a).cross(&(c - a));
                    n.try_normalize(1e-12).unwrap_or_else(Vector3::zeros)
                })
                .collect(),
        )
    }

    /// Total surface area (3D meshes only).
    pub fn area(&self) -> Option<f64> {
        let corners = self.corners()?;
        Some(
            corners
                .iter()
                .map(|[a, b, c]| (b - a).cross(&(c - a)).norm() * 0.5)
                .sum(),
        )
    }

    fn corners(&self) -> Option<Vec<[Point3<f64>; 3]>> {
        if self.points.n_dims() != 3 {
            return None;
        }
        self.triangles
            .iter()
            .map(|t| {
                Some([
                    self.points.point3(t[0])?,
                    self.points.point3(t[1])?,
                    self.points.point3(t[2])?,
                ])
            })
            .collect()
    }

    fn edge_use_counts(&self) -> Vec<((usize, usize), usize)> {
        let mut order: Vec<((usize, usize), usize)> = Vec::new();
        let mut seen: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for tri in &self.triangles {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                let canonical = if a < b { (a, b) } else { (b, a) };
                match seen.get(&canonical) {
                    Some(&pos) => order[pos].1 += 1,
                    None => {
                        seen.insert(canonical, order.len());
                        order.push((canonical, 1));
                    }
                }
            }
        }
        order
    }
}

impl PointSource for TriMesh {
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
    use approx::assert_relative_eq;

    fn unit_square() -> TriMesh {
        let points = PointCloud::from_points3(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        TriMesh::new(points, vec![[0, 1, 2], [0, 2, 3]])
    }

    #[test]
    fn counts() {
        let mesh = unit_square();
        assert_eq!(mesh.n_tris(), 2);
        assert_eq!(mesh.n_points(), 4);
        assert_eq!(mesh.edges().len(), 5);
        // Diagonal is shared
        assert_eq!(mesh.boundary_edges().len(), 4);
        assert!(!mesh.boundary_edges().contains(&(0, 2)));
    }

    #[test]
    fn area_and_normals() {
        let mesh = unit_square();
        assert_relative_eq!(mesh.area().unwrap(), 1.0);
        let normals = mesh.face_normals().unwrap();
        assert_relative_eq!(normals[0].z, 1.0);
        assert_relative_eq!(normals[1].z, 1.0);
    }

    #[test]
    fn planar_mesh_has_no_area() {
        let points = PointCloud::new(2, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        let mesh = TriMesh::new(points, vec![[0, 1, 2]]);
        assert!(mesh.area().is_none());
        assert_eq!(mesh.edges(), vec![(0, 1), (1, 2), (0, 2)]);
    }

    #[test]
    #[should_panic(expected = "outside 0..3")]
    fn corner_out_of_range_panics() {
        let points = PointCloud::new(2, vec![0.0; 6]);
        TriMesh::new(points, vec![[0, 1, 3]]);
    }
}
