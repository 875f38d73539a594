// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered point storage and the [`PointSource`] capability trait.

use std::ops::Range;

use nalgebra::{DVector, Point2, Point3};

use crate::error::{Error, Result};

/// Anything that exposes an ordered sequence of N coordinate points.
///
/// Coordinates are stored row-major: point `i` occupies
/// `coords()[i * n_dims()..(i + 1) * n_dims()]`.
pub trait PointSource {
    /// Number of points.
    fn n_points(&self) -> usize;

    /// Number of coordinates per point (2 or 3).
    fn n_dims(&self) -> usize;

    /// Flat row-major coordinate buffer.
    fn coords(&self) -> &[f64];

    /// Coordinates of a single point.
    ///
    /// Panics if `index >= n_points()`.
    fn point(&self, index: usize) -> &[f64] {
        let dims = self.n_dims();
        &self.coords()[index * dims..(index + 1) * dims]
    }

    /// Copies the points into a fresh [`PointCloud`].
    fn to_point_cloud(&self) -> PointCloud {
        PointCloud::new(self.n_dims(), self.coords().to_vec())
    }
}

/// An ordered set of 2D or 3D points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    dims: usize,
    coords: Vec<f64>,
}

impl PointCloud {
    /// Creates a point cloud from a flat row-major buffer.
    ///
    /// Panics if `dims` is not 2 or 3, or if the buffer length is not a
    /// multiple of `dims`.
    pub fn new(dims: usize, coords: Vec<f64>) -> Self {
        assert!(
            dims == 2 || dims == 3,
            "point cloud dimension must be 2 or 3, got {dims}"
        );
        assert_eq!(
            coords.len() % dims,
            0,
            "coordinate buffer of length {} is not a multiple of {dims}",
            coords.len()
        );
        Self { dims, coords }
    }

    /// Creates an empty point cloud.
    pub fn empty(dims: usize) -> Self {
        Self::new(dims, Vec::new())
    }

    /// Builds a point cloud from untrusted coordinate rows.
    ///
    /// Every row must have the same length, and that length must be 2 or 3.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let dims = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if dims != 2 && dims != 3 {
            return Err(Error::UnsupportedDimension(dims));
        }

        let mut coords = Vec::with_capacity(rows.len() * dims);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != dims {
                return Err(Error::RaggedPoints {
                    row,
                    expected: dims,
                    actual: r.len(),
                });
            }
            coords.extend_from_slice(r);
        }

        Ok(Self { dims, coords })
    }

    /// Creates a 2D point cloud.
    pub fn from_points2(points: &[Point2<f64>]) -> Self {
        let coords = points.iter().flat_map(|p| [p.x, p.y]).collect();
        Self { dims: 2, coords }
    }

    /// Creates a 3D point cloud.
    pub fn from_points3(points: &[Point3<f64>]) -> Self {
        let coords = points.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
        Self { dims: 3, coords }
    }

    /// Returns point `index` as a `Point2`, if the cloud is 2D.
    pub fn point2(&self, index: usize) -> Option<Point2<f64>> {
        if self.dims != 2 || index >= self.n_points() {
            return None;
        }
        let p = self.point(index);
        Some(Point2::new(p[0], p[1]))
    }

    /// Returns point `index` as a `Point3`, if the cloud is 3D.
    pub fn point3(&self, index: usize) -> Option<Point3<f64>> {
        if self.dims != 3 || index >= self.n_points() {
            return None;
        }
        let p = self.point(index);
        Some(Point3::new(p[0], p[1], p[2]))
    }

    /// Returns a new cloud made of the given points, in the given order.
    ///
    /// Indices may repeat and need not be sorted. Panics on an out-of-range
    /// index.
    pub fn select(&self, indices: &[usize]) -> PointCloud {
        let n = self.n_points();
        let mut coords = Vec::with_capacity(indices.len() * self.dims);
        for &i in indices {
            assert!(i < n, "point index {i} out of range for {n} points");
            coords.extend_from_slice(self.point(i));
        }
        Self {
            dims: self.dims,
            coords,
        }
    }

    /// Returns a new cloud made of a contiguous run of points.
    pub fn slice(&self, range: Range<usize>) -> PointCloud {
        let n = self.n_points();
        assert!(
            range.start <= range.end && range.end <= n,
            "point range {range:?} out of range for {n} points"
        );
        Self {
            dims: self.dims,
            coords: self.coords[range.start * self.dims..range.end * self.dims].to_vec(),
        }
    }

    /// Mean of all points, or `None` for an empty cloud.
    pub fn centroid(&self) -> Option<DVector<f64>> {
        let n = self.n_points();
        if n == 0 {
            return None;
        }
        let sum = self
            .rows()
            .fold(DVector::zeros(self.dims), |acc, p| acc + DVector::from_column_slice(p));
        Some(sum / n as f64)
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty cloud.
    pub fn bounds(&self) -> Option<(DVector<f64>, DVector<f64>)> {
        let mut rows = self.rows();
        let first = DVector::from_column_slice(rows.next()?);
        let mut min = first.clone();
        let mut max = first;
        for p in rows {
            for (d, &v) in p.iter().enumerate() {
                min[d] = min[d].min(v);
                max[d] = max[d].max(v);
            }
        }
        Some((min, max))
    }

    /// Iterates over the points as coordinate slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.coords.chunks_exact(self.dims)
    }

    /// Check if the cloud has no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl PointSource for PointCloud {
    fn n_points(&self) -> usize {
        self.coords.len() / self.dims
    }

    fn n_dims(&self) -> usize {
        self.dims
    }

    fn coords(&self) -> &[f64] {
        &self.coords
    }

    fn to_point_cloud(&self) -> PointCloud {
        self.clone()
    }
}
