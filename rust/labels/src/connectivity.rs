// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Chain connectivity for landmark regions.
//!
//! Landmark regions are drawn as piecewise-linear curves: open (helix
//! outlines, jaw lines) or closed (eye outlines). A region's connectivity is
//! therefore the chain linking each listed point to the next one, optionally
//! wrapping the last point back to the first.
//!
//! The builder only looks at the *order* of the indices it is given. Indices
//! need not be contiguous or sorted, and nothing is deduplicated.

/// Links consecutive indices into a chain of undirected edges.
///
/// For `[i0, i1, .., ik]` this yields `(i0, i1), (i1, i2), .., (ik-1, ik)`,
/// followed by `(ik, i0)` when `close_loop` is set. Fewer than two indices
/// yield no edges, whatever `close_loop` says.
pub fn connectivity_from_indices(indices: &[usize], close_loop: bool) -> Vec<(usize, usize)> {
    if indices.len() < 2 {
        return Vec::new();
    }

    let mut edges = Vec::with_capacity(indices.len());
    edges.extend(indices.windows(2).map(|w| (w[0], w[1])));
    if close_loop {
        edges.push((indices[indices.len() - 1], indices[0]));
    }
    edges
}

/// Chain over the half-open range `start..end`.
pub fn connectivity_from_range(start: usize, end: usize, close_loop: bool) -> Vec<(usize, usize)> {
    let indices: Vec<usize> = (start..end).collect();
    connectivity_from_indices(&indices, close_loop)
}

/// Concatenates several edge lists in order.
pub fn concat_connectivity<I>(parts: I) -> Vec<(usize, usize)>
where
    I: IntoIterator<Item = Vec<(usize, usize)>>,
{
    parts.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_chain() {
        let edges = connectivity_from_indices(&[0, 1, 2, 3], false);
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn closed_loop_wraps_to_first() {
        let edges = connectivity_from_indices(&[19, 20, 21], true);
        assert_eq!(edges, vec![(19, 20), (20, 21), (21, 19)]);
    }

    #[test]
    fn edge_counts_for_every_length() {
        for k in 0..12usize {
            let indices: Vec<usize> = (100..100 + k).collect();
            let open = connectivity_from_indices(&indices, false);
            let closed = connectivity_from_indices(&indices, true);
            let want_open = k.saturating_sub(1);
            let want_closed = if k < 2 { 0 } else { k };
            assert_eq!(open.len(), want_open, "open chain of {k}");
            assert_eq!(closed.len(), want_closed, "closed chain of {k}");
        }
    }

    #[test]
    fn single_and_empty_are_no_ops() {
        assert!(connectivity_from_indices(&[], false).is_empty());
        assert!(connectivity_from_indices(&[], true).is_empty());
        assert!(connectivity_from_indices(&[7], false).is_empty());
        assert!(connectivity_from_indices(&[7], true).is_empty());
    }

    #[test]
    fn two_point_loop_doubles_back() {
        // Closing a two-point chain adds the reverse edge, no dedup.
        let edges = connectivity_from_indices(&[34, 35], true);
        assert_eq!(edges, vec![(34, 35), (35, 34)]);
    }

    #[test]
    fn non_contiguous_order_is_kept() {
        let edges = connectivity_from_indices(&[0, 33, 1, 2], false);
        assert_eq!(edges, vec![(0, 33), (33, 1), (1, 2)]);
    }

    #[test]
    fn range_matches_explicit_list() {
        assert_eq!(
            connectivity_from_range(20, 35, false),
            connectivity_from_indices(&(20..35).collect::<Vec<_>>(), false)
        );
        assert!(connectivity_from_range(5, 5, true).is_empty());
    }

    #[test]
    fn concatenation_keeps_region_order() {
        let edges = concat_connectivity([
            connectivity_from_range(42, 46, false),
            connectivity_from_range(46, 50, false),
        ]);
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[2], (44, 45));
        assert_eq!(edges[3], (46, 47));
        // Chains are not linked to each other
        assert!(!edges.contains(&(45, 46)));
    }
}
