// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use landmark_lite_labels::{
    ears_ibug_110_to_ears_ibug_55, ears_ibug_55_to_ears_ibug_14, skull_gosh_50_to_skull_gosh_50,
    LabelledShape,
};
use landmark_lite_shape::{PointCloud, PointSource};
use nalgebra::Point3;

/// Points whose x coordinate equals their input index.
fn indexed_cloud(n: usize) -> PointCloud {
    let points: Vec<Point3<f64>> = (0..n)
        .map(|i| Point3::new(i as f64, (i * 2) as f64, 0.5))
        .collect();
    PointCloud::from_points3(&points)
}

fn region_edge_count(graph: &landmark_lite_shape::LabelledPointGraph, name: &str) -> usize {
    graph.region_edges(name).expect("region exists").len()
}

#[test]
fn bilateral_ear_splits_into_two_55_point_ears() {
    let result = ears_ibug_110_to_ears_ibug_55(&indexed_cloud(110)).unwrap();

    let graphs = match &result.shape {
        LabelledShape::Split(graphs) => graphs,
        other => panic!("expected split result, got {other:?}"),
    };
    assert_eq!(graphs.len(), 2);

    let expected = [
        ("outer_helix", 20, 19),
        ("inner_helix", 15, 14),
        ("tragus_concha_inf_crus", 15, 14),
        ("sup_crus", 5, 4),
    ];

    assert_eq!(
        result.mapping.names().collect::<Vec<_>>(),
        expected.iter().map(|(n, _, _)| *n).collect::<Vec<_>>()
    );

    for (side, graph) in graphs.iter().enumerate() {
        assert_eq!(graph.n_points(), 55);
        assert_eq!(graph.n_labels(), 4);
        for (name, size, edges) in expected {
            assert_eq!(graph.indices(name).unwrap().len(), size, "{name} size");
            assert_eq!(region_edge_count(graph, name), edges, "{name} edges");
        }
        assert_eq!(graph.n_edges(), 19 + 14 + 14 + 4);
        // Left ear starts at input point 0, right ear at input point 55
        assert_eq!(graph.point(0)[0], (side * 55) as f64);
        assert_eq!(graph.point(54)[0], (side * 55 + 54) as f64);
    }
}

#[test]
fn single_ear_downsamples_to_14_points() {
    let result = ears_ibug_55_to_ears_ibug_14(&indexed_cloud(55)).unwrap();
    let graph = result.shape.as_graph().unwrap();

    let picked: Vec<usize> = graph.points().rows().map(|p| p[0] as usize).collect();
    assert_eq!(
        picked,
        vec![0, 3, 7, 11, 16, 19, 20, 25, 31, 34, 35, 39, 44, 49]
    );

    let sizes: Vec<usize> = result.mapping.iter().map(|(_, idx)| idx.len()).collect();
    assert_eq!(sizes, vec![6, 4, 4]);

    let edges: Vec<usize> = result
        .mapping
        .names()
        .map(|name| region_edge_count(graph, name))
        .collect();
    assert_eq!(edges, vec![5, 3, 3]);
    assert_eq!(graph.n_edges(), 11);
}

#[test]
fn skull_eye_is_a_closed_loop() {
    let result = skull_gosh_50_to_skull_gosh_50(&indexed_cloud(50)).unwrap();
    let graph = result.shape.as_graph().unwrap();

    let eye = result.mapping.get("left_eye").unwrap();
    assert_eq!(eye, &[19, 20, 21]);

    let eye_edges = graph.region_edges("left_eye").unwrap();
    assert_eq!(eye_edges, vec![(19, 20), (20, 21), (21, 19)]);

    let right = graph.region_edges("right_eye").unwrap();
    assert_eq!(right.len(), 3);
    assert_eq!(right[2], (24, 22));

    // Every eye point has degree 2; the midline ends have degree 1
    for &p in eye {
        assert_eq!(graph.degree(p), 2);
    }
    assert_eq!(graph.degree(0), 1);
    assert_eq!(graph.degree(10), 1);
}

#[test]
fn input_cloud_is_not_modified() {
    let input = indexed_cloud(55);
    let before = input.clone();
    let _ = ears_ibug_55_to_ears_ibug_14(&input).unwrap();
    assert_eq!(input, before);
}

#[test]
fn labelled_graph_can_be_relabelled() {
    // A labelled result is itself a point source
    let first = ears_ibug_110_to_ears_ibug_55(&indexed_cloud(110)).unwrap();
    let left = first.shape.graphs()[0].clone();
    let coarse = ears_ibug_55_to_ears_ibug_14(&left).unwrap();
    assert_eq!(coarse.shape.as_graph().unwrap().n_points(), 14);
}
