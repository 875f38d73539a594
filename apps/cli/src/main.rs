// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: inspect the landmark converter catalog and label point sets.
//!
//! Usage:
//!   landmark-labels groups
//!   landmark-labels apply <group> [points.json]
//!
//! Points are read as a JSON array of `[x, y]` or `[x, y, z]` rows, from the
//! given file or from stdin.

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};

use anyhow::{bail, Context, Result};
use landmark_lite_labels::{Catalog, LabelledShape, Labelling};
use landmark_lite_shape::{PointCloud, PointSource};

mod config;

use config::{Config, LogFormat};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("groups") => print_groups(),
        Some("apply") => {
            let group = args.get(2).context("missing <group> argument")?;
            let points = read_points(args.get(3).map(String::as_str))?;
            apply(group, &points)
        }
        Some("--help") | Some("-h") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("unknown command '{other}'")
        }
    }
}

fn init_logging(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_writer(io::stderr);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  landmark-labels groups");
    println!("  landmark-labels apply <group> [points.json]");
    println!();
    println!("Environment:");
    println!("  RUST_LOG    log filter (default: info,landmark_lite_labels=debug)");
    println!("  LOG_FORMAT  pretty | json (default: pretty)");
}

fn print_groups() -> Result<()> {
    let catalog = Catalog::builtin();
    for group in catalog.groups() {
        println!("{group}");
        for converter in catalog.candidates(group) {
            println!("  {} ({} points)", converter.name, converter.source_points);
        }
    }
    Ok(())
}

fn read_points(path: Option<&str>) -> Result<PointCloud> {
    let reader: Box<dyn Read> = match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let rows: Vec<Vec<f64>> =
        serde_json::from_reader(reader).context("points must be a JSON array of coordinate rows")?;
    let points = PointCloud::from_rows(&rows)?;
    tracing::info!(
        n_points = points.n_points(),
        n_dims = points.n_dims(),
        "Loaded point set"
    );
    Ok(points)
}

fn apply(group: &str, points: &PointCloud) -> Result<()> {
    let catalog = Catalog::builtin();
    if let Some(converter) = catalog.select(group, points.n_points()) {
        tracing::info!(converter = converter.name, "Selected converter");
    }
    let labelling = catalog
        .apply(group, points)
        .with_context(|| format!("failed to apply '{group}' labels"))?;
    print_summary(&labelling);
    Ok(())
}

fn print_summary(labelling: &Labelling) {
    match &labelling.shape {
        LabelledShape::Graph(graph) => {
            println!("graph: {} points, {} edges", graph.n_points(), graph.n_edges());
        }
        LabelledShape::Split(graphs) => {
            for (i, graph) in graphs.iter().enumerate() {
                println!(
                    "graph {i}: {} points, {} edges",
                    graph.n_points(),
                    graph.n_edges()
                );
            }
        }
        LabelledShape::Mesh(mesh) => {
            println!("mesh: {} points, {} triangles", mesh.n_points(), mesh.n_tris());
        }
    }

    let graph = labelling.shape.graphs().into_iter().next();
    for (name, indices) in labelling.mapping.iter() {
        match graph.and_then(|g| g.region_edges(name)) {
            Some(edges) => println!("  {name}: {} points, {} edges", indices.len(), edges.len()),
            None => println!("  {name}: {} points", indices.len()),
        }
    }
}
