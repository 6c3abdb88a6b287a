use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::graph_analysis::BfsResult;
use crate::road_map::RoadMap;

/// One row of the CSV distance export.
#[derive(Debug, Serialize)]
struct DistanceRecord {
    vertex: usize,
    distance: Option<usize>, // empty when unreachable
    parent: Option<usize>,
}

/// Echoes the loaded graph.
pub fn write_road_map<W: Write>(out: &mut W, road_map: &RoadMap) -> io::Result<()> {
    writeln!(out, "Number of vertices: {}", road_map.vertex_count())?;
    writeln!(out, "Number of edges: {}", road_map.edge_count())?;
    writeln!(out, "Edge list:")?;
    for (a, b) in road_map.edges() {
        writeln!(out, "{a} {b}")?;
    }
    writeln!(out, "Starting vertex: {}", road_map.start())
}

// same format for the console and output.txt
pub fn write_distances<W: Write>(out: &mut W, result: &BfsResult) -> io::Result<()> {
    for (vertex, distance) in result.distance.iter().enumerate() {
        match distance {
            Some(d) => writeln!(out, "Vertex {vertex}: {d}")?,
            None => writeln!(out, "Vertex {vertex}: unreachable")?,
        }
    }
    Ok(())
}

pub fn write_path<W: Write>(out: &mut W, result: &BfsResult, destination: i64) -> io::Result<()> {
    let path = usize::try_from(destination)
        .ok()
        .and_then(|d| result.path_to(d)); // None when negative, out of range or unreached

    match path {
        Some(path) => {
            writeln!(
                out,
                "Shortest path from vertex {} to vertex {destination}:",
                result.start
            )?;
            let vertices: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            writeln!(out, "{}", vertices.join(" "))
        }
        None => writeln!(
            out,
            "Vertex {destination} is unreachable from vertex {}.",
            result.start
        ),
    }
}

/// Writes the distance report to `path`, replacing any existing file.
pub fn save_distances(path: &Path, result: &BfsResult) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_distances(&mut out, result)?;
    out.flush()
}

/// Writes `vertex,distance,parent` rows to `path`.
pub fn save_distances_csv(path: &Path, result: &BfsResult) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for (vertex, (&distance, &parent)) in result.distance.iter().zip(&result.parent).enumerate() {
        writer.serialize(DistanceRecord {
            vertex,
            distance,
            parent,
        })?;
    }
    writer.flush()?;
    Ok(())
}
