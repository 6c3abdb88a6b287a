use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{Field, LoadError};

// upper bound on edges reserved up front, the declared count is untrusted
const EDGE_PREALLOC_LIMIT: usize = 1 << 16;

/// A validated graph description: vertex count, undirected edge list and the
/// vertex the search starts from.
///
/// Only the loader builds one, so every endpoint and the start vertex are
/// already known to lie in `0..vertex_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadMap {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    start: usize,
}

impl RoadMap {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn start(&self) -> usize {
        self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject a start vertex greater than the declared edge count. The old
    /// program enforced this in addition to the vertex range check.
    pub legacy_start_bound: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            legacy_start_bound: true,
        }
    }
}

/// Opens `path` and reads a road map from it.
pub fn load_road_map(path: &Path, options: LoadOptions) -> Result<RoadMap, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading road map");
    read_road_map(BufReader::new(file), options)
}

/// Reads vertex count, edge count, one `a b` line per edge and the start
/// vertex, failing on the first bad line.
pub fn read_road_map<R: BufRead>(reader: R, options: LoadOptions) -> Result<RoadMap, LoadError> {
    let mut lines = NumberedLines::new(reader.lines());

    let raw_vertices = lines.next_value(Field::VertexCount)?;
    let vertex_count = usize::try_from(raw_vertices)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(LoadError::InvalidVertexCount(raw_vertices))?;

    let raw_edges = lines.next_value(Field::EdgeCount)?;
    let edge_count =
        usize::try_from(raw_edges).map_err(|_| LoadError::InvalidEdgeCount(raw_edges))?;
    debug!(vertex_count, edge_count, "parsed road map header");

    let mut edges = Vec::with_capacity(edge_count.min(EDGE_PREALLOC_LIMIT));
    for _ in 0..edge_count {
        let (a, b) = lines.next_pair()?;
        let a = lines.vertex_index(a, vertex_count)?; // a is checked before b
        let b = lines.vertex_index(b, vertex_count)?;
        edges.push((a, b));
    }

    let raw_start = lines.next_value(Field::StartVertex)?; // later lines are ignored
    if options.legacy_start_bound && raw_start > raw_edges {
        warn!(
            start = raw_start,
            edge_count,
            "start vertex rejected by the edge-count bound; pass --lenient-start to skip this check"
        );
        return Err(LoadError::StartExceedsEdgeCount {
            start: raw_start,
            edge_count,
        });
    }
    let start = usize::try_from(raw_start)
        .ok()
        .filter(|&s| s < vertex_count)
        .ok_or(LoadError::StartOutOfRange {
            start: raw_start,
            vertex_count,
        })?;

    Ok(RoadMap {
        vertex_count,
        edges,
        start,
    })
}

/// Parses `text` as a road map.
#[cfg(test)]
pub fn parse_road_map(text: &str, options: LoadOptions) -> Result<RoadMap, LoadError> {
    read_road_map(text.as_bytes(), options)
}

// remembers the 1-based number of the last line handed out
struct NumberedLines<I> {
    lines: I,
    line: usize,
}

impl<I> NumberedLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn new(lines: I) -> Self {
        Self { lines, line: 0 }
    }

    fn next_values(&mut self, field: Field) -> Result<Vec<i64>, LoadError> {
        self.line += 1;
        let text = match self.lines.next() {
            Some(text) => text?,
            None => {
                return Err(LoadError::MissingLine {
                    line: self.line,
                    field,
                })
            }
        };

        let values: Result<Vec<i64>, _> = text.split_whitespace().map(str::parse).collect();
        match values {
            Ok(values) if values.len() == field.token_count() => Ok(values),
            _ => Err(LoadError::Malformed {
                line: self.line,
                field,
                text: text.trim().to_string(),
            }),
        }
    }

    fn next_value(&mut self, field: Field) -> Result<i64, LoadError> {
        Ok(self.next_values(field)?[0])
    }

    fn next_pair(&mut self) -> Result<(i64, i64), LoadError> {
        let values = self.next_values(Field::Edge)?;
        Ok((values[0], values[1]))
    }

    fn vertex_index(&self, vertex: i64, vertex_count: usize) -> Result<usize, LoadError> {
        usize::try_from(vertex)
            .ok()
            .filter(|&v| v < vertex_count)
            .ok_or(LoadError::VertexOutOfRange {
                line: self.line,
                vertex,
                vertex_count,
            })
    }
}
