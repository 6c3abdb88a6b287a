use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which part of the input a line was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    VertexCount,
    EdgeCount,
    Edge,
    StartVertex,
}

impl Field {
    /// Number of integer tokens a line holding this field must contain.
    pub fn token_count(self) -> usize {
        match self {
            Field::Edge => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::VertexCount => "number of vertices",
            Field::EdgeCount => "number of edges",
            Field::Edge => "edge vertex pair",
            Field::StartVertex => "starting vertex",
        };
        f.write_str(name)
    }
}

/// Why a road map could not be loaded. Loading stops at the first of these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open input file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input")]
    Read(#[from] io::Error),
    #[error("line {line}: missing line for the {field}")]
    MissingLine { line: usize, field: Field },
    #[error("line {line}: expected {} integer(s) for the {field}, found {text:?}", .field.token_count())]
    Malformed {
        line: usize,
        field: Field,
        text: String,
    },
    #[error("invalid number of vertices: {0} (must be greater than 0)")]
    InvalidVertexCount(i64),
    #[error("invalid number of edges: {0} (must not be negative)")]
    InvalidEdgeCount(i64),
    #[error("line {line}: vertex number {vertex} is out of valid range 0..{vertex_count}")]
    VertexOutOfRange {
        line: usize,
        vertex: i64,
        vertex_count: usize,
    },
    #[error("starting vertex {start} is greater than the number of edges {edge_count}")]
    StartExceedsEdgeCount { start: i64, edge_count: usize },
    #[error("starting vertex {start} is out of valid range 0..{vertex_count}")]
    StartOutOfRange { start: i64, vertex_count: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_value_and_bound() {
        let err = LoadError::VertexOutOfRange { line: 3, vertex: 5, vertex_count: 3 };
        assert_eq!(err.to_string(), "line 3: vertex number 5 is out of valid range 0..3");

        let err = LoadError::Malformed { line: 2, field: Field::Edge, text: "1".into() };
        assert_eq!(
            err.to_string(),
            "line 2: expected 2 integer(s) for the edge vertex pair, found \"1\""
        );
    }

    #[test]
    fn test_missing_line_message() {
        let err = LoadError::MissingLine { line: 5, field: Field::StartVertex };
        assert_eq!(err.to_string(), "line 5: missing line for the starting vertex");
    }
}
