//! Error types for pathfinder

use pathfinder_graph::{GraphError, VertexId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a graph or answering queries
#[derive(Error, Debug)]
pub enum FinderError {
    /// Vertex or edge file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure while reading an input file
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be decoded or split
    #[error("Malformed input at {}:{line}: {reason}", path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Name is not registered
    #[error("Unknown node: {0:?}")]
    UnknownNode(String),

    /// Vertex id has no registered name
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    /// Graph has vertices the registry never named (or vice versa)
    #[error("Registry out of sync: graph has {vertices} vertices but {names} names")]
    RegistryOutOfSync { vertices: usize, names: usize },

    /// Name registered twice in the vertex list
    #[error("Duplicate node: {0:?}")]
    DuplicateNode(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type FinderResult<T> = Result<T, FinderError>;
