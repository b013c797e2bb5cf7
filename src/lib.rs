//! Pathfinder
//!
//! Loads a graph of named nodes from a vertex list and an edge list and
//! answers unweighted shortest-path queries by breadth-first search, either
//! directly or forced through an intermediate node.
//!
//! # Architecture
//!
//! - `pathfinder-graph`: dense adjacency-list graph and the id-level BFS
//! - [`registry`]: bijection between node names and vertex ids
//! - [`loader`]: line-oriented, percent-encoded vertex/edge files
//! - [`finder`]: name-level query API ([`PathFinder`])
//!
//! ## Example Usage
//!
//! ```rust
//! use pathfinder::{FinderConfig, PathFinder};
//!
//! let finder = PathFinder::from_edges(
//!     FinderConfig::default(),
//!     ["A", "B", "C", "D"],
//!     [("A", "B"), ("B", "C"), ("C", "D")],
//! ).unwrap();
//!
//! assert_eq!(finder.shortest_path("A", "D").unwrap(), vec!["A", "B", "C", "D"]);
//! assert_eq!(finder.shortest_path_length("A", "D").unwrap(), 3);
//! assert_eq!(finder.shortest_path_length("D", "A").unwrap(), -1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod finder;
pub mod loader;
pub mod registry;

// Re-export main types for convenience
pub use config::FinderConfig;
pub use error::{FinderError, FinderResult};
pub use finder::{PathFinder, NO_PATH};
pub use registry::NameRegistry;

pub use pathfinder_graph::{EarlyExit, EdgeMode, VertexId};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
