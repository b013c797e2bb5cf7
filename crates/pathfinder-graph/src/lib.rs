//! Graph primitives for pathfinder
//!
//! A dense adjacency-list graph plus breadth-first shortest paths.

pub mod common;
pub mod pathfinding;

pub use common::{AdjacencyGraph, EdgeMode, GraphError, GraphResult, VertexId};
pub use pathfinding::{bfs, EarlyExit, PathResult};
