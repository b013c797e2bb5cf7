//! Shared graph types
//!
//! Provides the integer-indexed adjacency-list graph that the search
//! algorithms run over.

use thiserror::Error;

/// Vertex identifier. Dense, assigned sequentially from 0.
pub type VertexId = usize;

/// Errors raised by graph store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {vertex} out of range (vertex count {count})")]
    VertexOutOfRange { vertex: VertexId, count: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// How `add_edge` records adjacency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EdgeMode {
    /// Edges are recorded exactly as listed (`a -> b` only)
    #[default]
    Directed,
    /// Every edge is also recorded in the reverse direction
    Undirected,
}

/// Adjacency-list graph over dense vertex ids.
///
/// Neighbors are kept in insertion order, so enumeration is deterministic.
/// Parallel edges are stored as given; there is no deduplication.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    mode: EdgeMode,
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Create an empty directed graph
    pub fn new() -> Self {
        Self::with_mode(EdgeMode::Directed)
    }

    pub fn with_mode(mode: EdgeMode) -> Self {
        AdjacencyGraph {
            mode,
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Allocate a new vertex and return its id
    pub fn add_vertex(&mut self) -> VertexId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Record an edge between `a` and `b`
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<()> {
        self.check(a)?;
        self.check(b)?;

        self.adjacency[a].push(b);
        if self.mode == EdgeMode::Undirected {
            self.adjacency[b].push(a);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Vertices directly reachable from `v`
    pub fn neighbors(&self, v: VertexId) -> GraphResult<&[VertexId]> {
        self.check(v)?;
        Ok(&self.adjacency[v])
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.adjacency.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of `add_edge` calls that succeeded
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn check(&self, v: VertexId) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                count: self.adjacency.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_ids_are_dense() {
        let mut graph = AdjacencyGraph::new();
        assert_eq!(graph.add_vertex(), 0);
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_directed_edges() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        graph.add_edge(a, b).unwrap();

        assert_eq!(graph.neighbors(a).unwrap(), &[b]);
        assert!(graph.neighbors(b).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_undirected_edges() {
        let mut graph = AdjacencyGraph::with_mode(EdgeMode::Undirected);
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        graph.add_edge(a, b).unwrap();

        assert_eq!(graph.neighbors(a).unwrap(), &[b]);
        assert_eq!(graph.neighbors(b).unwrap(), &[a]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_kept_in_order() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let c = graph.add_vertex();
        graph.add_edge(a, c).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, c).unwrap();

        assert_eq!(graph.neighbors(a).unwrap(), &[c, b, c]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_edge_validation() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_vertex();

        let result = graph.add_edge(a, 7);
        assert_eq!(result, Err(GraphError::VertexOutOfRange { vertex: 7, count: 1 }));

        let result = graph.add_edge(3, a);
        assert_eq!(result, Err(GraphError::VertexOutOfRange { vertex: 3, count: 1 }));

        // Failed inserts leave the graph untouched
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(a).unwrap().is_empty());
        assert!(graph.neighbors(1).is_err());
    }
}
