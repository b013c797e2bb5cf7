//! Bidirectional name <-> vertex mapping

use crate::error::{FinderError, FinderResult};
use pathfinder_graph::{AdjacencyGraph, VertexId};
use std::collections::HashMap;

/// Bijection between node names and vertex ids.
///
/// `names[v]` is the name of vertex `v`, and `index` is its inverse. Both are
/// only ever extended together by [`NameRegistry::register`].
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a vertex in `graph` and bind `name` to it
    pub fn register(
        &mut self,
        graph: &mut AdjacencyGraph,
        name: impl Into<String>,
    ) -> FinderResult<VertexId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(FinderError::DuplicateNode(name));
        }
        if graph.vertex_count() != self.names.len() {
            return Err(FinderError::RegistryOutOfSync {
                vertices: graph.vertex_count(),
                names: self.names.len(),
            });
        }

        let vertex = graph.add_vertex();
        self.index.insert(name.clone(), vertex);
        self.names.push(name);
        Ok(vertex)
    }

    pub fn vertex_of(&self, name: &str) -> FinderResult<VertexId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| FinderError::UnknownNode(name.to_string()))
    }

    pub fn name_of(&self, vertex: VertexId) -> FinderResult<&str> {
        self.names
            .get(vertex)
            .map(String::as_str)
            .ok_or(FinderError::UnknownVertex(vertex))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names in vertex-id order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
