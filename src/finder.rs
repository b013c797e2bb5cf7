//! Name-level shortest path queries
//!
//! [`PathFinder`] owns a loaded graph and its name registry and answers
//! queries in terms of node names. It is immutable once built.

use crate::config::FinderConfig;
use crate::error::FinderResult;
use crate::loader;
use crate::registry::NameRegistry;
use pathfinder_graph::{bfs, AdjacencyGraph};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Length reported by [`PathFinder::shortest_path_length`] when no path exists
pub const NO_PATH: i64 = -1;

/// Shortest path queries over a named graph
#[derive(Debug, Clone)]
pub struct PathFinder {
    config: FinderConfig,
    graph: AdjacencyGraph,
    registry: NameRegistry,
}

impl PathFinder {
    /// Load a vertex list and an edge list with the default configuration
    pub fn load(vertex_file: impl AsRef<Path>, edge_file: impl AsRef<Path>) -> FinderResult<Self> {
        Self::load_with_config(vertex_file, edge_file, FinderConfig::default())
    }

    /// Load a vertex list and an edge list.
    ///
    /// On failure nothing is returned; a half-built graph never escapes.
    pub fn load_with_config(
        vertex_file: impl AsRef<Path>,
        edge_file: impl AsRef<Path>,
        config: FinderConfig,
    ) -> FinderResult<Self> {
        let vertex_file = vertex_file.as_ref();
        let edge_file = edge_file.as_ref();

        let mut graph = AdjacencyGraph::with_mode(config.edge_mode);
        let mut registry = NameRegistry::new();
        let (vertices, edges) =
            loader::load_files(vertex_file, edge_file, &mut graph, &mut registry)?;

        info!(
            "Loaded {} vertices from {:?} and {} edges from {:?}",
            vertices, vertex_file, edges, edge_file
        );

        Ok(PathFinder {
            config,
            graph,
            registry,
        })
    }

    /// Build from in-memory names and name pairs (already decoded)
    pub fn from_edges<N, E, S>(config: FinderConfig, nodes: N, edges: E) -> FinderResult<Self>
    where
        N: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = AdjacencyGraph::with_mode(config.edge_mode);
        let mut registry = NameRegistry::new();

        for name in nodes {
            registry.register(&mut graph, name.as_ref())?;
        }
        for (a, b) in edges {
            let a = registry.vertex_of(a.as_ref())?;
            let b = registry.vertex_of(b.as_ref())?;
            graph.add_edge(a, b)?;
        }

        Ok(PathFinder {
            config,
            graph,
            registry,
        })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Node names in load order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    /// Names of the nodes directly reachable from `name`
    pub fn neighbors(&self, name: &str) -> FinderResult<Vec<&str>> {
        let vertex = self.registry.vertex_of(name)?;
        self.graph
            .neighbors(vertex)?
            .iter()
            .map(|&v| self.registry.name_of(v))
            .collect()
    }

    /// Pick a node uniformly at random; `None` on an empty graph
    pub fn random_node<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.registry.names().choose(rng)
    }

    /// Shortest path from `from` to `to`, both inclusive.
    ///
    /// Identical names short-circuit to `[from]` without a registry lookup.
    /// An empty vector means `to` is unreachable.
    pub fn shortest_path(&self, from: &str, to: &str) -> FinderResult<Vec<String>> {
        if from == to {
            return Ok(vec![from.to_string()]);
        }

        let source = self.registry.vertex_of(from)?;
        let target = self.registry.vertex_of(to)?;

        match bfs(&self.graph, source, target, self.config.early_exit)? {
            Some(result) => result
                .path
                .into_iter()
                .map(|v| self.registry.name_of(v).map(str::to_string))
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    /// Number of edges on the shortest path; `0` for identical names and
    /// [`NO_PATH`] when unreachable
    pub fn shortest_path_length(&self, from: &str, to: &str) -> FinderResult<i64> {
        if from == to {
            return Ok(0);
        }
        let path = self.shortest_path(from, to)?;
        if path.is_empty() {
            Ok(NO_PATH)
        } else {
            Ok(path.len() as i64 - 1)
        }
    }

    /// Shortest path from `from` to `to` forced through `via`.
    ///
    /// Joins the two legs at `via`; empty if either leg is.
    pub fn shortest_path_via(&self, from: &str, via: &str, to: &str) -> FinderResult<Vec<String>> {
        let first = self.shortest_path(from, via)?;
        let second = self.shortest_path(via, to)?;

        if first.is_empty() || second.is_empty() {
            return Ok(Vec::new());
        }

        let mut path = first;
        path.extend(second.into_iter().skip(1));
        Ok(path)
    }
}
