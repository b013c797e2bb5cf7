//! Pathfinding algorithms
//!
//! Unweighted shortest paths by breadth-first search.

use super::common::{AdjacencyGraph, GraphResult, VertexId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::debug;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: VertexId,
    pub target: VertexId,
    /// Vertices from `source` to `target`, both inclusive
    pub path: Vec<VertexId>,
    /// Number of edges on the path
    pub hops: usize,
}

/// When a BFS run stops before the frontier is exhausted.
///
/// The check happens while scanning the neighbors of the dequeued vertex;
/// the scan of that vertex always runs to completion before the search stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EarlyExit {
    /// Stop once the target has been seen as a neighbor
    #[default]
    Target,
    /// Stop once the source has been seen as a neighbor.
    ///
    /// Reproduces the legacy path finder, which compared neighbors against
    /// the start node. On graphs where the source is reachable from its own
    /// frontier this truncates the search, so paths may be reported missing.
    Source,
    /// Only stop when the frontier is exhausted
    Never,
}

impl EarlyExit {
    fn stop_vertex(self, source: VertexId, target: VertexId) -> Option<VertexId> {
        match self {
            EarlyExit::Target => Some(target),
            EarlyExit::Source => Some(source),
            EarlyExit::Never => None,
        }
    }
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Vertices are marked visited when enqueued, and each newly discovered
/// vertex records the dequeued vertex as its predecessor. Returns `Ok(None)`
/// when the target was never discovered.
pub fn bfs(
    graph: &AdjacencyGraph,
    source: VertexId,
    target: VertexId,
    early_exit: EarlyExit,
) -> GraphResult<Option<PathResult>> {
    // Validate both endpoints before doing any work
    graph.neighbors(source)?;
    graph.neighbors(target)?;

    if source == target {
        return Ok(Some(PathResult {
            source,
            target,
            path: vec![source],
            hops: 0,
        }));
    }

    let stop_at = early_exit.stop_vertex(source, target);

    let mut queue = VecDeque::new();
    let mut visited = FxHashSet::default();
    let mut predecessor: FxHashMap<VertexId, VertexId> = FxHashMap::default();

    visited.insert(source);
    queue.push_back(source);

    let mut done = false;
    while let Some(front) = queue.pop_front() {
        for &next in graph.neighbors(front)? {
            if visited.insert(next) {
                predecessor.insert(next, front);
                queue.push_back(next);
            }
            if Some(next) == stop_at {
                done = true;
            }
        }
        if done {
            break;
        }
    }

    debug!(
        source,
        target,
        visited = visited.len(),
        stopped_early = done,
        "bfs finished"
    );

    if !predecessor.contains_key(&target) {
        return Ok(None);
    }

    let mut path = vec![target];
    let mut curr = target;
    while let Some(&prev) = predecessor.get(&curr) {
        path.push(prev);
        curr = prev;
    }
    path.reverse();

    Ok(Some(PathResult {
        source,
        target,
        hops: path.len() - 1,
        path,
    }))
}
