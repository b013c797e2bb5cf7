//! Path finder configuration

use pathfinder_graph::{EarlyExit, EdgeMode};

/// Knobs for loading and searching a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinderConfig {
    /// How edge-list lines become adjacency
    pub edge_mode: EdgeMode,
    /// BFS stop rule
    pub early_exit: EarlyExit,
}

impl FinderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> Self {
        self.edge_mode = edge_mode;
        self
    }

    pub fn with_early_exit(mut self, early_exit: EarlyExit) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Configuration that reproduces the legacy path finder's search
    pub fn legacy() -> Self {
        Self::default().with_early_exit(EarlyExit::Source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.edge_mode, EdgeMode::Directed);
        assert_eq!(config.early_exit, EarlyExit::Target);
    }

    #[test]
    fn test_builders() {
        let config = FinderConfig::new()
            .with_edge_mode(EdgeMode::Undirected)
            .with_early_exit(EarlyExit::Never);
        assert_eq!(config.edge_mode, EdgeMode::Undirected);
        assert_eq!(config.early_exit, EarlyExit::Never);

        assert_eq!(FinderConfig::legacy().early_exit, EarlyExit::Source);
    }
}
