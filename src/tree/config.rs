//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend at most this many levels; entries at depth >= max are not produced.
    pub max_depth: Option<usize>,
    /// Sort each directory's children by name instead of using enumeration order.
    pub sort_entries: bool,
}

impl WalkerConfig {
    /// Check whether entries at `depth` fall outside the depth limit.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
