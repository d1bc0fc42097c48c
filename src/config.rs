//! History configuration.

/// Default maximum number of undo groups to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Configuration for an [`EditHistory`](crate::EditHistory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of groups to retain. Oldest groups are evicted when exceeded.
    pub max_depth: usize,
    /// Merge consecutive compatible edits into one group. When off, every
    /// edit is its own undo step.
    pub merge_edits: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_HISTORY_DEPTH,
            merge_edits: true,
        }
    }
}

impl HistoryConfig {
    /// Create a configuration with a custom depth limit.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// No depth limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(usize::MAX)
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_merge_edits(mut self, merge_edits: bool) -> Self {
        self.merge_edits = merge_edits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_depth, 1000);
        assert!(config.merge_edits);
    }

    #[test]
    fn test_builders() {
        let config = HistoryConfig::new(5).with_merge_edits(false);
        assert_eq!(config.max_depth, 5);
        assert!(!config.merge_edits);
        assert_eq!(HistoryConfig::unlimited().max_depth, usize::MAX);
        assert_eq!(HistoryConfig::default().with_max_depth(3).max_depth, 3);
    }
}
