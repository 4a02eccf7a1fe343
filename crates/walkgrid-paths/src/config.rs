//! Search tuning.

/// Default number of explored nodes, nearest to the target first, that are
/// considered as a substitute destination when the target is unreachable.
pub const DEFAULT_FALLBACK_CANDIDATES: usize = 10;

/// Default cap on node expansions per search attempt.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// [`PathSearch`](crate::PathSearch) settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// How many of the explored nodes closest to an unreachable target are
    /// weighed when choosing a substitute destination.
    pub fallback_candidates: usize,
    /// Whether an unreachable target degrades to the closest reachable node.
    /// When `false`, an unreachable target is a
    /// [`NoPathAvailable`](crate::SearchError::NoPathAvailable) error.
    pub allow_fallback: bool,
    /// Maximum node expansions per attempt before giving up with
    /// [`IterationLimit`](crate::SearchError::IterationLimit).
    pub max_expansions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fallback_candidates: DEFAULT_FALLBACK_CANDIDATES,
            allow_fallback: true,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl SearchConfig {
    pub fn with_fallback_candidates(mut self, n: usize) -> Self {
        self.fallback_candidates = n;
        self
    }

    pub fn with_fallback(mut self, allow: bool) -> Self {
        self.allow_fallback = allow;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = limit;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"allow_fallback": false}"#).unwrap();
        assert!(!config.allow_fallback);
        assert_eq!(config.fallback_candidates, DEFAULT_FALLBACK_CANDIDATES);
        assert_eq!(config.max_expansions, DEFAULT_MAX_EXPANSIONS);
    }
}
