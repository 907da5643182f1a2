//! Configuration for scoring runs.

use std::time::Duration;

use crate::github::SnapshotLimits;

/// Configuration for scoring runs.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Concurrent in-flight API requests (shared across all runs)
    pub max_in_flight: usize,
    /// Minimum spacing between API request dispatches
    pub min_spacing: Duration,
    /// Pagination and history-window bounds for snapshot collection
    pub limits: SnapshotLimits,
    /// Override of the API base URI (GitHub Enterprise, tests)
    pub api_base: Option<String>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 3,
            min_spacing: Duration::from_millis(100),
            limits: SnapshotLimits::default(),
            api_base: None,
        }
    }
}
