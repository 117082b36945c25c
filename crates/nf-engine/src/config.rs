//! Configuration for the question orchestrator.

/// Tunables of the orchestrator.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Generation attempts per question before settling for a repeat.
    pub max_attempts: usize,
    /// How many recent family keys selection avoids.
    pub recency_capacity: usize,
    /// Draws per selection before accepting a recently used family.
    pub reselect_attempts: usize,
    /// Creativity at or above which the weighted family table is used.
    pub creative_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts: 32,
            recency_capacity: 2,
            reselect_attempts: 6,
            creative_threshold: 0.5,
        }
    }
}

impl EngineConfig {
    /// Set the attempt budget (at least 1).
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the recency window capacity.
    pub fn with_recency_capacity(mut self, capacity: usize) -> Self {
        self.recency_capacity = capacity;
        self
    }

    /// Set the number of selection draws (at least 1).
    pub fn with_reselect_attempts(mut self, attempts: usize) -> Self {
        self.reselect_attempts = attempts.max(1);
        self
    }

    /// Set the creativity threshold for weighted selection.
    pub fn with_creative_threshold(mut self, threshold: f64) -> Self {
        self.creative_threshold = threshold;
        self
    }
}
