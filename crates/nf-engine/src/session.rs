//! Per-session generation state.
//!
//! A [`Session`] owns the recency window used by family selection, the set
//! of signatures already handed out, and counters describing how generation
//! went. Hosts serving several users keep one session per user.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

/// Default number of recent families selection avoids.
pub const DEFAULT_RECENCY_CAPACITY: usize = 2;

/// The most recently chosen family keys, oldest first.
#[derive(Debug, Clone)]
pub struct RecencyWindow {
    keys: VecDeque<String>,
    capacity: usize,
}

impl RecencyWindow {
    /// An empty window holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a chosen key, evicting the oldest beyond capacity.
    pub fn push(&mut self, key: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        self.keys.push_back(key.into());
        while self.keys.len() > self.capacity {
            self.keys.pop_front();
        }
    }

    /// Whether `key` is in the window.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Keys in the window, oldest first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of keys in the window.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Questions returned to the caller.
    pub questions: u64,
    /// Generator invocations across all questions.
    pub attempts: u64,
    /// Questions returned after the attempt budget ran out without a fresh,
    /// valid candidate.
    pub exhausted: u64,
    /// Times the placeholder stood in for a family.
    pub placeholders: u64,
}

/// Recency, dedup, and statistics for one stream of questions.
#[derive(Debug, Clone)]
pub struct Session {
    recent: RecencyWindow,
    seen: HashSet<String>,
    stats: SessionStats,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session with the default recency capacity.
    pub fn new() -> Self {
        Self::with_recency_capacity(DEFAULT_RECENCY_CAPACITY)
    }

    /// A fresh session remembering `capacity` recent families.
    pub fn with_recency_capacity(capacity: usize) -> Self {
        Self {
            recent: RecencyWindow::new(capacity),
            seen: HashSet::new(),
            stats: SessionStats::default(),
        }
    }

    /// The recency window.
    pub fn recent(&self) -> &RecencyWindow {
        &self.recent
    }

    /// Mutable access to the recency window.
    pub fn recent_mut(&mut self) -> &mut RecencyWindow {
        &mut self.recent
    }

    /// Whether a signature has already been handed out.
    pub fn has_seen(&self, signature: &str) -> bool {
        self.seen.contains(signature)
    }

    /// Record a signature. Returns false if it was already present.
    pub fn record(&mut self, signature: String) -> bool {
        self.seen.insert(signature)
    }

    /// Number of distinct signatures recorded.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// The session counters.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SessionStats {
        &mut self.stats
    }
}
