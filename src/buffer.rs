//! Token buffer: accumulates streamed text fragments and releases
//! flushable chunks.
//!
//! The buffer holds at most one pending chunk at a time and pushes never
//! overwrite unflushed content, so the concatenation of all drained chunks
//! always equals the concatenation of all pushed fragments.

#[derive(Default)]
pub struct TokenBuffer {
    /// Number of fragments to accumulate before a flush is due.
    /// 0 (or 1) means flush after every fragment for minimum latency.
    threshold: usize,
    pending: String,
    fragment_count: usize,
}

impl TokenBuffer {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Append a fragment and report whether the flush threshold is now met.
    /// Empty fragments are accepted as no-ops and don't count towards the
    /// threshold.
    pub fn push(&mut self, fragment: &str) -> bool {
        if !fragment.is_empty() {
            self.pending.push_str(fragment);
            self.fragment_count += 1;
        }
        self.flush_ready()
    }

    pub fn flush_ready(&self) -> bool {
        self.fragment_count >= self.threshold.max(1)
    }

    /// Return and clear the pending chunk regardless of the threshold.
    /// Used at stream end to flush a partial chunk.
    pub fn drain(&mut self) -> String {
        self.fragment_count = 0;
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
