//! Worker-thread cap for the parallel candidate scans.
//!
//! Scans run on the global Rayon pool unless a cap is set; a capped scan
//! builds a scoped pool of exactly that size. The `analyze --workers` flag
//! and the benches are the two places a cap comes from.

use rayon::ThreadPoolBuilder;

/// Optional cap on how many Rayon workers a scan may use.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerPool {
    cap: Option<usize>,
}

impl WorkerPool {
    /// No cap: one worker per core on the global pool.
    pub fn default_workers() -> Self {
        Self::default()
    }

    /// Cap at exactly `n` workers; `n == 0` means no cap.
    pub fn with_workers(n: usize) -> Self {
        Self {
            cap: (n > 0).then_some(n),
        }
    }

    /// Run `f` under this cap. The scan's result ordering is the same either
    /// way; only the degree of parallelism changes.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self.cap {
            None => f(),
            Some(n) => ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .expect("Rayon thread pool")
                .install(f),
        }
    }
}
