pub mod batch;
pub mod pool;

pub use batch::{batch_ranges, run_ranked_scan};
pub use pool::WorkerPool;
