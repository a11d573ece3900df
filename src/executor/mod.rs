//! Worker-pool scheduler
//!
//! The shared work queue, the stop signal, the worker loop, and the pool
//! that joins the fleet and reduces its outcome.

mod cancel;
mod pool;
mod queue;
mod worker;

pub use cancel::StopSignal;
pub use pool::WorkerPool;
pub use queue::{AssemblyQueue, Fetch};
