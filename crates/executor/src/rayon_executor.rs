//! Rayon-based parallel executor.

use quire_traits::{Executor, ExecutorError};
use rayon::prelude::*;
use std::sync::Arc;

/// Runs work items on a rayon thread pool.
///
/// By default the global pool is used. `with_threads` builds a dedicated pool,
/// which keeps a large batch from starving other rayon users in the process.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            pool: None,
            num_threads: rayon::current_num_threads(),
        }
    }

    /// Creates an executor backed by its own pool of `num_threads` workers.
    pub fn with_threads(num_threads: usize) -> Result<Self, ExecutorError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("quire-render-{i}"))
            .build()
            .map_err(|e| ExecutorError::new(e.to_string()))?;
        log::debug!("Built dedicated rayon pool with {} threads", pool.current_num_threads());
        Ok(Self {
            num_threads: pool.current_num_threads(),
            pool: Some(Arc::new(pool)),
        })
    }

    fn run<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        self.run(|| items.into_par_iter().map(f).collect())
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.run(|| items.into_par_iter().map(f).collect())
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
