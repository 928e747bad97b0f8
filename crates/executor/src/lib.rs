//! Executor implementations for batch document rendering.
//!
//! - [`RayonExecutor`]: work-stealing thread pool (feature: `rayon`)
//! - [`SyncExecutor`]: sequential execution, re-exported from `quire-traits`

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use quire_traits::{Executor, ExecutorError, SyncExecutor};

/// The executors a pipeline can be configured with.
///
/// `Executor` has generic methods and is not object safe, so the pipeline
/// stores this enum instead of a `Box<dyn Executor>`.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),

    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl ExecutorImpl {
    /// The parallel executor when available, otherwise the sequential one.
    pub fn parallel() -> Self {
        Self::default()
    }

    pub fn sequential() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}
