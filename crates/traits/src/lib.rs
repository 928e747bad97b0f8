pub mod executor;
pub mod writer;

pub use executor::{Executor, ExecutorError, SyncExecutor};
pub use writer::{PageHandle, PageWriter, WriterError};
