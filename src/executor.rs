//! Scheduling capability used by [`Validation::par_sequence`](crate::Validation::par_sequence).
//!
//! An [`Executor`] takes a zero-argument computation, runs it somewhere off
//! the calling context and hands back a [`Deferred`] handle that resolves to
//! its result. The crate ships two executors:
//!
//! - [`ThreadExecutor`] - one OS thread per task, always available
//! - [`TokioExecutor`] - tokio's blocking pool, behind the `async` feature
//!
//! Anything else (a rayon pool, a custom work queue) only has to implement
//! [`Executor::submit`].
//!
//! # Example
//!
//! ```rust
//! use accrue::executor::{Executor, ThreadExecutor};
//!
//! let executor = ThreadExecutor::new();
//! let handle = executor.submit(|| 6 * 7);
//! assert_eq!(futures::executor::block_on(handle).unwrap(), 42);
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use futures::channel::oneshot;
use futures::future::{self, BoxFuture};
use futures::FutureExt;

use crate::error::TaskFailed;
use crate::Validation;

/// Awaitable handle to a submitted computation.
///
/// Resolves to the computation's output, or to [`TaskFailed`] if it panicked
/// or was dropped before finishing.
pub type Deferred<T> = BoxFuture<'static, Result<T, TaskFailed>>;

/// A validator boxed so that differently-typed closures fit one collection.
///
/// Used by the [`par_sequence!`](crate::par_sequence) macro.
pub type BoxedValidator<E> = Box<dyn FnOnce() -> Validation<E> + Send + 'static>;

/// Submit a closure, get back something to await.
///
/// Implementations must run every submitted task to completion even if the
/// returned handle is dropped or other tasks fail.
pub trait Executor {
    /// Schedule `task` and return a handle to its eventual result.
    fn submit<T, F>(&self, task: F) -> Deferred<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static;
}

impl<X: Executor> Executor for &X {
    fn submit<T, F>(&self, task: F) -> Deferred<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        (**self).submit(task)
    }
}

impl<X: Executor> Executor for Arc<X> {
    fn submit<T, F>(&self, task: F) -> Deferred<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        (**self).submit(task)
    }
}

/// Runs each task on its own OS thread.
///
/// Panics inside a task are caught on the worker thread and delivered through
/// the handle as [`TaskFailed`].
///
/// # Example
///
/// ```rust
/// use accrue::executor::ThreadExecutor;
/// use accrue::Validation;
///
/// let executor = ThreadExecutor::named("validator");
/// let tasks: Vec<fn() -> Validation<&'static str>> =
///     vec![|| Validation::of("client"), || Validation::of("server")];
/// let result = Validation::par_sequence(&executor, tasks);
/// assert_eq!(result.errors(), &["client", "server"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThreadExecutor {
    name: Option<String>,
}

impl ThreadExecutor {
    /// Executor spawning anonymous threads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor whose threads carry `name`, which shows up in panic messages
    /// and debuggers.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Executor for ThreadExecutor {
    fn submit<T, F>(&self, task: F) -> Deferred<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();

        let mut builder = thread::Builder::new();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }

        let spawned = builder.spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task));
            // receiver gone means nobody is waiting any more
            let _ = tx.send(outcome);
        });

        if let Err(err) = spawned {
            return future::ready(Err(TaskFailed::new(Box::new(format!(
                "failed to spawn thread: {}",
                err
            )))))
            .boxed();
        }

        async move {
            match rx.await {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(payload)) => Err(TaskFailed::new(payload)),
                Err(oneshot::Canceled) => Err(TaskFailed::message("task dropped before completion")),
            }
        }
        .boxed()
    }
}

/// Runs each task on tokio's blocking thread pool.
///
/// Holds a [`tokio::runtime::Handle`], so it can submit work from threads
/// outside the runtime too.
///
/// # Example
///
/// ```rust
/// use accrue::executor::TokioExecutor;
/// use accrue::{failure, Validation};
///
/// # tokio_test::block_on(async {
/// let executor = TokioExecutor::current();
/// let tasks: Vec<fn() -> Validation<i32>> = vec![|| Validation::of(1), || Validation::of(2)];
/// let result = Validation::par_sequence_async(&executor, tasks).await;
/// assert_eq!(result, failure![1, 2]);
/// # });
/// ```
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: tokio::runtime::Handle,
}

#[cfg(feature = "async")]
impl TokioExecutor {
    /// Executor bound to the given runtime.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Executor bound to the runtime of the calling context.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime. Use
    /// [`try_current`](TokioExecutor::try_current) to handle that case.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }

    /// Executor bound to the runtime of the calling context, if there is one.
    pub fn try_current() -> Result<Self, tokio::runtime::TryCurrentError> {
        tokio::runtime::Handle::try_current().map(Self::new)
    }
}

#[cfg(feature = "async")]
impl Executor for TokioExecutor {
    fn submit<T, F>(&self, task: F) -> Deferred<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let join = self.handle.spawn_blocking(task);
        async move {
            join.await.map_err(|err| {
                if err.is_panic() {
                    TaskFailed::new(err.into_panic())
                } else {
                    TaskFailed::message("task cancelled")
                }
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_thread_executor_returns_value() {
        let executor = ThreadExecutor::new();
        assert_eq!(block_on(executor.submit(|| "done")).unwrap(), "done");
    }

    #[test]
    fn test_thread_executor_names_threads() {
        let executor = ThreadExecutor::named("accrue-test");
        let name = block_on(executor.submit(|| thread::current().name().map(String::from)));
        assert_eq!(name.unwrap().as_deref(), Some("accrue-test"));
    }

    #[test]
    fn test_thread_executor_reports_panic() {
        let executor = ThreadExecutor::new();
        let err = block_on(executor.submit(|| -> u8 { panic!("validator blew up") })).unwrap_err();
        assert_eq!(err.reason(), Some("validator blew up"));
    }

    #[test]
    fn test_executor_through_reference_and_arc() {
        let executor = Arc::new(ThreadExecutor::new());
        let by_arc = block_on(executor.submit(|| 1)).unwrap();
        let by_ref = block_on((&executor).submit(|| 2)).unwrap();
        assert_eq!(by_arc + by_ref, 3);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_tokio_executor_returns_value() {
        let executor = TokioExecutor::current();
        assert_eq!(executor.submit(|| 7).await.unwrap(), 7);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_tokio_executor_reports_panic() {
        let executor = TokioExecutor::current();
        let err = executor
            .submit(|| -> u8 { panic!("blocking task panicked") })
            .await
            .unwrap_err();
        assert_eq!(err.reason(), Some("blocking task panicked"));
    }

    #[cfg(feature = "async")]
    #[test]
    fn test_tokio_try_current_outside_runtime() {
        assert!(TokioExecutor::try_current().is_err());
    }
}
