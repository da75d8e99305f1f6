//! Aggregation strategies over many validations
//!
//! - [`Validation::sequence`] evaluates everything and keeps every error
//! - [`Validation::chain`] evaluates lazily and stops at the first failure
//! - [`Validation::par_sequence`] evaluates concurrently on an
//!   [`Executor`], then merges in submission order

use std::future::Future;
use std::panic;

use futures::future::join_all;
use futures::FutureExt;

use crate::error::TaskFailed;
use crate::executor::Executor;
use crate::monoid::fold_all;
use crate::validation::core::Validation;

impl<E> Validation<E> {
    /// Merge every validation, left to right, keeping all errors.
    ///
    /// Nothing short-circuits: errors of every `Failure` are concatenated in
    /// order and `Success` values contribute nothing. An empty input gives
    /// `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{failure, Validation};
    ///
    /// let v = Validation::sequence([
    ///     Validation::of("client"),
    ///     Validation::success(),
    ///     Validation::of("server"),
    /// ]);
    /// assert_eq!(v, failure!["client", "server"]);
    /// ```
    pub fn sequence<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Validation<E>>,
    {
        fold_all(validations)
    }

    /// Run validators one after another until one fails.
    ///
    /// Each validator is only invoked if everything before it succeeded. The
    /// first `Failure` is returned as-is and the remaining validators are
    /// never called. No validators at all gives `Success`.
    ///
    /// Use the [`chain!`](crate::chain) macro to mix closures of different
    /// types.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let check = |fail: bool| {
    ///     let calls = &calls;
    ///     move || {
    ///         calls.set(calls.get() + 1);
    ///         if fail {
    ///             Validation::of("failed")
    ///         } else {
    ///             Validation::success()
    ///         }
    ///     }
    /// };
    ///
    /// let v = Validation::chain([check(false), check(true), check(true)]);
    /// assert_eq!(v.errors(), &["failed"]);
    /// assert_eq!(calls.get(), 2);
    /// ```
    pub fn chain<I, F>(validators: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Validation<E>,
    {
        let outcome = validators
            .into_iter()
            .try_fold((), |(), validator| validator().into_result());

        if let Err(errors) = &outcome {
            log_chain_stopped(errors.len());
        }
        Validation::from(outcome)
    }

    /// Run every task on `executor` and merge the results in submission order.
    ///
    /// Blocks until all tasks have finished. A failing validation does not
    /// cancel the others. Completion order has no effect on the result.
    ///
    /// There is no timeout: a task that never returns blocks the caller
    /// forever.
    ///
    /// Must not be called from inside an async runtime's worker thread. Use
    /// [`par_sequence_async`](Validation::par_sequence_async) there.
    ///
    /// # Panics
    ///
    /// If a task panics, the panic is resumed on the caller once every task
    /// has finished. See [`try_par_sequence`](Validation::try_par_sequence)
    /// to receive it as an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::executor::ThreadExecutor;
    /// use accrue::{failure, par_sequence, Validation};
    ///
    /// let executor = ThreadExecutor::new();
    /// let v = par_sequence!(&executor;
    ///     || Validation::of("client"),
    ///     || {
    ///         std::thread::sleep(std::time::Duration::from_millis(5));
    ///         Validation::of("server")
    ///     },
    /// );
    /// assert_eq!(v, failure!["client", "server"]);
    /// ```
    pub fn par_sequence<X, I, F>(executor: &X, tasks: I) -> Self
    where
        X: Executor,
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Validation<E> + Send + 'static,
        E: Send + 'static,
    {
        match Self::try_par_sequence(executor, tasks) {
            Ok(validation) => validation,
            Err(failed) => panic::resume_unwind(failed.into_payload()),
        }
    }

    /// Like [`par_sequence`](Validation::par_sequence), but a panicking task
    /// is reported as [`TaskFailed`].
    ///
    /// Every task still runs to completion before the error is returned.
    pub fn try_par_sequence<X, I, F>(executor: &X, tasks: I) -> Result<Self, TaskFailed>
    where
        X: Executor,
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Validation<E> + Send + 'static,
        E: Send + 'static,
    {
        futures::executor::block_on(Self::try_par_sequence_async(executor, tasks))
    }

    /// Async form of [`par_sequence`](Validation::par_sequence).
    ///
    /// Tasks are submitted immediately, when this function is called. The
    /// returned future resolves once all of them have finished.
    pub fn par_sequence_async<X, I, F>(executor: &X, tasks: I) -> impl Future<Output = Self> + Send
    where
        X: Executor,
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Validation<E> + Send + 'static,
        E: Send + 'static,
    {
        Self::try_par_sequence_async(executor, tasks).map(|outcome| match outcome {
            Ok(validation) => validation,
            Err(failed) => panic::resume_unwind(failed.into_payload()),
        })
    }

    /// Async form of [`try_par_sequence`](Validation::try_par_sequence).
    pub fn try_par_sequence_async<X, I, F>(
        executor: &X,
        tasks: I,
    ) -> impl Future<Output = Result<Self, TaskFailed>> + Send
    where
        X: Executor,
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Validation<E> + Send + 'static,
        E: Send + 'static,
    {
        let handles: Vec<_> = tasks
            .into_iter()
            .map(|task| executor.submit(task))
            .collect();
        log_par_submitted(handles.len());

        // join_all keeps input order, so merging below follows submission order
        join_all(handles).map(|outcomes| {
            let merged = outcomes
                .into_iter()
                .try_fold(Validation::Success, |acc, outcome| {
                    outcome.map(|validation| acc.combine(validation))
                });
            log_par_finished(&merged);
            merged
        })
    }
}

#[cfg(feature = "tracing")]
fn log_chain_stopped(errors: usize) {
    tracing::trace!(errors, "chain stopped at first failure");
}

#[cfg(not(feature = "tracing"))]
fn log_chain_stopped(_errors: usize) {}

#[cfg(feature = "tracing")]
fn log_par_submitted(tasks: usize) {
    tracing::debug!(tasks, "par_sequence submitted tasks");
}

#[cfg(not(feature = "tracing"))]
fn log_par_submitted(_tasks: usize) {}

#[cfg(feature = "tracing")]
fn log_par_finished<E>(merged: &Result<Validation<E>, TaskFailed>) {
    match merged {
        Ok(validation) => tracing::debug!(errors = validation.len(), "par_sequence joined"),
        Err(failed) => tracing::warn!(error = %failed, "par_sequence task failed"),
    }
}

#[cfg(not(feature = "tracing"))]
fn log_par_finished<E>(_merged: &Result<Validation<E>, TaskFailed>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ThreadExecutor;
    use crate::{chain, failure, par_sequence, sequence};
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_sequence_skips_successes() {
        let v = sequence!(Validation::of('a'), Validation::success(), Validation::of('b'));
        assert_eq!(v, failure!['a', 'b']);
    }

    #[test]
    fn test_sequence_empty_is_success() {
        assert!(Validation::<u8>::sequence(Vec::new()).is_empty());
    }

    #[test]
    fn test_sequence_all_successes() {
        let v = sequence!(Validation::<u8>::success(), Validation::success());
        assert_eq!(v, Validation::success());
    }

    #[test]
    fn test_sequence_keeps_multi_error_blocks_intact() {
        let v = Validation::sequence(vec![failure![1, 2], failure![3], failure![4, 5]]);
        assert_eq!(v.errors(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        let second = Cell::new(0);
        let v = chain!(|| Validation::of("client"), || {
            second.set(second.get() + 1);
            Validation::of("server")
        });
        assert_eq!(v, Validation::of("client"));
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_chain_runs_until_failure() {
        let calls = Cell::new(0);
        let step = |fail: bool| {
            calls.set(calls.get() + 1);
            if fail {
                Validation::of(calls.get())
            } else {
                Validation::success()
            }
        };
        let v = chain!(|| step(false), || step(true), || step(true));
        assert_eq!(v, Validation::of(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_chain_returns_multi_error_failure_whole() {
        let later = Cell::new(false);
        let v = chain!(
            Validation::success,
            || failure!["a", "b", "c"],
            || {
                later.set(true);
                Validation::of("d")
            },
        );
        assert_eq!(v, failure!["a", "b", "c"]);
        assert!(!later.get());
    }

    #[test]
    fn test_chain_all_success() {
        let v = Validation::<u8>::chain(vec![Validation::success, Validation::success]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_chain_empty_is_success() {
        let none: Vec<fn() -> Validation<u8>> = Vec::new();
        assert!(Validation::chain(none).is_empty());
    }

    #[test]
    fn test_par_sequence_submission_order_wins() {
        let executor = ThreadExecutor::new();
        let v = par_sequence!(&executor;
            || {
                std::thread::sleep(Duration::from_millis(50));
                Validation::of("slow first")
            },
            || Validation::of("fast second"),
        );
        assert_eq!(v, failure!["slow first", "fast second"]);
    }

    #[test]
    fn test_par_sequence_runs_every_task() {
        let executor = ThreadExecutor::new();
        let ran = Arc::new(AtomicUsize::new(0));
        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let ran = Arc::clone(&ran);
                move || {
                    ran.fetch_add(1, Ordering::SeqCst);
                    if i % 2 == 0 {
                        Validation::of(i)
                    } else {
                        Validation::success()
                    }
                }
            })
            .collect();

        let v = Validation::par_sequence(&executor, tasks);
        assert_eq!(v.errors(), &[0, 2, 4, 6]);
        assert_eq!(ran.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_par_sequence_empty_is_success() {
        let executor = ThreadExecutor::new();
        let none: Vec<fn() -> Validation<u8>> = Vec::new();
        assert!(Validation::par_sequence(&executor, none).is_empty());
    }

    #[test]
    fn test_try_par_sequence_reports_panic_after_all_tasks() {
        let executor = ThreadExecutor::new();
        let finished = Arc::new(AtomicUsize::new(0));
        let slow = {
            let finished = Arc::clone(&finished);
            move || {
                std::thread::sleep(Duration::from_millis(20));
                finished.fetch_add(1, Ordering::SeqCst);
                Validation::of("slow")
            }
        };

        let tasks: Vec<crate::executor::BoxedValidator<&str>> = vec![
            Box::new(|| -> Validation<&str> { panic!("broken validator") }),
            Box::new(slow),
        ];
        let err = Validation::try_par_sequence(&executor, tasks).unwrap_err();

        assert_eq!(err.reason(), Some("broken validator"));
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[should_panic(expected = "broken validator")]
    fn test_par_sequence_resumes_panic() {
        let executor = ThreadExecutor::new();
        let _ = par_sequence!(&executor;
            || -> Validation<u8> { panic!("broken validator") },
        );
    }
}
