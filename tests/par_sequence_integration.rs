//! Concurrent aggregation across executors

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

use accrue::executor::{BoxedValidator, Executor, ThreadExecutor};
use accrue::{failure, par_sequence, Validation};

/// Runs tasks inline on the caller, in submission order.
#[derive(Debug, Default)]
struct InlineExecutor {
    submitted: AtomicUsize,
}

impl Executor for InlineExecutor {
    fn submit<T, F>(&self, task: F) -> accrue::executor::Deferred<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        use futures::FutureExt;

        self.submitted.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(Ok(task())).boxed()
    }
}

#[test]
fn custom_executor_receives_every_task() {
    let executor = InlineExecutor::default();

    let v = par_sequence!(&executor;
        || Validation::of("a"),
        Validation::success,
        || Validation::failure("b", ["c"]),
    );

    assert_eq!(executor.submitted.load(Ordering::SeqCst), 3);
    assert_eq!(v, failure!["a", "b", "c"]);
}

#[test]
fn tasks_run_concurrently_on_threads() {
    // both tasks must be running at once to get past the barrier
    let barrier = Arc::new(Barrier::new(2));
    let tasks: Vec<BoxedValidator<&'static str>> = (0..2)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            Box::new(move || {
                barrier.wait();
                Validation::of(if i == 0 { "first" } else { "second" })
            }) as BoxedValidator<&'static str>
        })
        .collect();

    let v = Validation::par_sequence(&ThreadExecutor::new(), tasks);
    assert_eq!(v, failure!["first", "second"]);
}

#[test]
fn reverse_completion_order_does_not_change_result() {
    let executor = ThreadExecutor::new();
    let tasks: Vec<BoxedValidator<usize>> = (0..5usize)
        .map(|i| {
            Box::new(move || {
                std::thread::sleep(Duration::from_millis(10 * (5 - i) as u64));
                Validation::of(i)
            }) as BoxedValidator<usize>
        })
        .collect();

    let v = Validation::par_sequence(&executor, tasks);
    assert_eq!(v.errors(), &[0, 1, 2, 3, 4]);
}

#[test]
fn many_tasks_finishing_in_reverse_keep_submission_order() {
    let executor = ThreadExecutor::new();
    let tasks: Vec<BoxedValidator<usize>> = (0..64usize)
        .map(|i| {
            Box::new(move || {
                std::thread::sleep(Duration::from_millis((64 - i) as u64));
                if i % 3 == 0 {
                    Validation::success()
                } else {
                    Validation::failure(i, [i * 100])
                }
            }) as BoxedValidator<usize>
        })
        .collect();

    let expected: Vec<usize> = (0..64usize)
        .filter(|i| i % 3 != 0)
        .flat_map(|i| [i, i * 100])
        .collect();

    let v = Validation::par_sequence(&executor, tasks);
    assert_eq!(v.into_errors(), expected);
}

#[test]
fn a_failing_task_does_not_cancel_siblings() {
    let executor = ThreadExecutor::new();
    let finished = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<BoxedValidator<u32>> = (0..4u32)
        .map(|i| {
            let finished = Arc::clone(&finished);
            Box::new(move || {
                if i > 0 {
                    std::thread::sleep(Duration::from_millis(15));
                }
                finished.fetch_add(1, Ordering::SeqCst);
                Validation::of(i)
            }) as BoxedValidator<u32>
        })
        .collect();

    let v = Validation::par_sequence(&executor, tasks);
    assert_eq!(finished.load(Ordering::SeqCst), 4);
    assert_eq!(v.len(), 4);
}

#[cfg(feature = "async")]
mod tokio_executor {
    use super::*;
    use accrue::executor::TokioExecutor;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn par_sequence_async_keeps_submission_order() {
        let executor = TokioExecutor::current();
        let tasks: Vec<BoxedValidator<&'static str>> = vec![
            Box::new(|| {
                std::thread::sleep(Duration::from_millis(40));
                Validation::of("client")
            }),
            Box::new(|| Validation::of("server")),
        ];

        let v = Validation::par_sequence_async(&executor, tasks).await;
        assert_eq!(v, failure!["client", "server"]);
    }

    #[tokio::test]
    async fn try_par_sequence_async_reports_panic() {
        let executor = TokioExecutor::current();
        let tasks: Vec<BoxedValidator<u8>> = vec![
            Box::new(|| Validation::of(1)),
            Box::new(|| -> Validation<u8> { panic!("validator crashed") }),
        ];

        let err = Validation::try_par_sequence_async(&executor, tasks)
            .await
            .unwrap_err();
        assert_eq!(err.reason(), Some("validator crashed"));
    }

    #[test]
    fn blocking_par_sequence_from_outside_the_runtime() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let executor = TokioExecutor::new(runtime.handle().clone());

        let v = par_sequence!(&executor; || Validation::of(1), Validation::success, || Validation::of(2));
        assert_eq!(v, failure![1, 2]);
    }
}

#[cfg(feature = "tracing")]
mod logging {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn par_sequence_logs_submission_and_join() {
        let executor = ThreadExecutor::new();
        let _ = par_sequence!(&executor; || Validation::of(1), || Validation::of(2));

        assert!(logs_contain("par_sequence submitted tasks"));
        assert!(logs_contain("par_sequence joined"));
    }

    #[test]
    #[traced_test]
    fn chain_logs_short_circuit() {
        let validators: [fn() -> Validation<&'static str>; 2] =
            [|| Validation::of("stop"), || Validation::of("never")];
        let _ = Validation::chain(validators);

        assert!(logs_contain("chain stopped at first failure"));
    }
}
