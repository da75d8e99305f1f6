//! Remote Server Example
//!
//! Walks through aggregating validation errors before reporting them to a
//! (simulated) remote server:
//! - Independent checks merged with `sequence!`
//! - Slow checks run concurrently with `par_sequence!`
//! - Expensive checks guarded by `chain!`
//! - Side effects with `peek`, `peek_each` and `if_present`
//! - Turning errors into a `Result` with `ok_or_else`

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use accrue::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Error {
    ClientError,
    ServerError,
    FatalError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Error::ClientError => "client error",
            Error::ServerError => "server error",
            Error::FatalError => "fatal error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
struct RemoteServer {
    reports: AtomicUsize,
}

impl RemoteServer {
    fn send(&self, error: &Error) {
        let n = self.reports.fetch_add(1, Ordering::SeqCst) + 1;
        println!("  -> report #{}: {}", n, error);
    }

    fn extremely_long_action(&self) -> Validation<Error> {
        std::thread::sleep(Duration::from_millis(100));
        Validation::of(Error::ServerError)
    }

    fn extremely_expensive_validation(&self) -> Validation<Error> {
        println!("  (running the expensive validation)");
        Validation::of(Error::FatalError)
    }
}

// ==================== Independent checks ====================

fn example_sequence(server: &RemoteServer) {
    println!("\n=== Example 1: sequence! ===");

    let result = sequence!(
        Validation::of(Error::ClientError),
        Validation::success(),
        Validation::of(Error::ServerError),
    );
    println!("{}", result);

    for error in &result {
        server.send(error);
    }
}

// ==================== Concurrent checks ====================

fn example_par_sequence(server: &Arc<RemoteServer>) {
    println!("\n=== Example 2: par_sequence! ===");

    let executor = ThreadExecutor::named("remote-check");
    let remote = Arc::clone(server);
    let result = par_sequence!(&executor;
        move || remote.extremely_long_action(),
        || Validation::of(Error::ClientError),
    );

    // Submission order, even though the first task finished last
    println!("{}", result);
}

// ==================== Dependent checks ====================

fn example_chain(server: &RemoteServer) {
    println!("\n=== Example 3: chain! ===");

    let stopped = chain!(
        || Validation::of(Error::ClientError),
        || server.extremely_expensive_validation(),
    );
    println!("stopped early: {}", stopped);

    let reached = chain!(
        Validation::success,
        || server.extremely_expensive_validation(),
    );
    println!("reached the end: {}", reached);
}

// ==================== Side effects ====================

fn example_side_effects(server: &RemoteServer) {
    println!("\n=== Example 4: peek / peek_each / if_present ===");

    let errors = failure![Error::ClientError, Error::ServerError];

    println!("peek reports the first error only:");
    let errors = errors.peek(|e| server.send(e));

    println!("peek_each reports every error:");
    let errors = errors.peek_each(|e| server.send(e));

    errors.if_present(|all| println!("if_present saw {} errors at once", all.len()));
}

// ==================== Leaving the validation world ====================

fn submit(form: Validation<Error>) -> Result<(), String> {
    form.ok_or_else(|errors| {
        let names: Vec<String> = errors.iter().map(ToString::to_string).collect();
        format!("rejected: {}", names.join(", "))
    })?;
    Ok(())
}

fn example_ok_or_else() {
    println!("\n=== Example 5: ok_or_else ===");

    println!("{:?}", submit(Validation::success()));
    println!(
        "{:?}",
        submit(Validation::success().combine(failure![Error::ServerError, Error::ClientError]))
    );
}

fn main() {
    // With `--features tracing`, aggregation events are printed as well
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("Remote Server Examples");
    println!("======================");

    let server = Arc::new(RemoteServer::default());

    example_sequence(&server);
    example_par_sequence(&server);
    example_chain(&server);
    example_side_effects(&server);
    example_ok_or_else();

    println!(
        "\nThe server received {} reports.",
        server.reports.load(Ordering::SeqCst)
    );
}
