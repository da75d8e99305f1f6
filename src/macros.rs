//! Variadic constructors and combinators.

/// Build a `Failure` from one or more errors, in argument order.
///
/// Calling it with no errors does not compile; use
/// [`Validation::of_all`](crate::Validation::of_all) when the list may be empty.
///
/// # Example
///
/// ```rust
/// use accrue::{failure, Validation};
///
/// let v: Validation<&str> = failure!["client", "server"];
/// assert_eq!(v.errors(), &["client", "server"]);
/// ```
#[macro_export]
macro_rules! failure {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Validation::failure($first, [$($rest),*])
    };
}

/// Merge validations left to right, keeping every error.
///
/// Shorthand for [`Validation::sequence`](crate::Validation::sequence) over
/// the arguments.
///
/// # Example
///
/// ```rust
/// use accrue::{failure, sequence, Validation};
///
/// let v = sequence!(Validation::of(1), Validation::success(), Validation::of(2));
/// assert_eq!(v, failure![1, 2]);
/// ```
#[macro_export]
macro_rules! sequence {
    ($($validation:expr),+ $(,)?) => {
        $crate::Validation::sequence([$($validation),+])
    };
}

/// Evaluate validators in order, stopping at the first failure.
///
/// Each argument is a closure returning a `Validation`. Unlike
/// [`Validation::chain`](crate::Validation::chain), the closures may all have
/// different types.
///
/// # Example
///
/// ```rust
/// use accrue::{chain, Validation};
///
/// let mut ran_second = false;
/// let v = chain!(
///     || Validation::of("cheap check failed"),
///     || {
///         ran_second = true;
///         Validation::of("expensive check failed")
///     },
/// );
/// assert_eq!(v.len(), 1);
/// assert!(!ran_second);
/// ```
#[macro_export]
macro_rules! chain {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        ($first)()$(.and_then($rest))*
    };
}

/// Run validators concurrently on an executor and merge in argument order.
///
/// The closures are boxed, so they may have different types. Each must be
/// `Send + 'static`.
///
/// # Example
///
/// ```rust
/// use accrue::executor::ThreadExecutor;
/// use accrue::{failure, par_sequence, Validation};
///
/// let executor = ThreadExecutor::new();
/// let v = par_sequence!(&executor; || Validation::of(1), || Validation::of(2));
/// assert_eq!(v, failure![1, 2]);
/// ```
#[macro_export]
macro_rules! par_sequence {
    ($executor:expr; $($task:expr),+ $(,)?) => {
        $crate::Validation::par_sequence(
            $executor,
            [$(::std::boxed::Box::new($task) as $crate::executor::BoxedValidator<_>),+],
        )
    };
}
