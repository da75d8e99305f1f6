//! # Accrue
//!
//! > *"Collect every problem, then decide what to do about it"*
//!
//! A small validation algebra: a [`Validation<E>`] is either `Success` (no
//! errors) or `Failure` with a non-empty, ordered list of `E`.
//!
//! ## Three ways to aggregate
//!
//! - **Independent** - [`Validation::sequence`] runs everything and keeps
//!   every error
//! - **Dependent** - [`Validation::chain`] stops at the first failure and
//!   never runs the rest
//! - **Concurrent** - [`Validation::par_sequence`] runs validators on an
//!   [`Executor`](executor::Executor) and merges results in submission order
//!
//! ## Quick Example
//!
//! ```rust
//! use accrue::{chain, failure, sequence, Validation};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Error {
//!     EmailMissingAt,
//!     PasswordTooShort,
//!     UserExists,
//! }
//!
//! fn validate_email(email: &str) -> Validation<Error> {
//!     if email.contains('@') {
//!         Validation::success()
//!     } else {
//!         Validation::of(Error::EmailMissingAt)
//!     }
//! }
//!
//! fn validate_password(password: &str) -> Validation<Error> {
//!     if password.len() >= 8 {
//!         Validation::success()
//!     } else {
//!         Validation::of(Error::PasswordTooShort)
//!     }
//! }
//!
//! // Collect all errors at once
//! let form = sequence!(validate_email("nope"), validate_password("short"));
//! assert_eq!(form, failure![Error::EmailMissingAt, Error::PasswordTooShort]);
//!
//! // Only hit the (expensive) uniqueness check if the form is valid
//! let registration = chain!(
//!     || form.clone(),
//!     || Validation::of(Error::UserExists),
//! );
//! assert_eq!(registration, form);
//!
//! // Hand the errors to the rest of the program
//! let result = registration.ok_or_else(|errors| format!("{} problems", errors.len()));
//! assert_eq!(result, Err("2 problems".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod executor;
mod macros;
pub mod monoid;
pub mod nonempty;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use error::{NoSuchElement, TaskFailed};
pub use monoid::Monoid;
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{NoSuchElement, TaskFailed};
    pub use crate::executor::{Executor, ThreadExecutor};
    #[cfg(feature = "async")]
    pub use crate::executor::TokioExecutor;
    pub use crate::monoid::Monoid;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::{chain, failure, par_sequence, sequence};
}
