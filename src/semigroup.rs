//! Semigroup trait for associative merging
//!
//! A Semigroup is a type with an associative binary operation. Error
//! accumulation is built on it: two failed validations merge by concatenating
//! their error lists, and because concatenation is associative any number of
//! validations can be folded left to right without changing the result.
//!
//! # Mathematical Properties
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use accrue::{NonEmptyVec, Semigroup, Validation};
//!
//! let errors = NonEmptyVec::singleton("a").combine(NonEmptyVec::new("b", vec!["c"]));
//! assert_eq!(errors.as_slice(), &["a", "b", "c"]);
//!
//! let merged = Validation::of("a").combine(Validation::of("b"));
//! assert_eq!(merged, accrue::failure!["a", "b"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// `combine` takes `self` by value. Clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}
