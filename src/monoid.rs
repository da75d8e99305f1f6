//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` with an identity element. `Validation<E>` is
//! the monoid this crate cares about: `Success` is the identity and `combine`
//! concatenates error lists, which is exactly what
//! [`Validation::sequence`](crate::Validation::sequence) folds over.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**:
//!    ```text
//!    a.combine(M::empty()) == a
//!    ```
//! 3. **Left Identity**:
//!    ```text
//!    M::empty().combine(a) == a
//!    ```
//!
//! # Examples
//!
//! ```
//! use accrue::monoid::fold_all;
//! use accrue::{Monoid, Semigroup, Validation};
//!
//! let v = Validation::of("boom");
//! assert_eq!(Validation::empty().combine(v.clone()), v);
//!
//! let all = fold_all(vec![Validation::of(1), Validation::success(), Validation::of(2)]);
//! assert_eq!(all.errors(), &[1, 2]);
//! ```

use crate::Semigroup;

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

/// Fold every value of `iter` left to right, starting from `M::empty()`.
///
/// An empty iterator yields the identity.
///
/// # Example
///
/// ```
/// use accrue::monoid::fold_all;
/// use accrue::Validation;
///
/// let none: Vec<Validation<&str>> = vec![];
/// assert!(fold_all(none).is_empty());
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
