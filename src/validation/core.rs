//! The `Validation` type: either no errors, or a non-empty ordered list of them
//!
//! A `Validation<E>` carries no success payload. It only answers "did anything
//! go wrong, and if so, what?". Errors are kept in the order they were
//! produced; duplicates are preserved.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use accrue::Validation;
//!
//! let ok = Validation::<&str>::success();
//! let bad = Validation::of("name is blank");
//!
//! assert!(ok.is_empty());
//! assert!(bad.non_empty());
//! assert_eq!(bad.get(), Ok(&"name is blank"));
//! ```
//!
//! ## Normalizing construction
//!
//! ```
//! use accrue::Validation;
//!
//! let none: Vec<&str> = vec![];
//! assert_eq!(Validation::of_all(none), Validation::success());
//!
//! let some = Validation::of_all(vec!["a", "b"]);
//! assert_eq!(some.errors(), &["a", "b"]);
//! ```
//!
//! ## Bridging into `Result`
//!
//! ```
//! use accrue::Validation;
//!
//! fn register(name: &str) -> Result<(), String> {
//!     let check = if name.is_empty() {
//!         Validation::of("name is blank")
//!     } else {
//!         Validation::success()
//!     };
//!     check.ok_or_else(|errors| errors.as_slice().join(", "))?;
//!     Ok(())
//! }
//!
//! assert_eq!(register(""), Err("name is blank".to_string()));
//! assert_eq!(register("ada"), Ok(()));
//! ```

use std::fmt;

use crate::error::NoSuchElement;
use crate::validation::iter::Iter;
use crate::{Monoid, NonEmptyVec, Semigroup};

/// Outcome of a validation: `Success` with no errors, or `Failure` with at
/// least one.
///
/// Equality is structural. Two `Success` values are always equal; two
/// `Failure`s are equal when their errors are equal element-wise, in order.
///
/// # Examples
///
/// ```
/// use accrue::{failure, Validation};
///
/// let v = Validation::of("client").combine(Validation::of("server"));
/// assert_eq!(v, failure!["client", "server"]);
/// assert_ne!(v, failure!["server", "client"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validation<E> {
    /// No errors were recorded
    Success,
    /// One or more errors, in the order they were produced
    Failure(NonEmptyVec<E>),
}

// derive(Default) would require `E: Default`
#[allow(clippy::derivable_impls)]
impl<E> Default for Validation<E> {
    fn default() -> Self {
        Validation::Success
    }
}

impl<E> Validation<E> {
    /// The error-free validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<String>::success();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub const fn success() -> Self {
        Validation::Success
    }

    /// A failure holding a single error.
    ///
    /// Use the [`failure!`](crate::failure) macro for several errors.
    #[inline]
    pub fn of(error: E) -> Self {
        Validation::Failure(NonEmptyVec::singleton(error))
    }

    /// A failure holding `first` followed by every error of `rest`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::failure("a", ["b", "c"]);
    /// assert_eq!(v.errors(), &["a", "b", "c"]);
    /// ```
    #[inline]
    pub fn failure(first: E, rest: impl IntoIterator<Item = E>) -> Self {
        Validation::Failure(NonEmptyVec::new(first, rest))
    }

    /// A failure wrapping exactly the given errors.
    #[inline]
    pub fn from_errors(errors: NonEmptyVec<E>) -> Self {
        Validation::Failure(errors)
    }

    /// A failure holding every error of `errors`, or `Success` if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// assert!(Validation::of_all(Vec::<u8>::new()).is_empty());
    /// assert_eq!(Validation::of_all([1, 2]).len(), 2);
    /// ```
    pub fn of_all(errors: impl IntoIterator<Item = E>) -> Self {
        match NonEmptyVec::from_iter_opt(errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success,
        }
    }

    /// `true` when there are no errors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Validation::Success)
    }

    /// `true` when at least one error was recorded.
    #[inline]
    pub fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Same as [`is_empty`](Validation::is_empty).
    #[inline]
    pub fn is_success(&self) -> bool {
        self.is_empty()
    }

    /// Same as [`non_empty`](Validation::non_empty).
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.non_empty()
    }

    /// The representative (first) error.
    ///
    /// Returns [`NoSuchElement`] on `Success`. Use [`errors`](Validation::errors)
    /// to see every error.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{failure, NoSuchElement, Validation};
    ///
    /// assert_eq!(failure![1, 2].get(), Ok(&1));
    /// assert_eq!(Validation::<i32>::success().get(), Err(NoSuchElement));
    /// ```
    pub fn get(&self) -> Result<&E, NoSuchElement> {
        self.first().ok_or(NoSuchElement)
    }

    /// The first error, if any.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        match self {
            Validation::Success => None,
            Validation::Failure(errors) => Some(errors.head()),
        }
    }

    /// Every error in order. Empty for `Success`.
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Validation::Success => &[],
            Validation::Failure(errors) => errors.as_slice(),
        }
    }

    /// Number of errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors().len()
    }

    /// Iterate over the errors in order. Yields nothing for `Success`.
    ///
    /// The iterator borrows the validation, so it can be restarted by calling
    /// `iter` again.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.errors())
    }

    /// Consume the validation and return its errors.
    pub fn into_errors(self) -> Vec<E> {
        match self {
            Validation::Success => Vec::new(),
            Validation::Failure(errors) => errors.into_vec(),
        }
    }

    /// `Ok(())` on `Success`, `Err(errors)` otherwise.
    #[inline]
    pub fn into_result(self) -> Result<(), NonEmptyVec<E>> {
        match self {
            Validation::Success => Ok(()),
            Validation::Failure(errors) => Err(errors),
        }
    }

    /// Convert accumulated errors into a caller-defined error.
    ///
    /// `Success` gives `Ok(())` without calling `factory`. A `Failure` hands
    /// the full ordered error list to `factory` and returns its result as
    /// `Err`, ready for `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{failure, Validation};
    ///
    /// let err = failure!["a", "b"].ok_or_else(|errors| errors.len());
    /// assert_eq!(err, Err(2));
    ///
    /// let ok = Validation::<&str>::success().ok_or_else(|errors| errors.len());
    /// assert_eq!(ok, Ok(()));
    /// ```
    #[doc(alias = "if_present_throw")]
    pub fn ok_or_else<X, F>(self, factory: F) -> Result<(), X>
    where
        F: FnOnce(NonEmptyVec<E>) -> X,
    {
        self.into_result().map_err(factory)
    }

    /// Transform every error, one to one and in order.
    ///
    /// `f` is never called on `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::failure;
    ///
    /// let v = failure!["ab", "abc"].map(str::len);
    /// assert_eq!(v.errors(), &[2, 3]);
    /// ```
    pub fn map<U, F>(self, f: F) -> Validation<U>
    where
        F: FnMut(E) -> U,
    {
        match self {
            Validation::Success => Validation::Success,
            Validation::Failure(errors) => Validation::Failure(errors.map(f)),
        }
    }

    /// Expand every error into a validation and concatenate the results.
    ///
    /// Errors from `f(e)` appear in the order of the errors they came from.
    /// If every expansion is `Success`, so is the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{failure, Validation};
    ///
    /// let expanded = failure![1, 2].flat_map(|n| Validation::failure(n, [n * 10]));
    /// assert_eq!(expanded.errors(), &[1, 10, 2, 20]);
    ///
    /// let cleared = Validation::of("stale").flat_map(|_| Validation::<&str>::success());
    /// assert!(cleared.is_empty());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Validation<U>
    where
        F: FnMut(E) -> Validation<U>,
    {
        match self {
            Validation::Success => Validation::Success,
            Validation::Failure(errors) => Validation::of_all(errors.into_iter().flat_map(f)),
        }
    }

    /// Keep only the errors matching `predicate`. `Success` if none remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::failure;
    ///
    /// assert_eq!(failure![1, 2, 3].filter(|n| n % 2 == 1).errors(), &[1, 3]);
    /// assert!(failure![2, 4].filter(|n| n % 2 == 1).is_empty());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        match self {
            Validation::Success => Validation::Success,
            Validation::Failure(errors) => Validation::of_all(errors.filter(predicate)),
        }
    }

    /// Call `action` once with the representative (first) error, then return
    /// `self` unchanged.
    ///
    /// This sees a single error no matter how many are recorded. See
    /// [`peek_each`](Validation::peek_each) for per-error inspection and
    /// [`if_present`](Validation::if_present) for the whole list.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::failure;
    ///
    /// let mut seen = Vec::new();
    /// let v = failure!["client", "server"].peek(|e| seen.push(*e));
    /// assert_eq!(seen, vec!["client"]);
    /// assert_eq!(v.len(), 2);
    /// ```
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Some(first) = self.first() {
            action(first);
        }
        self
    }

    /// Call `action` once per error, in order, then return `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::failure;
    ///
    /// let mut calls = 0;
    /// let _ = failure!["client", "server"].peek_each(|_| calls += 1);
    /// assert_eq!(calls, 2);
    /// ```
    pub fn peek_each<F>(self, mut action: F) -> Self
    where
        F: FnMut(&E),
    {
        self.iter().for_each(&mut action);
        self
    }

    /// Call `action` once with the full error list. No-op on `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::failure;
    ///
    /// let mut reports = Vec::new();
    /// failure!["client", "server"].if_present(|errors| reports.push(errors.len()));
    /// assert_eq!(reports, vec![2]);
    /// ```
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&NonEmptyVec<E>),
    {
        if let Validation::Failure(errors) = self {
            action(errors);
        }
    }

    /// Merge two validations, errors of `self` first.
    ///
    /// `Success` is the identity on both sides. Two failures concatenate.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{failure, Validation};
    ///
    /// let fatal = Validation::of("fatal");
    /// assert_eq!(Validation::success().combine(fatal.clone()), fatal);
    /// assert_eq!(fatal.clone().combine(Validation::success()), fatal);
    /// assert_eq!(
    ///     Validation::of("a").combine(Validation::of("b")),
    ///     failure!["a", "b"]
    /// );
    /// ```
    #[inline]
    pub fn combine(self, other: Self) -> Self {
        Semigroup::combine(self, other)
    }

    /// Run `next` only if this validation is `Success`.
    ///
    /// A `Failure` is returned unchanged and `next` is never invoked. This is
    /// the two-step building block of [`Validation::chain`].
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::success().and_then(|| Validation::of("expensive check failed"));
    /// assert_eq!(v.len(), 1);
    ///
    /// let v = Validation::of("cheap check failed")
    ///     .and_then(|| -> Validation<&str> { unreachable!() });
    /// assert_eq!(v.get(), Ok(&"cheap check failed"));
    /// ```
    pub fn and_then<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            // Success is the identity of combine, so sequencing it with
            // next() is next() itself.
            Validation::Success => next(),
            failure @ Validation::Failure(_) => failure,
        }
    }

    /// Return `self` if it holds errors, otherwise the result of `alternative`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<&str>::success().or_else(|| Validation::of("fallback"));
    /// assert_eq!(v.get(), Ok(&"fallback"));
    ///
    /// let v = Validation::of("kept").or_else(|| Validation::of("ignored"));
    /// assert_eq!(v.get(), Ok(&"kept"));
    /// ```
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Validation::Success => alternative(),
            failure @ Validation::Failure(_) => failure,
        }
    }

    /// `"Success!"` or `"List of errors"`, the label used by `Display`.
    ///
    /// `Display` follows the failure label with the error count and the
    /// errors themselves: `List of errors (2): [a, b]`.
    pub fn string_prefix(&self) -> &'static str {
        match self {
            Validation::Success => "Success!",
            Validation::Failure(_) => "List of errors",
        }
    }
}

impl<E> Semigroup for Validation<E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Validation::Success, other) => other,
            (this, Validation::Success) => this,
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
        }
    }
}

impl<E> Monoid for Validation<E> {
    fn empty() -> Self {
        Validation::Success
    }
}

impl<E> From<NonEmptyVec<E>> for Validation<E> {
    fn from(errors: NonEmptyVec<E>) -> Self {
        Validation::Failure(errors)
    }
}

impl<E> From<Result<(), NonEmptyVec<E>>> for Validation<E> {
    fn from(result: Result<(), NonEmptyVec<E>>) -> Self {
        match result {
            Ok(()) => Validation::Success,
            Err(errors) => Validation::Failure(errors),
        }
    }
}

impl<E> FromIterator<E> for Validation<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Validation::of_all(iter)
    }
}

impl<E: fmt::Display> fmt::Display for Validation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Success => f.write_str(self.string_prefix()),
            Validation::Failure(errors) => {
                write!(f, "{} ({}): [", self.string_prefix(), errors.len())?;
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", error)?;
                }
                f.write_str("]")
            }
        }
    }
}
