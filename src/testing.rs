//! Testing utilities for code that produces validations
//!
//! Assertion macros that print the recorded errors on mismatch, and, behind
//! the `proptest` feature, `Arbitrary` implementations for property tests.
//!
//! # Examples
//!
//! ```rust
//! use accrue::{assert_failure, assert_success, assert_validation_errors, failure, Validation};
//!
//! assert_success!(Validation::<String>::success());
//! assert_failure!(Validation::of("error"));
//! assert_validation_errors!(failure!["a", "b"], ["a", "b"]);
//! ```

/// Assert that a validation has no errors.
///
/// Panics with the recorded errors if it is a `Failure`.
///
/// # Example
///
/// ```rust
/// use accrue::{assert_success, Validation};
///
/// assert_success!(Validation::<String>::success());
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation holds at least one error.
///
/// # Example
///
/// ```rust
/// use accrue::{assert_failure, Validation};
///
/// assert_failure!(Validation::of("error"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success => {
                panic!("Expected Failure, got Success");
            }
        }
    };
}

/// Assert that a validation failed with exactly these errors, in this order.
///
/// `$expected` is anything that iterates over the error type: a `Vec`, an
/// array, a slice iterator.
///
/// # Example
///
/// ```rust
/// use accrue::{assert_validation_errors, failure};
///
/// assert_validation_errors!(failure!["error1", "error2"], vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let expected: ::std::vec::Vec<_> = ::std::iter::IntoIterator::into_iter($expected).collect();
                assert_eq!(errors.into_vec(), expected);
            }
            $crate::Validation::Success => {
                panic!("Expected Failure with errors {:?}, got Success", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;
    use proptest::strategy::LazyJust;

    use crate::{NonEmptyVec, Validation};

    impl<T> Arbitrary for NonEmptyVec<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            (any::<T>(), proptest::collection::vec(any::<T>(), 0..8))
                .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
                .boxed()
        }
    }

    impl<E> Arbitrary for Validation<E>
    where
        E: Arbitrary + 'static,
    {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                LazyJust::new(Validation::success),
                any::<NonEmptyVec<E>>().prop_map(Validation::Failure),
            ]
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{failure, Validation};

    #[test]
    fn assert_success_macro() {
        assert_success!(Validation::<String>::success());
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(Validation::of("error"));
    }

    #[test]
    fn assert_validation_errors_macro() {
        assert_validation_errors!(failure!["error1", "error2"], vec!["error1", "error2"]);
        assert_validation_errors!(failure![1, 2], [1, 2]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Validation::of("error".to_string()));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Validation::<String>::success());
    }

    #[test]
    #[should_panic(expected = "Expected Failure with errors")]
    fn assert_validation_errors_panics_on_success() {
        assert_validation_errors!(Validation::<String>::success(), vec!["error".to_string()]);
    }

    #[test]
    #[should_panic]
    fn assert_validation_errors_panics_on_order_mismatch() {
        assert_validation_errors!(failure![1, 2], [2, 1]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{NonEmptyVec, Validation};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_failure_is_never_empty(v in any::<Validation<u8>>()) {
                match &v {
                    Validation::Success => prop_assert_eq!(v.len(), 0),
                    Validation::Failure(errors) => prop_assert!(!errors.as_slice().is_empty()),
                }
            }

            #[test]
            fn arbitrary_nonempty_has_head(nev in any::<NonEmptyVec<i16>>()) {
                prop_assert_eq!(nev.head(), &nev.as_slice()[0]);
            }
        }
    }
}
