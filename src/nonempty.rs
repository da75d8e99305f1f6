//! Non-empty vector type backing the errors of a failed validation
//!
//! A `Failure` always holds at least one error. `NonEmptyVec<T>` makes that a
//! type-level fact: there is no way to build one without an element, and no
//! operation on it can remove the last one.
//!
//! # Examples
//!
//! ```
//! use accrue::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new(1, vec![2, 3, 4]);
//! assert_eq!(nev.head(), &1);
//! assert_eq!(nev.as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(nev.len(), 4);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// Elements are stored contiguously so the whole sequence is available as a
/// slice via [`as_slice`](NonEmptyVec::as_slice).
///
/// # Example
///
/// ```
/// use accrue::NonEmptyVec;
///
/// let nev = NonEmptyVec::new("too short", vec!["missing digit"]);
/// assert_eq!(nev.as_slice(), &["too short", "missing digit"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    // never empty
    items: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty vector from a head element and a tail.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.len(), 3);
    /// ```
    pub fn new(head: T, tail: impl IntoIterator<Item = T>) -> Self {
        let mut items = vec![head];
        items.extend(tail);
        Self { items }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton(42);
    /// assert_eq!(nev.len(), 1);
    /// assert_eq!(nev.head(), &42);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(nev.len(), 3);
    ///
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Collect an iterator, returning `None` if it yields nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let evens = NonEmptyVec::from_iter_opt((1..=6).filter(|n| n % 2 == 0));
    /// assert_eq!(evens.unwrap().into_vec(), vec![2, 4, 6]);
    ///
    /// assert!(NonEmptyVec::from_iter_opt(std::iter::empty::<i32>()).is_none());
    /// ```
    pub fn from_iter_opt(iter: impl IntoIterator<Item = T>) -> Option<Self> {
        Self::from_vec(iter.into_iter().collect())
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.items[0]
    }

    /// Number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Apply `f` to every element, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let lengths = NonEmptyVec::new("ab", vec!["abc"]).map(str::len);
    /// assert_eq!(lengths.as_slice(), &[2, 3]);
    /// ```
    pub fn map<U, F>(self, f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Keep elements matching `predicate`.
    ///
    /// Filtering can remove everything, so this returns a plain `Vec<T>`.
    pub fn filter<F>(self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.into_iter().filter(|item| predicate(item)).collect()
    }

    /// Convert into a regular `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

// Semigroup: order-preserving concatenation
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for NonEmptyVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(items)
            .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
    }
}
