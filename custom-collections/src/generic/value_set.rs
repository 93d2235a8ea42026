//! Insertion-ordered set over a growable list.
//!
//! This module provides [`ValueSet`], a set that keeps its elements unique under
//! `PartialEq` while remembering the order they were first added in, together
//! with the classical set operations.

use core::ops::{BitAnd, BitOr, BitXor, Sub};

use tracing::trace;

use crate::error::{CollectionError, Result};
use crate::generic::collection::{destination_window, Collection};

/// A set backed by a `Vec`, intended for small to moderate sizes.
///
/// Membership checks are linear, so the algebraic operations are `O(n * m)`.
/// Iteration follows insertion order, and every operation that builds a new
/// set preserves that order as documented on the method.
///
/// # Examples
///
/// ```rust
/// use custom_collections::generic::value_set::ValueSet;
///
/// let mut set = ValueSet::new();
/// set.add_range(["a", "a", "b"]);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.as_slice(), &["a", "b"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSet<T> {
    items: Vec<T>,
}

impl<T> Default for ValueSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> ValueSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Creates a set from `source`, keeping the first of any equal elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `source` is `None`.
    pub fn from_source<I: IntoIterator<Item = T>>(source: Option<I>) -> Result<Self> {
        source
            .map(|values| values.into_iter().collect())
            .ok_or(CollectionError::invalid_argument(
                "source",
                "a source sequence is required",
            ))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterator over the elements in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Inserts `item` unless an equal element is already stored.
    ///
    /// Returns whether the set changed.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }

        self.items.push(item);
        true
    }

    /// Adds each element of `items` in order.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// Removes the element equal to `item`, keeping the order of the rest.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copies the elements, in insertion order, into `destination` at
    /// `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `destination` is `None`
    /// or has fewer than `offset + len()` slots.
    pub fn copy_into(&self, destination: Option<&mut [T]>, offset: usize) -> Result<()>
    where
        T: Clone,
    {
        destination_window(destination, offset, self.items.len())?.clone_from_slice(&self.items);
        Ok(())
    }
}

impl<T: PartialEq + Clone> ValueSet<T> {
    /// Elements of `self` followed by the elements of `other` not yet present.
    ///
    /// Returns a copy of `self` when `other` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use custom_collections::generic::value_set::ValueSet;
    ///
    /// let a: ValueSet<_> = [1, 2].into_iter().collect();
    /// let b: ValueSet<_> = [2, 3].into_iter().collect();
    /// assert_eq!(a.union(Some(&b)).as_slice(), &[1, 2, 3]);
    /// assert_eq!(a.union(None), a);
    /// ```
    pub fn union(&self, other: Option<&Self>) -> Self {
        let mut union = self.clone();
        if let Some(other) = other {
            union.add_range(other.iter().cloned());
        }
        union
    }

    /// Elements of `other` that are also in `self`, in `other`'s order.
    ///
    /// Returns an empty set when `other` is `None`.
    pub fn intersection(&self, other: Option<&Self>) -> Self {
        match other {
            Some(other) => other
                .iter()
                .filter(|item| self.contains(item))
                .cloned()
                .collect(),
            None => Self::new(),
        }
    }

    /// Elements of `self` that are not in `other`.
    ///
    /// An empty remainder is reported as `None` rather than as an empty set,
    /// and [`is_subset`](ValueSet::is_subset) relies on that. When `other` is
    /// `None` the result is always `Some` copy of `self`, even if `self` is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use custom_collections::generic::value_set::ValueSet;
    ///
    /// let a: ValueSet<_> = [1, 2, 3].into_iter().collect();
    /// let b: ValueSet<_> = [2].into_iter().collect();
    ///
    /// assert_eq!(a.difference(Some(&b)).unwrap().as_slice(), &[1, 3]);
    /// assert!(b.difference(Some(&a)).is_none());
    /// ```
    pub fn difference(&self, other: Option<&Self>) -> Option<Self> {
        let Some(other) = other else {
            return Some(self.clone());
        };

        let remainder: Self = self
            .iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect();

        if remainder.is_empty() {
            trace!(len = self.len(), other_len = other.len(), "difference left no remainder");
            None
        } else {
            Some(remainder)
        }
    }

    /// Elements in exactly one of `self` and `other`, `self`'s first.
    ///
    /// Returns a copy of `self` when `other` is `None`.
    pub fn symmetric_difference(&self, other: Option<&Self>) -> Self {
        let Some(other) = other else {
            return self.clone();
        };

        self.iter()
            .filter(|item| !other.contains(item))
            .chain(other.iter().filter(|item| !self.contains(item)))
            .cloned()
            .collect()
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// Defined as [`difference`](ValueSet::difference) yielding `None`, so the
    /// empty set is a subset of any set. Returns `false` when `other` is
    /// `None`.
    pub fn is_subset(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self.difference(Some(other)).is_none())
    }
}

impl<T: PartialEq> Extend<T> for ValueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T: PartialEq> FromIterator<T> for ValueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_range(iter);
        set
    }
}

impl<T> IntoIterator for ValueSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ValueSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// `&a - &b` is [`ValueSet::difference`], including its `None` sentinel.
impl<T: PartialEq + Clone> Sub<&ValueSet<T>> for &ValueSet<T> {
    type Output = Option<ValueSet<T>>;

    fn sub(self, rhs: &ValueSet<T>) -> Self::Output {
        self.difference(Some(rhs))
    }
}

impl<T: PartialEq + Clone> BitOr<&ValueSet<T>> for &ValueSet<T> {
    type Output = ValueSet<T>;

    fn bitor(self, rhs: &ValueSet<T>) -> Self::Output {
        self.union(Some(rhs))
    }
}

impl<T: PartialEq + Clone> BitAnd<&ValueSet<T>> for &ValueSet<T> {
    type Output = ValueSet<T>;

    fn bitand(self, rhs: &ValueSet<T>) -> Self::Output {
        self.intersection(Some(rhs))
    }
}

impl<T: PartialEq + Clone> BitXor<&ValueSet<T>> for &ValueSet<T> {
    type Output = ValueSet<T>;

    fn bitxor(self, rhs: &ValueSet<T>) -> Self::Output {
        self.symmetric_difference(Some(rhs))
    }
}

impl<T: PartialEq + Clone> Collection<T> for ValueSet<T> {
    fn add(&mut self, item: T) {
        ValueSet::add(self, item);
    }

    fn remove(&mut self, item: &T) -> bool {
        ValueSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        ValueSet::contains(self, item)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn copy_into(&self, destination: Option<&mut [T]>, offset: usize) -> Result<()> {
        ValueSet::copy_into(self, destination, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<const N: usize>(items: [i32; N]) -> ValueSet<i32> {
        items.into_iter().collect()
    }

    #[test]
    fn test_add_range_deduplicates_in_order() {
        let mut s = ValueSet::new();
        s.add_range(["a", "a", "b"]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut s = ValueSet::new();
        assert!(s.add(7));
        assert!(!s.add(7));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_keeps_first_equal_element() {
        #[derive(Clone, Debug)]
        struct Account {
            id: u32,
            label: &'static str,
        }

        impl PartialEq for Account {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        let s: ValueSet<_> = [
            Account { id: 1, label: "first" },
            Account { id: 1, label: "second" },
            Account { id: 2, label: "other" },
        ]
        .into_iter()
        .collect();

        assert_eq!(s.len(), 2);
        assert_eq!(s.as_slice()[0].label, "first");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut s = set([1, 2, 3, 4]);
        assert!(s.remove(&2));
        assert!(!s.remove(&2));
        assert_eq!(s.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn test_clear() {
        let mut s = set([1, 2]);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(&1));
    }

    #[test]
    fn test_from_source() {
        let s = ValueSet::from_source(Some(vec![3, 1, 3])).unwrap();
        assert_eq!(s.as_slice(), &[3, 1]);

        let err = ValueSet::<i32>::from_source(None::<Vec<i32>>).unwrap_err();
        assert!(matches!(err, CollectionError::InvalidArgument { argument: "source", .. }));
    }

    #[test]
    fn test_copy_into() {
        let s = set([4, 5]);
        let mut out = [0; 3];
        s.copy_into(Some(&mut out[..]), 1).unwrap();
        assert_eq!(out, [0, 4, 5]);

        assert!(s.copy_into(None, 0).is_err());
        assert!(s.copy_into(Some(&mut out[..]), 2).is_err());
    }

    #[test]
    fn test_union() {
        let a = set([1, 2, 3]);
        let b = set([4, 2, 5]);
        assert_eq!(a.union(Some(&b)).as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(a.union(Some(&a)), a);
        assert_eq!(a.union(None), a);
    }

    #[test]
    fn test_intersection_uses_other_order() {
        let a = set([1, 2, 3]);
        let b = set([3, 9, 1]);
        assert_eq!(a.intersection(Some(&b)).as_slice(), &[3, 1]);
        assert_eq!(b.intersection(Some(&a)).as_slice(), &[1, 3]);
        assert!(a.intersection(None).is_empty());
    }

    #[test]
    fn test_difference_sentinel() {
        let a = set([1, 2, 3]);
        let b = set([2, 3, 4]);
        assert_eq!(a.difference(Some(&b)), Some(set([1])));
        assert_eq!(a.difference(Some(&a)), None);
        assert_eq!(a.difference(None), Some(a.clone()));

        let empty = ValueSet::<i32>::new();
        assert_eq!(empty.difference(Some(&a)), None);
        assert_eq!(empty.difference(None), Some(ValueSet::new()));
    }

    #[test]
    fn test_symmetric_difference() {
        let a = set([1, 2, 3]);
        let b = set([2, 3, 4]);
        assert_eq!(a.symmetric_difference(Some(&b)).as_slice(), &[1, 4]);
        assert!(a.symmetric_difference(Some(&a)).is_empty());
        assert_eq!(a.symmetric_difference(None), a);
    }

    #[test]
    fn test_is_subset() {
        let a = set([1, 2]);
        let b = set([2, 3, 1]);
        assert!(a.is_subset(Some(&b)));
        assert!(!b.is_subset(Some(&a)));
        assert!(!a.is_subset(None));
        assert!(ValueSet::<i32>::new().is_subset(Some(&a)));
    }

    #[test]
    fn test_operands_are_untouched() {
        let a = set([1, 2]);
        let b = set([2, 3]);
        let _ = a.union(Some(&b));
        let _ = a.difference(Some(&b));
        let _ = a.symmetric_difference(Some(&b));
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_operators_match_methods() {
        let a = set([1, 2, 3]);
        let b = set([3, 4]);
        assert_eq!(&a - &b, a.difference(Some(&b)));
        assert_eq!(&a | &b, a.union(Some(&b)));
        assert_eq!(&a & &b, a.intersection(Some(&b)));
        assert_eq!(&a ^ &b, a.symmetric_difference(Some(&b)));
        assert_eq!(&a - &a, None);
    }

    #[test]
    fn test_collection_trait() {
        let mut s = ValueSet::<u8>::new();
        Collection::add(&mut s, 1);
        Collection::add(&mut s, 1);
        assert_eq!(Collection::len(&s), 1);
        assert!(Collection::remove(&mut s, &1));
        assert!(Collection::is_empty(&s));
    }
}
