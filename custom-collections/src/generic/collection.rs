//! Common capability trait for the collections in this crate.
//!
//! This module provides [`Collection`], a trait that abstracts over containers
//! supporting add/remove/contains/copy-out, allowing generic code to work with
//! [`RingQueue`], [`ValueSet`] and standard library types like `Vec`.
//!
//! [`RingQueue`]: crate::generic::ring_queue::RingQueue
//! [`ValueSet`]: crate::generic::value_set::ValueSet

use crate::error::{CollectionError, Result};

/// A trait for in-memory collections with value-equality membership.
///
/// What `add` and `remove` mean is up to the implementor: a queue appends at
/// the tail and only removes its head, a set ignores duplicates.
///
/// # Examples
///
/// ```rust
/// use custom_collections::generic::{collection::Collection, value_set::ValueSet};
///
/// fn fill<C: Collection<i32>>(collection: &mut C) {
///     collection.add(42);
///     collection.add(42);
///     collection.add(100);
/// }
///
/// let mut set = ValueSet::new();
/// fill(&mut set);
/// assert_eq!(Collection::len(&set), 2);
///
/// let mut vec = Vec::new();
/// fill(&mut vec);
/// assert_eq!(Collection::len(&vec), 3);
/// ```
pub trait Collection<T> {
    /// Adds an element to the collection.
    fn add(&mut self, item: T);

    /// Removes an element equal to `item`, returning whether one was removed.
    fn remove(&mut self, item: &T) -> bool;

    /// Returns `true` if an element equal to `item` is stored.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Copies every element, in iteration order, into `destination` starting
    /// at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `destination` is `None`
    /// or too short to hold `len()` elements after `offset`.
    fn copy_into(&self, destination: Option<&mut [T]>, offset: usize) -> Result<()>;
}

/// Validates a copy-out destination and returns the window to fill.
pub(crate) fn destination_window<T>(
    destination: Option<&mut [T]>,
    offset: usize,
    len: usize,
) -> Result<&mut [T]> {
    let destination = destination.ok_or(CollectionError::invalid_argument(
        "destination",
        "a destination buffer is required",
    ))?;

    let end = offset
        .checked_add(len)
        .filter(|end| *end <= destination.len())
        .ok_or(CollectionError::invalid_argument(
            "destination",
            "not enough room after the offset",
        ))?;

    Ok(&mut destination[offset..end])
}

/// Implementation for standard library [`Vec`].
///
/// `add` pushes unconditionally and `remove` drops the first equal element.
///
/// [`Vec`]: std::vec::Vec
impl<T: PartialEq + Clone> Collection<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn remove(&mut self, item: &T) -> bool {
        match self.iter().position(|i| i == item) {
            Some(pos) => {
                Vec::remove(self, pos);
                true
            }
            None => false,
        }
    }

    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn copy_into(&self, destination: Option<&mut [T]>, offset: usize) -> Result<()> {
        destination_window(destination, offset, Vec::len(self))?.clone_from_slice(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_len() {
        let mut collection: Vec<i32> = Vec::new();
        Collection::add(&mut collection, 1);
        Collection::add(&mut collection, 1);
        assert_eq!(Collection::len(&collection), 2);
        assert!(!Collection::is_empty(&collection));
    }

    #[test]
    fn test_remove_first_match() {
        let mut collection = vec![10, 20, 10];
        assert!(Collection::remove(&mut collection, &10));
        assert_eq!(collection, vec![20, 10]);
        assert!(!Collection::remove(&mut collection, &99));
    }

    #[test]
    fn test_copy_into_with_offset() {
        let collection = vec![5, 10, 15];
        let mut out = [0; 5];
        Collection::copy_into(&collection, Some(&mut out[..]), 2).unwrap();
        assert_eq!(out, [0, 0, 5, 10, 15]);
    }

    #[test]
    fn test_copy_into_rejects_missing_or_short_destination() {
        let collection = vec![1, 2, 3];
        assert!(matches!(
            Collection::copy_into(&collection, None, 0),
            Err(CollectionError::InvalidArgument { argument: "destination", .. })
        ));

        let mut out = [0; 3];
        assert!(matches!(
            Collection::copy_into(&collection, Some(&mut out[..]), 1),
            Err(CollectionError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Collection::copy_into(&collection, Some(&mut out[..]), usize::MAX),
            Err(CollectionError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_destination_window_empty_copy() {
        let mut out: [u8; 0] = [];
        let window = destination_window(Some(&mut out[..]), 0, 0).unwrap();
        assert!(window.is_empty());
    }
}
