//! Growable FIFO queue over a circular buffer.
//!
//! This module provides [`RingQueue`], a ring buffer that doubles its storage
//! whenever an enqueue would overflow it, and [`Iter`], an explicit cursor over
//! its live elements.

use core::fmt;
use core::iter::FusedIterator;

use tracing::debug;

use crate::error::{CollectionError, Result};
use crate::generic::collection::{destination_window, Collection};

/// Slot count used by [`RingQueue::new`] and restored by [`RingQueue::clear`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Capacity a zero-capacity queue grows to on its first enqueue.
///
/// Doubling is applied from there on (1, 2, 4, ...).
pub const MIN_GROWTH_CAPACITY: usize = 1;

/// A FIFO queue backed by a circular array.
///
/// Live elements occupy `head, head + 1, ..., head + len - 1` modulo the
/// capacity. An empty queue and a full queue both have `head == tail`; the
/// two are told apart by `len` alone.
///
/// # Examples
///
/// ```rust
/// use custom_collections::generic::ring_queue::RingQueue;
///
/// let mut queue = RingQueue::with_capacity(2);
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3); // grows to 4 slots
///
/// assert_eq!(queue.capacity(), 4);
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.peek(), Ok(&2));
/// ```
///
/// # Memory Layout
///
/// Storage is a `Vec<Option<T>>` whose length is the capacity. Vacated slots
/// are reset to `None` so the queue never retains dequeued values.
#[derive(Clone)]
pub struct RingQueue<T> {
    storage: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

fn empty_storage<T>(capacity: usize) -> Vec<Option<T>> {
    let mut storage = Vec::with_capacity(capacity);
    storage.resize_with(capacity, || None);
    storage
}

fn clone_run<T: Clone>(out: &mut [T], run: &[Option<T>]) {
    for (dst, slot) in out.iter_mut().zip(run) {
        if let Some(value) = slot {
            dst.clone_from(value);
        }
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with exactly `capacity` slots.
    ///
    /// A capacity of zero is allowed; the first enqueue then grows the
    /// storage to [`MIN_GROWTH_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: empty_storage(capacity),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates an empty queue from a signed or unsigned capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `capacity` is negative
    /// or does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use custom_collections::error::CollectionError;
    /// use custom_collections::generic::ring_queue::RingQueue;
    ///
    /// let queue = RingQueue::<u8>::try_with_capacity(8).unwrap();
    /// assert_eq!(queue.capacity(), 8);
    ///
    /// let err = RingQueue::<u8>::try_with_capacity(-1).unwrap_err();
    /// assert!(matches!(err, CollectionError::InvalidArgument { .. }));
    /// ```
    pub fn try_with_capacity<C: TryInto<usize>>(capacity: C) -> Result<Self> {
        capacity.try_into().map(Self::with_capacity).map_err(|_| {
            CollectionError::invalid_argument("capacity", "Negative value is not allowed")
        })
    }

    /// Creates a queue holding every element of `source`, in order.
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

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `element` at the tail, doubling the storage first if full.
    pub fn enqueue(&mut self, element: T) {
        if self.len == self.capacity() {
            let new_capacity = self
                .capacity()
                .saturating_mul(2)
                .max(MIN_GROWTH_CAPACITY);
            self.set_capacity(new_capacity);
        }

        self.storage[self.tail] = Some(element);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }

        let element = self.storage[self.head]
            .take()
            .ok_or(CollectionError::EmptyContainer)?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;

        Ok(element)
    }

    /// Returns the head element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }

        self.storage[self.head]
            .as_ref()
            .ok_or(CollectionError::EmptyContainer)
    }

    /// Returns the element `index` positions behind the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.storage[(self.head + index) % self.capacity()].as_ref()
    }

    /// Drops every element and reallocates [`DEFAULT_CAPACITY`] slots.
    pub fn clear(&mut self) {
        debug!(
            discarded = self.len,
            capacity = self.capacity(),
            "ring queue cleared"
        );

        self.storage = empty_storage(DEFAULT_CAPACITY);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns a cursor over the elements, head first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use custom_collections::generic::ring_queue::RingQueue;
    ///
    /// let queue: RingQueue<_> = [2, 4, 245].into_iter().collect();
    /// let items: Vec<_> = queue.iter().copied().collect();
    /// assert_eq!(items, vec![2, 4, 245]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            len: self.len,
            state: CursorState::NotStarted,
        }
    }

    /// Returns `true` if an element equal to `item` is queued.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|value| value == item)
    }

    /// Dequeues the head element if, and only if, it equals `item`.
    ///
    /// This is not a general removal: elements behind the head are never
    /// touched. Returns `false` on an empty queue.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let at_head = matches!(self.peek(), Ok(head) if head == item);
        at_head && self.dequeue().is_ok()
    }

    /// Copies the elements, head first, into `destination` at `offset`.
    ///
    /// A wrapped queue is copied as two runs: `[head, capacity)` followed by
    /// `[0, tail)`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `destination` is `None`
    /// or has fewer than `offset + len()` slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use custom_collections::generic::ring_queue::RingQueue;
    ///
    /// let queue: RingQueue<_> = [7, 8, 9].into_iter().collect();
    /// let mut out = [0; 4];
    /// queue.copy_into(Some(&mut out[..]), 1).unwrap();
    /// assert_eq!(out, [0, 7, 8, 9]);
    /// ```
    pub fn copy_into(&self, destination: Option<&mut [T]>, offset: usize) -> Result<()>
    where
        T: Clone,
    {
        let window = destination_window(destination, offset, self.len)?;
        let (front, back) = self.live_slots();
        let (dest_front, dest_back) = window.split_at_mut(front.len());

        clone_run(dest_front, front);
        clone_run(dest_back, back);

        Ok(())
    }

    /// The live region as at most two contiguous runs of slots.
    fn live_slots(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.len == 0 {
            return (&[], &[]);
        }

        if self.head < self.tail {
            (&self.storage[self.head..self.tail], &[])
        } else {
            let (wrapped, front) = self.storage.split_at(self.head);
            (front, &wrapped[..self.tail])
        }
    }

    fn live_slots_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        if self.len == 0 {
            return (&mut [], &mut []);
        }

        if self.head < self.tail {
            (&mut self.storage[self.head..self.tail], &mut [])
        } else {
            let (wrapped, front) = self.storage.split_at_mut(self.head);
            (front, &mut wrapped[..self.tail])
        }
    }

    /// Moves the live elements into fresh storage, head first at index 0.
    fn set_capacity(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let mut storage = empty_storage(new_capacity);

        let (front, back) = self.live_slots_mut();
        for (dst, slot) in storage
            .iter_mut()
            .zip(front.iter_mut().chain(back.iter_mut()))
        {
            *dst = slot.take();
        }

        self.storage = storage;
        self.head = 0;
        self.tail = self.len % new_capacity;

        debug!(old_capacity, new_capacity, len = self.len, "ring queue grew");
    }
}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Queues compare by their logical contents; capacity and head position are
/// ignored.
impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T: PartialEq + Clone> Collection<T> for RingQueue<T> {
    fn add(&mut self, item: T) {
        self.enqueue(item);
    }

    fn remove(&mut self, item: &T) -> bool {
        RingQueue::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        RingQueue::contains(self, item)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        RingQueue::clear(self)
    }

    fn copy_into(&self, destination: Option<&mut [T]>, offset: usize) -> Result<()> {
        RingQueue::copy_into(self, destination, offset)
    }
}

/// Position of an [`Iter`] cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    /// Before the first element.
    NotStarted,
    /// On the element at this logical index.
    Active(usize),
    /// Past the last element.
    Completed,
}

/// Cursor over the elements of a [`RingQueue`], head first.
///
/// The cursor covers the `len()` elements present when it was created. It can
/// be driven explicitly with [`move_next`](Iter::move_next) and
/// [`current`](Iter::current), or used as an ordinary [`Iterator`]. The queue
/// stays borrowed for the life of the cursor, so it cannot be mutated
/// mid-iteration.
///
/// # Examples
///
/// ```rust
/// use custom_collections::generic::ring_queue::RingQueue;
///
/// let queue: RingQueue<_> = [1, 2].into_iter().collect();
/// let mut cursor = queue.iter();
///
/// assert!(cursor.current().is_err()); // not started
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current(), Ok(&1));
/// assert!(cursor.move_next());
/// assert!(!cursor.move_next());
/// assert!(cursor.current().is_err()); // completed
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a RingQueue<T>,
    len: usize,
    state: CursorState,
}

impl<'a, T> Iter<'a, T> {
    /// Returns the cursor position.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Advances to the next element, returning `false` once past the end.
    pub fn move_next(&mut self) -> bool {
        let next = match self.state {
            CursorState::NotStarted => 0,
            CursorState::Active(index) => index + 1,
            CursorState::Completed => return false,
        };

        if next < self.len {
            self.state = CursorState::Active(next);
            true
        } else {
            self.state = CursorState::Completed;
            false
        }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidState`] before the first
    /// [`move_next`](Iter::move_next) or after the cursor completed.
    pub fn current(&self) -> Result<&'a T> {
        match self.state {
            CursorState::NotStarted => Err(CollectionError::invalid_state(
                "the cursor is positioned before the first element",
            )),
            CursorState::Completed => Err(CollectionError::invalid_state(
                "enumeration has been completed",
            )),
            CursorState::Active(index) => self.queue.get(index).ok_or(
                CollectionError::invalid_state("the cursor is past the live elements"),
            ),
        }
    }

    /// Moves the cursor back before the first element.
    pub fn reset(&mut self) {
        self.state = CursorState::NotStarted;
    }

    /// Ends the iteration; [`current`](Iter::current) fails from here on.
    pub fn finish(&mut self) {
        self.state = CursorState::Completed;
    }

    fn remaining(&self) -> usize {
        match self.state {
            CursorState::NotStarted => self.len,
            CursorState::Active(index) => self.len - index - 1,
            CursorState::Completed => 0,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            len: self.len,
            state: self.state,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that dequeues elements head first.
#[derive(Debug)]
pub struct IntoIter<T> {
    queue: RingQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
