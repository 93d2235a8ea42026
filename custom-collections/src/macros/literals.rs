/// Builds a [`RingQueue`] from a list of elements, head first.
///
/// The queue starts at the default capacity and grows as needed.
///
/// ```rust
/// use custom_collections::ring_queue;
///
/// let mut queue = ring_queue![1, 2, 3];
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.len(), 2);
/// ```
///
/// [`RingQueue`]: crate::generic::ring_queue::RingQueue
#[macro_export]
macro_rules! ring_queue {
    () => {
        $crate::generic::ring_queue::RingQueue::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut queue = $crate::generic::ring_queue::RingQueue::new();
        $(
            queue.enqueue($item);
        )+
        queue
    }};
}

/// Builds a [`ValueSet`] from a list of elements, dropping repeats.
///
/// ```rust
/// use custom_collections::value_set;
///
/// let set = value_set!["x", "y", "x"];
/// assert_eq!(set.as_slice(), &["x", "y"]);
/// ```
///
/// [`ValueSet`]: crate::generic::value_set::ValueSet
#[macro_export]
macro_rules! value_set {
    () => {
        $crate::generic::value_set::ValueSet::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut set = $crate::generic::value_set::ValueSet::new();
        $(
            set.add($item);
        )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use crate::generic::ring_queue::RingQueue;
    use crate::generic::value_set::ValueSet;

    #[test]
    fn test_empty_literals() {
        let queue: RingQueue<u8> = ring_queue![];
        assert!(queue.is_empty());

        let set: ValueSet<u8> = value_set![];
        assert!(set.is_empty());
    }

    #[test]
    fn test_ring_queue_literal_grows_past_default() {
        let queue = ring_queue![
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
        ];
        assert_eq!(queue.len(), 18);
        assert_eq!(queue.capacity(), 32);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), (0..18).collect::<Vec<_>>());
    }

    #[test]
    fn test_value_set_literal_deduplicates() {
        let set = value_set![3, 1, 3, 2, 1];
        assert_eq!(set.as_slice(), &[3, 1, 2]);
    }
}
