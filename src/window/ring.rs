//! Fixed-capacity circular buffer of floats

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Storage reserved up front; larger windows grow while filling
const PREALLOC_LIMIT: usize = 1024;

/// Circular buffer holding the last `capacity` values
///
/// Storage grows while the buffer fills and is never reallocated after that;
/// once full, `push` overwrites the oldest slot instead of shifting. A huge
/// capacity therefore costs nothing until values arrive.
///
/// # Example
///
/// ```
/// use flowhmean::window::RingBuffer;
///
/// let mut ring = RingBuffer::new(2);
/// assert_eq!(ring.push(1.0), None);
/// assert_eq!(ring.push(2.0), None);
/// assert_eq!(ring.push(3.0), Some(1.0));
/// assert_eq!(ring.iter().collect::<Vec<_>>(), vec![2.0, 3.0]);
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer {
    data: Vec<f64>,
    capacity: usize,
    /// Oldest slot once full; 0 while filling
    head: usize,
}

impl RingBuffer {
    /// Create an empty buffer
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be at least 1");
        Self {
            data: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
            head: 0,
        }
    }

    /// Append a value, returning the evicted oldest value if the buffer was full
    #[inline]
    pub fn push(&mut self, value: f64) -> Option<f64> {
        if self.data.len() < self.capacity {
            self.data.push(value);
            return None;
        }

        let evicted = core::mem::replace(&mut self.data[self.head], value);
        self.head += 1;
        if self.head == self.capacity {
            self.head = 0;
        }
        Some(evicted)
    }

    /// Oldest value in the buffer
    pub fn oldest(&self) -> Option<f64> {
        self.data.get(self.head).copied()
    }

    /// Most recently pushed value
    pub fn newest(&self) -> Option<f64> {
        if self.is_full() {
            let idx = if self.head == 0 {
                self.capacity - 1
            } else {
                self.head - 1
            };
            Some(self.data[idx])
        } else {
            self.data.last().copied()
        }
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of values held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes currently allocated for values
    pub fn allocated_bytes(&self) -> usize {
        self.data.capacity() * core::mem::size_of::<f64>()
    }

    /// Check if at capacity
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Values from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let (newer, older) = self.data.split_at(self.head);
        older.iter().chain(newer).copied()
    }

    /// Remove all values, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
        self.head = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_fill_and_wrap() {
        let mut ring = RingBuffer::new(3);
        assert!(ring.is_empty());

        assert_eq!(ring.push(1.0), None);
        assert_eq!(ring.push(2.0), None);
        assert_eq!(ring.push(3.0), None);
        assert!(ring.is_full());

        assert_eq!(ring.push(4.0), Some(1.0));
        assert_eq!(ring.push(5.0), Some(2.0));
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
        assert_eq!(ring.oldest(), Some(3.0));
        assert_eq!(ring.newest(), Some(5.0));
    }

    #[test]
    fn test_partial() {
        let mut ring = RingBuffer::new(4);
        ring.push(7.0);
        ring.push(8.0);

        assert_eq!(ring.len(), 2);
        assert!(!ring.is_full());
        assert_eq!(ring.oldest(), Some(7.0));
        assert_eq!(ring.newest(), Some(8.0));
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![7.0, 8.0]);
    }

    #[test]
    fn test_capacity_one() {
        let mut ring = RingBuffer::new(1);
        assert_eq!(ring.push(1.0), None);
        assert_eq!(ring.push(2.0), Some(1.0));
        assert_eq!(ring.oldest(), ring.newest());
    }

    #[test]
    fn test_clear() {
        let mut ring = RingBuffer::new(2);
        ring.push(1.0);
        ring.push(2.0);
        ring.push(3.0);
        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.oldest(), None);
        assert_eq!(ring.capacity(), 2);
        assert_eq!(ring.push(9.0), None);
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![9.0]);
    }

    #[test]
    fn test_huge_capacity_grows_lazily() {
        let mut ring = RingBuffer::new(usize::MAX);
        assert_eq!(ring.capacity(), usize::MAX);
        assert!(ring.allocated_bytes() <= PREALLOC_LIMIT * core::mem::size_of::<f64>());

        for i in 0..10 {
            assert_eq!(ring.push(i as f64), None);
        }
        assert_eq!(ring.len(), 10);
        assert!(!ring.is_full());
        assert_eq!(ring.oldest(), Some(0.0));
        assert_eq!(ring.newest(), Some(9.0));
    }

    #[test]
    fn test_wraps_repeatedly() {
        let mut ring = RingBuffer::new(3);
        for i in 0..11 {
            ring.push(i as f64);
        }
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![8.0, 9.0, 10.0]);
        assert_eq!(ring.oldest(), Some(8.0));
        assert_eq!(ring.newest(), Some(10.0));
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        RingBuffer::new(0);
    }
}
