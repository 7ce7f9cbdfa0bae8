use std::collections::VecDeque;

/// Fixed-capacity sequence that evicts its oldest entry on overflow.
///
/// Read front-to-back it is a FIFO recency view; `pop_newest` makes it a
/// bounded LIFO stack. Both pushes and pops are O(1).
#[derive(Debug, Clone)]
pub struct BoundedWindow<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedWindow<T> {
    /// A zero capacity is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `entry`, returning the evicted oldest entry when full.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn pop_newest(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    /// Re-inserts an older entry at the front, ignored when already full.
    pub fn backfill(&mut self, entry: T) -> bool {
        if self.entries.len() >= self.capacity {
            return false;
        }
        self.entries.push_front(entry);
        true
    }

    pub fn newest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
