//! Min-priority agenda of pending search states.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    priority: f64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap pops the smallest priority.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}

/// A priority queue that always yields its lowest-priority item first.
///
/// Ties are broken arbitrarily and duplicates are allowed. The agenda also
/// remembers the largest size it reached since the last [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::bnb::Agenda;
///
/// let mut agenda = Agenda::new();
/// agenda.enqueue(3.0, "c");
/// agenda.enqueue(1.0, "a");
/// agenda.enqueue(2.0, "b");
/// assert_eq!(agenda.peek_min(), Some((1.0, &"a")));
/// assert_eq!(agenda.dequeue_min(), Some((1.0, "a")));
/// assert_eq!(agenda.len(), 2);
/// assert_eq!(agenda.peak_len(), 3);
/// ```
pub struct Agenda<T> {
    heap: BinaryHeap<Entry<T>>,
    peak: usize,
}

impl<T> Agenda<T> {
    /// Creates an empty agenda.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            peak: 0,
        }
    }

    /// Inserts `item` with the given priority.
    pub fn enqueue(&mut self, priority: f64, item: T) {
        self.heap.push(Entry { priority, item });
        self.peak = self.peak.max(self.heap.len());
    }

    /// Removes and returns the lowest-priority item.
    pub fn dequeue_min(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }

    /// Returns the lowest-priority item without removing it.
    pub fn peek_min(&self) -> Option<(f64, &T)> {
        self.heap.peek().map(|e| (e.priority, &e.item))
    }

    /// Returns `true` if the agenda holds no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of items currently queued.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest number of items held at once since the last clear.
    pub fn peak_len(&self) -> usize {
        self.peak
    }

    /// Removes every item and resets the peak size.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.peak = 0;
    }

    /// Keeps only the items for which `keep` returns `true`.
    ///
    /// Returns the number of items removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.heap.len();
        self.heap.retain(|e| keep(&e.item));
        before - self.heap.len()
    }
}

impl<T> Default for Agenda<T> {
    fn default() -> Self {
        Self::new()
    }
}
