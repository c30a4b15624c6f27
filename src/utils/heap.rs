/*!
# Binary Min-Heap

[`BinaryMinHeap`] is an array-backed binary heap over `(key, value)` pairs ordered by key only.

It offers no `decrease_key`: callers that want to lower the key of a value
simply push it again and ignore the outdated entry when it is popped later
(*lazy deletion*). Consequently the same value may be contained multiple times.
*/

/// Binary min-heap over `(key, value)` pairs.
///
/// # Examples
/// ```
/// use spgraphs::utils::heap::BinaryMinHeap;
///
/// let mut heap = BinaryMinHeap::new();
/// heap.push(5u64, 'a');
/// heap.push(2, 'b');
/// heap.push(5, 'b');
///
/// assert_eq!(heap.pop(), Some((2, 'b')));
/// assert_eq!(heap.len(), 2);
/// assert_eq!(heap.pop().map(|(k, _)| k), Some(5));
/// assert_eq!(heap.pop().map(|(k, _)| k), Some(5));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for BinaryMinHeap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> BinaryMinHeap<K, V>
where
    K: Ord + Copy,
    V: Copy,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with space for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries, including outdated duplicates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries but keeps the allocation
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entry with minimum key without removing it
    pub fn peek(&self) -> Option<(K, V)> {
        self.entries.first().copied()
    }

    /// Inserts `value` with priority `key` in `O(log k)`
    pub fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns an entry with minimum key in `O(log k)`.
    /// Among entries with equal keys, the returned one is unspecified.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let min = self.entries.pop();

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        min
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].0 <= self.entries[i].0 {
                break;
            }
            self.entries.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == i {
                break;
            }

            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}
