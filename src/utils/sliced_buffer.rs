/*!
# CSR-based Sliced Buffers

This module provides a **Compressed Sparse Row (CSR)**-like data structure for storing
variable-length slices efficiently.

The key idea:

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<NumEdges>` stores slice boundaries, where slice `i` is
  `buffer[offsets[i]..offsets[i+1]]`.

### Invariants
All constructions verify the following invariants:

1. `offsets.len() >= 2`
2. `offsets` is non-decreasing
3. `offsets` entries are within `buffer` bounds

These invariants allow **unchecked access** in methods for performance.
*/

use std::ops::Index;

use crate::{Node, NumEdges, NumNodes};

/// CSR-like structure storing slices of elements.
///
/// - `buffer`: all elements contiguously
/// - `offsets`: start indices of each slice
#[derive(Debug, Clone)]
pub struct SlicedBuffer<T> {
    buffer: Vec<T>,
    offsets: Vec<NumEdges>,
}

impl<T> Default for SlicedBuffer<T> {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            offsets: vec![0, 0],
        }
    }
}

impl<T> SlicedBuffer<T> {
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets.len() < 2`
    /// - `offsets` is not sorted
    /// - `offsets` exceed `buffer` length
    ///
    /// # Examples
    /// ```
    /// use spgraphs::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0, 2, 4, 7]);
    /// assert_eq!(sb.number_of_slices(), 3);
    /// assert_eq!(&sb[1], &[4, 5]);
    /// ```
    pub fn new(buffer: Vec<T>, offsets: Vec<NumEdges>) -> Self {
        assert!(offsets.len() > 1);
        assert!(offsets.is_sorted());
        assert!(offsets.last().is_some_and(|&o| o as usize <= buffer.len()));

        Self { buffer, offsets }
    }

    /// Returns the number of slices.
    #[inline(always)]
    pub fn number_of_slices(&self) -> NumNodes {
        (self.offsets.len() - 1) as NumNodes
    }

    /// Returns the total number of entries in the buffer.
    #[inline(always)]
    pub fn number_of_entries(&self) -> NumEdges {
        self.buffer.len() as NumEdges
    }

    /// Returns the length of slice `u`.
    ///
    /// # Examples
    /// ```
    /// use spgraphs::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0, 2, 4, 7]);
    /// assert_eq!(sb.size_of(2), 3);
    /// ```
    #[inline(always)]
    pub fn size_of(&self, u: Node) -> NumEdges {
        self.offsets[u as usize + 1] - self.offsets[u as usize]
    }
}

impl<T> Index<Node> for SlicedBuffer<T> {
    type Output = [T];

    #[inline(always)]
    fn index(&self, idx: Node) -> &Self::Output {
        let start = self.offsets[idx as usize] as usize;
        let end = self.offsets[idx as usize + 1] as usize;

        // using unchecked here is safe, since we established in the
        // constructor that all entries within `self.offsets` are
        //  (i) non-decreasing (i.e. produce a valid range) and
        //  (ii) are within bounds of `self.buffer`
        unsafe { self.buffer.get_unchecked(start..end) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices() {
        let sb = SlicedBuffer::new(vec!['a', 'b', 'c', 'd'], vec![0, 0, 3, 4]);
        assert_eq!(sb.number_of_slices(), 3);
        assert_eq!(sb.number_of_entries(), 4);
        assert!(sb[0].is_empty());
        assert_eq!(&sb[1], &['a', 'b', 'c']);
        assert_eq!(&sb[2], &['d']);
        assert_eq!(sb.size_of(1), 3);
    }

    #[test]
    fn default_is_single_empty_slice() {
        let sb = SlicedBuffer::<u8>::default();
        assert_eq!(sb.number_of_slices(), 1);
        assert!(sb[0].is_empty());
    }

    #[test]
    #[should_panic]
    fn unsorted_offsets() {
        SlicedBuffer::new(vec![1, 2, 3], vec![0, 2, 1, 3]);
    }

    #[test]
    #[should_panic]
    fn offsets_out_of_bounds() {
        SlicedBuffer::new(vec![1, 2, 3], vec![0, 2, 4]);
    }
}
