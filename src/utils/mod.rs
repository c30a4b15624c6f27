/*!
# Utilities

Provides helper data structures used by the graph representations and algorithms:
- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): the internal representation for [`CsrGraph`](crate::repr::CsrGraph),
- [`BinaryMinHeap`](self::heap::BinaryMinHeap): the priority queue driving [`Dijkstra`](crate::algo::Dijkstra).

You probably do not need to interact with this module directly.
*/

pub mod heap;
pub mod sliced_buffer;

pub use heap::BinaryMinHeap;
