/*!
# Distances

Shortest-path distances are accumulated in `Distance = u64`.

A distance table entry is either a finite distance or [`UNREACHED`]. Since a simple path has
fewer than `NumEdges::MAX` edges and every weight fits into [`Weight`], no accumulated distance
can ever reach the sentinel, so relaxation never needs overflow checks.
*/

use crate::{NumEdges, Weight};

/// Length of a (shortest) path: number of edges for BFS, sum of weights for Dijkstra
pub type Distance = u64;

/// Distance-Value of nodes that were not reached by a traversal
pub const UNREACHED: Distance = Distance::MAX;

// max_weight * max_path_length must stay strictly below the sentinel
const _: () = assert!((Weight::MAX as u128) * (NumEdges::MAX as u128) < UNREACHED as u128);

/// Returns `Some(d)` if `d` is a finite distance and `None` if it is [`UNREACHED`]
#[inline]
pub const fn finite_distance(d: Distance) -> Option<Distance> {
    if d == UNREACHED { None } else { Some(d) }
}
