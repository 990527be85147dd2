/*!
# Graph Algorithms

Traversal and connectivity routines for [`AdjMapGraph`](crate::repr::AdjMapGraph).
Algorithms are provided as iterators where possible, so results can be
consumed lazily, and as inherent methods on the graph itself.
*/

mod connectivity;
mod traversal;

pub use connectivity::*;
pub use traversal::*;
