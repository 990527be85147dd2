/*!
`lgraphs` is a graph data structure & algorithms library designed for graphs that are
- **l**abelled : vertices are identified by unique string labels
- unweighted : neither vertices nor edges carry weights attached to them
- undirected : an edge between `a` and `b` is always an edge between `b` and `a`

# Representation

We represent **vertices** as immutable wrappers around a `String` label.
Two vertices with equal labels denote the same vertex, no matter where they were created.
**Edges** are unordered pairs of vertices, normalized at construction so that the
lexicographically smaller label always comes first.

Graphs are stored as an [`AdjMapGraph`](crate::repr::AdjMapGraph): a slot arena addressed
by stable integer keys, a label index, per-vertex neighbor sets, and a side table holding
each undirected edge exactly once.

# Design

Mutations tolerate redundant or contradictory requests instead of failing: every mutating
operation returns an [`Outcome`](crate::ops::Outcome) reporting whether it applied or
which no-op occurred (duplicate vertex, absent edge, self-loop, ...). Diagnostics are
emitted as [`tracing`] debug events; nothing is ever printed or returned as an error.

Graphs display, compare, and hash through a deterministic canonical form, so two graphs
built in different insertion orders are equal and stay equal under hashing and digests
(see [`repr::GraphDigest`]).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes vertices, edges, mutation outcomes, and the graph representation,
- [`algo`] includes BFS (`graph.bfs(&start)`) and connectivity checks
  (`graph.is_connected()`, `graph.connected_components()`) as methods on the graph itself,
- [`gens`] includes the `G(n,p)` random generator and deterministic substructures such as
  paths, cycles, and cliques,
- [`utils`] includes the buffered coin-flip source backing the random generator.

```rust
use lgraphs::prelude::*;

let mut graph = AdjMapGraph::from_parts(["a", "b", "c"], [("a", "b"), ("b", "c")]);
graph.add_vertex("d");

assert_eq!(graph.number_of_vertices(), 4);
assert!(!graph.is_connected());
assert_eq!(graph.bfs(&Vertex::new("a")).count(), 3);
```

# When to use

You should only use this library if the following apply:
- Your vertices are naturally identified by string labels
- You require only basic functionality for graphs
- Tolerant, diagnosable mutations fit your workflow better than hard errors

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for
general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod ops;
pub mod repr;
pub mod utils;
pub mod vertex;

pub use edge::Edge;
pub use ops::Outcome;
pub use repr::AdjMapGraph;
pub use vertex::Vertex;

/// `lgraphs::prelude` includes definitions for vertices, edges and mutation outcomes as well as the graph representation itself.
pub mod prelude {
    pub use super::{edge::*, ops::*, repr::*, vertex::*};
}
