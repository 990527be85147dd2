/*!
# Graph Generators

This module provides constructors for random and structured graphs.

Random graphs follow the Erdős–Rényi `G(n,p)` model through the [`Gnp`]
builder. The typical usage workflow is:

1. Create a generator instance with `Gnp::new()`.
2. Set parameters using its builder methods, e.g. `.vertices(n).prob(p)`.
3. Produce a graph via `generate()`, or raw edges via `sample_edges()` /
   `stream()`.

Structured graphs (paths, cycles, cliques) come from the free constructors
[`path`], [`cycle`] and [`complete`].

Generated vertices are labelled `v0` through `v(n-1)`.
*/

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Label given to the `i`-th generated vertex.
pub(crate) fn vertex_label(i: usize) -> String {
    format!("v{i}")
}
