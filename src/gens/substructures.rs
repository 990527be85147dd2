/*!
# Substructure Generators

This module provides constructors for common structured graphs:

- **Paths**
- **Cycles**
- **Cliques**

These are useful as building blocks in tests, as benchmark instances, or as
known sub-components of larger networks. All of them go through the public
mutation API, so the usual rules apply: duplicate labels collapse into one
vertex and degenerate closing edges (loops, repeats) are dropped.
*/

use itertools::Itertools;

use crate::{gens::vertex_label, AdjMapGraph, Vertex};

/// Builds a path graph visiting the given labels in order.
///
/// Each consecutive pair of labels is connected by a single edge. A single
/// label yields an isolated vertex, no labels yield the empty graph.
///
/// # Example
/// ```rust
/// use lgraphs::{gens::path, prelude::*};
///
/// let graph = path(["a", "b", "c"]);
///
/// assert!(graph.has_edge(&Vertex::new("a"), &Vertex::new("b")));
/// assert!(graph.has_edge(&Vertex::new("b"), &Vertex::new("c")));
/// assert!(!graph.has_edge(&Vertex::new("a"), &Vertex::new("c")));
/// ```
pub fn path<P>(labels: P) -> AdjMapGraph
where
    P: IntoIterator,
    P::Item: Into<Vertex>,
{
    let mut graph = AdjMapGraph::new();
    let mut iter = labels.into_iter().map(Into::into).peekable();

    // a lone vertex has no incident edge to insert it on the fly
    if let Some(first) = iter.peek() {
        graph.add_vertex(first);
    }
    for (u, v) in iter.tuple_windows() {
        graph.add_edge((u, v));
    }

    graph
}

/// Builds a cycle graph visiting the given labels in order.
///
/// Consecutive labels are connected as in [`path`], and the last label is
/// connected back to the first. Fewer than three labels degenerate
/// gracefully: the closing edge is a loop or a duplicate and is not stored.
///
/// # Example
/// ```rust
/// use lgraphs::{gens::cycle, prelude::*};
///
/// let graph = cycle(["a", "b", "c"]);
///
/// assert_eq!(graph.number_of_edges(), 3);
/// assert!(graph.has_edge(&Vertex::new("c"), &Vertex::new("a")));
/// ```
pub fn cycle<C>(labels: C) -> AdjMapGraph
where
    C: IntoIterator,
    C::Item: Into<Vertex>,
{
    let mut graph = AdjMapGraph::new();
    let mut iter = labels.into_iter().map(Into::into);

    // keep the first vertex around for the closing edge
    if let Some(first) = iter.next() {
        graph.add_vertex(&first);
        let mut prev = first.clone();
        for cur in iter {
            graph.add_edge((prev, cur.clone()));
            prev = cur;
        }
        graph.add_edge((prev, first));
    }

    graph
}

/// Builds the complete graph on `n` vertices labelled `v0` through `v(n-1)`.
///
/// # Example
/// ```rust
/// use lgraphs::{gens::complete, prelude::*};
///
/// let graph = complete(5);
///
/// assert_eq!(graph.number_of_edges(), 5 * 4 / 2);
/// assert!(graph.vertices().all(|v| graph.degree_of(v) == 4));
/// ```
pub fn complete(n: usize) -> AdjMapGraph {
    let mut graph = AdjMapGraph::new();
    for i in 0..n {
        graph.add_vertex(vertex_label(i));
    }
    graph.add_all_edges();

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        {
            let g = path(Vec::<&str>::new());
            assert!(g.is_empty());
        }

        {
            let g = path(["x"]);
            assert_eq!(g.number_of_vertices(), 1);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let g = path(["v2", "v1"]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&Vertex::new("v2"), &Vertex::new("v1")));
        }

        {
            let g = path(["a", "b", "c", "d"]);
            assert_eq!(g.number_of_vertices(), 4);
            assert_eq!(g.number_of_edges(), 3);
            assert!(g.is_connected());
            assert_eq!(g.degree_of(&Vertex::new("a")), 1);
            assert_eq!(g.degree_of(&Vertex::new("b")), 2);
            assert_eq!(g.degree_of(&Vertex::new("d")), 1);
        }
    }

    #[test]
    fn test_cycle() {
        {
            let g = cycle(Vec::<&str>::new());
            assert!(g.is_empty());
        }

        {
            // the closing edge would be a loop and is dropped
            let g = cycle(["x"]);
            assert_eq!(g.number_of_vertices(), 1);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            // the closing edge would be a duplicate and is dropped
            let g = cycle(["x", "y"]);
            assert_eq!(g.number_of_edges(), 1);
        }

        {
            let g = cycle(["a", "b", "c", "d"]);
            assert_eq!(g.number_of_edges(), 4);
            assert!(g.has_edge(&Vertex::new("d"), &Vertex::new("a")));
            assert!(g.vertices().all(|v| g.degree_of(v) == 2));
            assert!(g.is_connected());
        }
    }

    #[test]
    fn test_complete() {
        {
            let g = complete(0);
            assert!(g.is_empty());
        }

        {
            let g = complete(1);
            assert_eq!(g.number_of_vertices(), 1);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let g = complete(5);
            assert_eq!(g.number_of_vertices(), 5);
            assert_eq!(g.number_of_edges(), 10);
            assert!(g.vertices().all(|v| g.degree_of(v) == 4));
            assert!(g.is_consistent());
        }
    }
}
