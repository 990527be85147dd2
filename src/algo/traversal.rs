/*!
Breadth-first traversal.

[`Bfs`] is a lazy iterator over the vertices reachable from a start
vertex in FIFO level order. Vertices are marked as seen when they are
enqueued, so no vertex is ever enqueued or yielded twice, even on cyclic
graphs. The iterator can be re-armed at a yet unvisited vertex with
[`Bfs::try_restart_at_unvisited`], which is how connected components are
enumerated.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::repr::{AdjMapGraph, SlotId};
use crate::Vertex;

/// Lazy breadth-first traversal over a graph.
///
/// # Example
/// ```
/// use lgraphs::prelude::*;
///
/// let graph = AdjMapGraph::from_edges([("v0", "v1"), ("v1", "v2")]);
/// let order: Vec<&Vertex> = graph.bfs(&Vertex::new("v0")).collect();
///
/// assert_eq!(order.len(), 3);
/// assert_eq!(order[0].label(), "v0");
/// ```
pub struct Bfs<'a> {
    graph: &'a AdjMapGraph,
    queue: VecDeque<SlotId>,
    seen: FxHashSet<SlotId>,
}

impl<'a> Bfs<'a> {
    pub(crate) fn new(graph: &'a AdjMapGraph, start: Option<SlotId>) -> Self {
        let mut queue = VecDeque::new();
        let mut seen = FxHashSet::default();
        if let Some(id) = start {
            seen.insert(id);
            queue.push_back(id);
        }
        Self { graph, queue, seen }
    }

    /// Returns the number of vertices yielded so far plus those currently
    /// enqueued.
    pub fn number_seen(&self) -> usize {
        self.seen.len()
    }

    /// Re-arms an exhausted traversal at some vertex not seen yet.
    ///
    /// Returns false if every vertex of the graph was already seen.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        let Some(id) = self.graph.slot_ids().find(|id| !self.seen.contains(id)) else {
            return false;
        };
        self.seen.insert(id);
        self.queue.push_back(id);
        true
    }
}

impl<'a> Iterator for Bfs<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let u = self.queue.pop_front()?;
        for v in graph.neighbor_ids(u) {
            if self.seen.insert(v) {
                self.queue.push_back(v);
            }
        }
        Some(graph.vertex_at(u))
    }
}

impl AdjMapGraph {
    /// Starts a breadth-first traversal at `start`.
    ///
    /// The traversal yields `start` first and then the remaining reachable
    /// vertices in level order; collecting it gives the reached-vertex
    /// set. If `start` is absent the traversal is empty and a diagnostic
    /// is emitted.
    pub fn bfs(&self, start: &Vertex) -> Bfs<'_> {
        Bfs::new(self, self.diagnosed_slot_of(start))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::repr::AdjMapGraph;
    use crate::Vertex;

    #[test]
    fn bfs_visits_level_by_level() {
        // 0 -- 1 -- 3
        //  \-- 2 -- 4
        let graph = AdjMapGraph::from_edges([
            ("v0", "v1"),
            ("v0", "v2"),
            ("v1", "v3"),
            ("v2", "v4"),
        ]);

        let order = graph
            .bfs(&Vertex::new("v0"))
            .map(|v| v.label().to_owned())
            .collect_vec();

        assert_eq!(order.len(), 5);
        assert_eq!(order[0], "v0");
        let levels = [&order[1..3], &order[3..5]];
        assert_eq!(levels[0].iter().sorted().collect_vec(), ["v1", "v2"]);
        assert_eq!(levels[1].iter().sorted().collect_vec(), ["v3", "v4"]);
    }

    #[test]
    fn bfs_never_yields_twice_on_cycles() {
        let graph =
            AdjMapGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);

        let order = graph.bfs(&Vertex::new("a")).collect_vec();
        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().unique().count(), 4);
    }

    #[test]
    fn bfs_reaches_only_the_component_of_the_start() {
        let graph = AdjMapGraph::from_edges([("a", "b"), ("x", "y")]);

        let reached = graph
            .bfs(&Vertex::new("a"))
            .map(|v| v.label())
            .sorted()
            .collect_vec();
        assert_eq!(reached, ["a", "b"]);
    }

    #[test]
    fn bfs_from_absent_vertex_is_empty() {
        let graph = AdjMapGraph::from_edges([("a", "b")]);
        assert_eq!(graph.bfs(&Vertex::new("nope")).count(), 0);
    }

    #[test]
    fn restart_covers_all_components() {
        let graph = AdjMapGraph::from_edges([("a", "b"), ("x", "y")]);

        let mut bfs = graph.bfs(&Vertex::new("a"));
        assert_eq!(bfs.by_ref().count(), 2);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().count(), 2);
        assert!(!bfs.try_restart_at_unvisited());
        assert_eq!(bfs.number_seen(), 4);
    }

    #[test]
    fn path_graph_loses_its_bridge() {
        let mut graph = AdjMapGraph::from_edges([("v0", "v1"), ("v1", "v2")]);

        let reached = graph
            .bfs(&Vertex::new("v0"))
            .map(|v| v.label())
            .sorted()
            .collect_vec();
        assert_eq!(reached, ["v0", "v1", "v2"]);

        graph.remove_vertex(&Vertex::new("v1"));
        let reached = graph.bfs(&Vertex::new("v0")).collect_vec();
        assert_eq!(reached, [&Vertex::new("v0")]);
    }
}
