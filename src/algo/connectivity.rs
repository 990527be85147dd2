/*!
Connectivity over undirected graphs: the whole-graph test and an iterator
over connected components, both driven by breadth-first traversal.
*/

use std::iter::FusedIterator;

use super::Bfs;
use crate::repr::AdjMapGraph;
use crate::Vertex;

/// Iterator over the connected components of a graph, each yielded as the
/// list of its vertices in traversal order.
pub struct ConnectedComponents<'a> {
    bfs: Bfs<'a>,
    fresh: bool,
}

impl<'a> Iterator for ConnectedComponents<'a> {
    type Item = Vec<&'a Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fresh {
            self.fresh = false;
        } else if !self.bfs.try_restart_at_unvisited() {
            return None;
        }
        let component: Vec<&'a Vertex> = self.bfs.by_ref().collect();
        if component.is_empty() {
            None
        } else {
            Some(component)
        }
    }
}

impl FusedIterator for ConnectedComponents<'_> {}

impl AdjMapGraph {
    /// Returns true if every vertex is reachable from every other vertex.
    /// The empty graph is connected vacuously.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// assert!(AdjMapGraph::new().is_connected());
    ///
    /// let mut graph = AdjMapGraph::from_edges([("v0", "v1"), ("v1", "v2")]);
    /// assert!(graph.is_connected());
    ///
    /// graph.remove_vertex(&Vertex::new("v1"));
    /// assert!(!graph.is_connected());
    /// ```
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return true;
        };
        self.bfs(start).count() == self.number_of_vertices()
    }

    /// Iterates over the connected components of the graph.
    pub fn connected_components(&self) -> ConnectedComponents<'_> {
        ConnectedComponents {
            bfs: Bfs::new(self, self.slot_ids().next()),
            fresh: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    // Sorts each component internally and the component list itself,
    // making assertions independent of traversal order.
    fn sorted_components(graph: &AdjMapGraph) -> Vec<Vec<&str>> {
        graph
            .connected_components()
            .map(|component| component.into_iter().map(|v| v.label()).sorted().collect())
            .sorted()
            .collect()
    }

    #[test]
    fn empty_graph_is_connected() {
        let graph = AdjMapGraph::new();
        assert!(graph.is_connected());
        assert_eq!(graph.connected_components().count(), 0);
    }

    #[test]
    fn single_vertex_is_connected() {
        let mut graph = AdjMapGraph::new();
        graph.add_vertex("a");
        assert!(graph.is_connected());
        assert_eq!(sorted_components(&graph), vec![vec!["a"]]);
    }

    #[test]
    fn path_is_connected_until_the_middle_leaves() {
        let mut graph = AdjMapGraph::from_edges([("v0", "v1"), ("v1", "v2")]);
        assert!(graph.is_connected());

        graph.remove_vertex(&Vertex::new("v1"));
        assert!(!graph.is_connected());
        assert_eq!(sorted_components(&graph), vec![vec!["v0"], vec!["v2"]]);
    }

    #[test]
    fn components_partition_the_vertex_set() {
        let mut graph = AdjMapGraph::from_edges([
            ("a", "b"),
            ("b", "c"),
            ("x", "y"),
        ]);
        graph.add_vertex("alone");

        let components = sorted_components(&graph);
        assert_eq!(
            components,
            vec![vec!["a", "b", "c"], vec!["alone"], vec!["x", "y"]]
        );
        assert_eq!(
            components.iter().map(|c| c.len()).sum::<usize>(),
            graph.number_of_vertices()
        );
    }

    #[test]
    fn clique_is_one_component() {
        let mut graph = AdjMapGraph::new();
        for i in 0..6 {
            graph.add_vertex(format!("v{i}"));
        }
        graph.add_all_edges();

        assert!(graph.is_connected());
        assert_eq!(graph.connected_components().count(), 1);
    }
}
