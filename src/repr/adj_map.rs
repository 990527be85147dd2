/*!
# Adjacency-Map Graph

[`AdjMapGraph`] stores a labelled, unweighted, undirected graph. Vertices
live in an arena of slots addressed by stable keys, a label index maps each
label to its slot, and every edge is stored exactly once in a side table
keyed by the ordered pair of slot keys. Each slot additionally keeps the
set of its neighbor keys, so incidence queries are O(1) and both endpoints
always resolve to the same stored [`Edge`].

Mutations report an [`Outcome`] instead of failing: absent entities,
duplicates and self-loops leave the graph untouched and emit an advisory
`tracing` event. Corruption of the internal structure is a bug, checked by
[`AdjMapGraph::check_consistency`] and by debug assertions on the mutation
paths.
*/

use fxhash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use super::{pair_key, PairKey, SlotId};
use crate::{Edge, Outcome, Vertex};

/// One occupied arena slot: the vertex itself plus its neighbor keys.
#[derive(Debug, Clone)]
struct VertexSlot {
    vertex: Vertex,
    neighbors: FxHashSet<SlotId>,
}

impl VertexSlot {
    fn new(vertex: Vertex) -> Self {
        Self {
            vertex,
            neighbors: FxHashSet::default(),
        }
    }
}

/// A labelled undirected graph backed by an adjacency map.
///
/// # Example
/// ```
/// use lgraphs::prelude::*;
///
/// let mut graph = AdjMapGraph::new();
/// graph.add_edge(("a", "b"));
/// graph.add_edge(("b", "c"));
///
/// assert_eq!(graph.number_of_vertices(), 3);
/// assert_eq!(graph.number_of_edges(), 2);
/// assert_eq!(graph.degree_of(&Vertex::new("b")), 2);
/// ```
#[derive(Clone, Default)]
pub struct AdjMapGraph {
    index: FxHashMap<String, SlotId>,
    slots: Vec<Option<VertexSlot>>,
    vacant: Vec<SlotId>,
    edge_map: FxHashMap<PairKey, Edge>,
}

/// First violation found by [`AdjMapGraph::check_consistency`].
///
/// Any of these means the internal structure was corrupted, which cannot
/// happen through the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    /// A label index entry points at an empty arena slot.
    #[error("label index entry {label:?} points at a vacant slot")]
    StaleLabel { label: String },
    /// A label index entry points at a slot holding a different vertex.
    #[error("label index entry {entry:?} stores vertex {stored:?}")]
    MislabeledSlot { entry: String, stored: String },
    /// An occupied slot is unreachable through the label index.
    #[error("vertex {label:?} is not registered in the label index")]
    UnindexedVertex { label: String },
    /// A neighbor set references an empty arena slot.
    #[error("adjacency of {from:?} references a vacant slot")]
    DanglingNeighbor { from: String },
    /// One direction of an undirected adjacency is missing.
    #[error("{from:?} lists {to:?} as neighbor but not vice versa")]
    AsymmetricAdjacency { from: String, to: String },
    /// Two mutual neighbors have no entry in the edge table.
    #[error("no stored edge between neighbors {a:?} and {b:?}")]
    MissingEdge { a: String, b: String },
    /// The stored edge does not join the two vertices it is filed under.
    #[error("edge {edge} stored between {a:?} and {b:?} does not join them")]
    MismatchedEdge { edge: String, a: String, b: String },
    /// An edge table entry has no matching adjacency on its endpoints.
    #[error("edge {edge} has no matching adjacency entry")]
    OrphanedEdge { edge: String },
}

impl AdjMapGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by applying [`add_vertex`](Self::add_vertex) to every
    /// vertex and then [`add_edge`](Self::add_edge) to every edge, in the
    /// given order. Duplicate vertices are skipped; edges naming vertices
    /// not in the sequence insert their endpoints on the fly.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let graph = AdjMapGraph::from_parts(["a", "b"], [("a", "b"), ("b", "c")]);
    /// assert_eq!(graph.number_of_vertices(), 3);
    /// assert_eq!(graph.number_of_edges(), 2);
    /// ```
    pub fn from_parts<Vs, Es>(vertices: Vs, edges: Es) -> Self
    where
        Vs: IntoIterator,
        Vs::Item: Into<Vertex>,
        Es: IntoIterator,
        Es::Item: Into<Edge>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Builds a graph from edges alone; every vertex is inserted by the
    /// edge naming it first.
    pub fn from_edges<Es>(edges: Es) -> Self
    where
        Es: IntoIterator,
        Es::Item: Into<Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Returns the number of vertices in the graph.
    pub fn number_of_vertices(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of edges in the graph.
    pub fn number_of_edges(&self) -> usize {
        self.edge_map.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns true if a vertex with `v`'s label is in the graph.
    pub fn has_vertex(&self, v: &Vertex) -> bool {
        self.index.contains_key(v.label())
    }

    /// Returns true if the edge between `v1` and `v2` is in the graph.
    pub fn has_edge(&self, v1: &Vertex, v2: &Vertex) -> bool {
        match (self.slot_of(v1), self.slot_of(v2)) {
            (Some(u), Some(v)) => self.edge_map.contains_key(&pair_key(u, v)),
            _ => false,
        }
    }

    /// Returns the number of edges incident to `v`, or 0 with a diagnostic
    /// if `v` is absent.
    pub fn degree_of(&self, v: &Vertex) -> usize {
        self.diagnosed_slot_of(v)
            .map_or(0, |id| self.occupied(id).neighbors.len())
    }

    /// Inserts `vertex` with an empty neighborhood.
    ///
    /// Inserting a label twice keeps the first vertex and reports
    /// [`Outcome::NoOpDuplicateVertex`].
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> Outcome {
        let vertex = vertex.into();
        if self.index.contains_key(vertex.label()) {
            debug!(label = vertex.label(), "vertex already present");
            return Outcome::NoOpDuplicateVertex;
        }
        self.insert_slot(vertex);
        Outcome::Applied
    }

    /// Inserts `edge`, linking both endpoints to the same stored value.
    ///
    /// Endpoints not yet in the graph are inserted on the fly (with a
    /// diagnostic). Re-inserting an equal edge and inserting a self-loop
    /// leave the graph unchanged.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut graph = AdjMapGraph::new();
    /// assert_eq!(graph.add_edge(("a", "b")), Outcome::Applied);
    /// assert_eq!(graph.add_edge(("b", "a")), Outcome::NoOpDuplicateEdge);
    /// assert_eq!(graph.add_edge(("a", "a")), Outcome::NoOpSelfLoop);
    /// assert_eq!(graph.number_of_edges(), 1);
    /// ```
    pub fn add_edge(&mut self, edge: impl Into<Edge>) -> Outcome {
        let edge = edge.into();
        if edge.is_loop() {
            debug!(edge = %edge, "self-loops are not stored");
            return Outcome::NoOpSelfLoop;
        }
        let (a, b) = edge.endpoints();
        let u = self.ensure_vertex(a);
        let v = self.ensure_vertex(b);
        let key = pair_key(u, v);
        if self.edge_map.contains_key(&key) {
            debug!(edge = %edge, "edge already present");
            return Outcome::NoOpDuplicateEdge;
        }
        self.link(u, v);
        self.edge_map.insert(key, edge);
        Outcome::Applied
    }

    /// Removes `edge`, unlinking both endpoints.
    ///
    /// Absent endpoints or an absent edge leave the graph unchanged.
    pub fn remove_edge(&mut self, edge: &Edge) -> Outcome {
        let (a, b) = edge.endpoints();
        let (Some(u), Some(v)) = (self.slot_of(a), self.slot_of(b)) else {
            debug!(edge = %edge, "endpoint not in graph");
            return Outcome::NoOpAbsentVertex;
        };
        if self.edge_map.remove(&pair_key(u, v)).is_none() {
            debug!(edge = %edge, "edge not in graph");
            return Outcome::NoOpAbsentEdge;
        }
        self.unlink(u, v);
        Outcome::Applied
    }

    /// Removes `vertex` after removing every edge incident to it.
    ///
    /// Afterwards no remaining neighborhood references the vertex and its
    /// label may be used again.
    pub fn remove_vertex(&mut self, vertex: &Vertex) -> Outcome {
        let Some(u) = self.slot_of(vertex) else {
            debug!(label = vertex.label(), "vertex not in graph");
            return Outcome::NoOpAbsentVertex;
        };
        let incident: SmallVec<[Edge; 8]> = self
            .neighbor_ids(u)
            .map(|w| self.edge_between(u, w).clone())
            .collect();
        for edge in &incident {
            let outcome = self.remove_edge(edge);
            debug_assert!(outcome.is_applied());
        }
        debug_assert!(self.occupied(u).neighbors.is_empty());
        self.index.remove(vertex.label());
        self.slots[u as usize] = None;
        self.vacant.push(u);
        Outcome::Applied
    }

    /// Returns the edge between `v1` and `v2`, or `None` if either vertex
    /// or the edge itself is absent. Absent vertices only emit a
    /// diagnostic.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let graph = AdjMapGraph::from_edges([("a", "b")]);
    /// let (v, w) = (Vertex::new("a"), Vertex::new("b"));
    ///
    /// assert_eq!(graph.get_edge(&v, &w), graph.get_edge(&w, &v));
    /// assert!(graph.get_edge(&v, &Vertex::new("zzz")).is_none());
    /// ```
    pub fn get_edge(&self, v1: &Vertex, v2: &Vertex) -> Option<&Edge> {
        let u = self.diagnosed_slot_of(v1)?;
        let v = self.diagnosed_slot_of(v2)?;
        self.edge_map.get(&pair_key(u, v))
    }

    /// Returns an iterator over all vertices. The order is insignificant.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.slots.iter().flatten().map(|slot| &slot.vertex)
    }

    /// Returns an iterator over all edges, each undirected edge exactly
    /// once. The order is insignificant.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_map.values()
    }

    /// Returns an iterator over the neighbors of `v`, empty with a
    /// diagnostic if `v` is absent.
    pub fn out_vertices<'a>(&'a self, v: &Vertex) -> impl Iterator<Item = &'a Vertex> + 'a {
        self.diagnosed_slot_of(v)
            .into_iter()
            .flat_map(move |u| self.neighbor_ids(u))
            .map(move |w| self.vertex_at(w))
    }

    /// Returns an iterator over the edges incident to `v`, empty with a
    /// diagnostic if `v` is absent.
    pub fn out_edges<'a>(&'a self, v: &Vertex) -> impl Iterator<Item = &'a Edge> + 'a {
        self.diagnosed_slot_of(v)
            .into_iter()
            .flat_map(move |u| self.neighbor_ids(u).map(move |w| self.edge_between(u, w)))
    }

    /// Connects every distinct vertex pair, turning the graph into a
    /// clique.
    ///
    /// The graph must be edge-free; otherwise nothing is mutated and
    /// [`Outcome::NoOpEdgesPresent`] is reported.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut graph = AdjMapGraph::new();
    /// for v in ["a", "b", "c"] {
    ///     graph.add_vertex(v);
    /// }
    /// assert_eq!(graph.add_all_edges(), Outcome::Applied);
    /// assert_eq!(graph.number_of_edges(), 3);
    /// ```
    pub fn add_all_edges(&mut self) -> Outcome {
        if !self.edge_map.is_empty() {
            debug!(
                edges = self.edge_map.len(),
                "clique completion requires an edge-free graph"
            );
            return Outcome::NoOpEdgesPresent;
        }
        let vs: Vec<Vertex> = self.vertices().cloned().collect();
        for (i, a) in vs.iter().enumerate() {
            for b in &vs[i + 1..] {
                let outcome = self.add_edge(Edge::new(a.clone(), b.clone()));
                debug_assert!(outcome.is_applied());
            }
        }
        Outcome::Applied
    }

    /// Verifies the representation invariants and reports the first
    /// violation: the label index and the arena must agree bijectively,
    /// adjacency must be symmetric with no dangling slot keys, and every
    /// neighbor pair must resolve to exactly one stored edge joining it.
    ///
    /// This is a diagnostic for tests and debugging; mutations never call
    /// it.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for (label, &id) in &self.index {
            match self.slots.get(id as usize).and_then(|slot| slot.as_ref()) {
                Some(slot) if slot.vertex.label() == label => {}
                Some(slot) => {
                    return Err(ConsistencyError::MislabeledSlot {
                        entry: label.clone(),
                        stored: slot.vertex.label().to_owned(),
                    })
                }
                None => {
                    return Err(ConsistencyError::StaleLabel {
                        label: label.clone(),
                    })
                }
            }
        }

        for (u, slot) in self.occupied_slots() {
            if self.index.get(slot.vertex.label()) != Some(&u) {
                return Err(ConsistencyError::UnindexedVertex {
                    label: slot.vertex.label().to_owned(),
                });
            }

            for &w in &slot.neighbors {
                let Some(other) = self.slots.get(w as usize).and_then(|s| s.as_ref()) else {
                    return Err(ConsistencyError::DanglingNeighbor {
                        from: slot.vertex.label().to_owned(),
                    });
                };
                if !other.neighbors.contains(&u) {
                    return Err(ConsistencyError::AsymmetricAdjacency {
                        from: slot.vertex.label().to_owned(),
                        to: other.vertex.label().to_owned(),
                    });
                }
                let Some(edge) = self.edge_map.get(&pair_key(u, w)) else {
                    return Err(ConsistencyError::MissingEdge {
                        a: slot.vertex.label().to_owned(),
                        b: other.vertex.label().to_owned(),
                    });
                };
                if *edge != Edge::new(slot.vertex.clone(), other.vertex.clone()) {
                    return Err(ConsistencyError::MismatchedEdge {
                        edge: edge.to_string(),
                        a: slot.vertex.label().to_owned(),
                        b: other.vertex.label().to_owned(),
                    });
                }
            }
        }

        for (&(u, w), edge) in &self.edge_map {
            let linked = self
                .slots
                .get(u as usize)
                .and_then(|slot| slot.as_ref())
                .map_or(false, |slot| slot.neighbors.contains(&w));
            if !linked {
                return Err(ConsistencyError::OrphanedEdge {
                    edge: edge.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns true if [`check_consistency`](Self::check_consistency)
    /// finds no violation.
    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_ok()
    }

    pub(crate) fn slot_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.occupied_slots().map(|(id, _)| id)
    }

    pub(crate) fn neighbor_ids(&self, id: SlotId) -> impl Iterator<Item = SlotId> + '_ {
        self.occupied(id).neighbors.iter().copied()
    }

    pub(crate) fn vertex_at(&self, id: SlotId) -> &Vertex {
        &self.occupied(id).vertex
    }

    pub(crate) fn diagnosed_slot_of(&self, v: &Vertex) -> Option<SlotId> {
        let id = self.slot_of(v);
        if id.is_none() {
            debug!(label = v.label(), "vertex not in graph");
        }
        id
    }

    fn slot_of(&self, v: &Vertex) -> Option<SlotId> {
        self.index.get(v.label()).copied()
    }

    fn occupied_slots(&self) -> impl Iterator<Item = (SlotId, &VertexSlot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((i as SlotId, slot.as_ref()?)))
    }

    // Slot keys held inside the structure always reference occupied slots;
    // a miss is a fatal implementation bug.
    fn occupied(&self, id: SlotId) -> &VertexSlot {
        self.slots[id as usize]
            .as_ref()
            .expect("slot key held by the graph must be occupied")
    }

    fn occupied_mut(&mut self, id: SlotId) -> &mut VertexSlot {
        self.slots[id as usize]
            .as_mut()
            .expect("slot key held by the graph must be occupied")
    }

    fn edge_between(&self, u: SlotId, w: SlotId) -> &Edge {
        self.edge_map
            .get(&pair_key(u, w))
            .expect("linked slots must have a stored edge")
    }

    fn ensure_vertex(&mut self, vertex: &Vertex) -> SlotId {
        if let Some(&id) = self.index.get(vertex.label()) {
            return id;
        }
        debug!(label = vertex.label(), "auto-inserting absent endpoint");
        self.insert_slot(vertex.clone())
    }

    fn insert_slot(&mut self, vertex: Vertex) -> SlotId {
        let label = vertex.label().to_owned();
        let slot = VertexSlot::new(vertex);
        let id = match self.vacant.pop() {
            Some(id) => {
                debug_assert!(self.slots[id as usize].is_none());
                self.slots[id as usize] = Some(slot);
                id
            }
            None => {
                self.slots.push(Some(slot));
                (self.slots.len() - 1) as SlotId
            }
        };
        self.index.insert(label, id);
        id
    }

    fn link(&mut self, u: SlotId, v: SlotId) {
        let fresh = self.occupied_mut(u).neighbors.insert(v);
        debug_assert!(fresh);
        let fresh = self.occupied_mut(v).neighbors.insert(u);
        debug_assert!(fresh);
    }

    fn unlink(&mut self, u: SlotId, v: SlotId) {
        let found = self.occupied_mut(u).neighbors.remove(&v);
        debug_assert!(found);
        let found = self.occupied_mut(v).neighbors.remove(&u);
        debug_assert!(found);
    }
}
