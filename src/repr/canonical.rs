/*!
# Canonical Serialization & Digests

A graph is rendered canonically as one line per vertex in label order,
each listing the sorted neighbor labels:

```text
v0: [v1]
v1: [v0, v2]
v2: [v1]
```

Because the ordering is deterministic, the serialization is the basis for
structural equality, hashing and hash digests: two graphs built from the
same vertices and edges in any insertion order produce byte-identical
canonical forms.
*/

use std::fmt::{self, Debug, Display, Formatter, LowerHex};
use std::hash::{Hash, Hasher};

use digest::{Digest, Output};
use itertools::Itertools;

use super::AdjMapGraph;

impl AdjMapGraph {
    /// Returns the canonical serialization of the graph.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let graph = AdjMapGraph::from_edges([("v1", "v0"), ("v1", "v2")]);
    /// assert_eq!(graph.canonical_form(), "v0: [v1]\nv1: [v0, v2]\nv2: [v1]\n");
    /// ```
    pub fn canonical_form(&self) -> String {
        self.to_string()
    }
}

impl Display for AdjMapGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices().sorted() {
            let neighbors = self
                .out_vertices(vertex)
                .map(|w| w.label())
                .sorted()
                .join(", ");
            writeln!(f, "{}: [{}]", vertex.label(), neighbors)?;
        }
        Ok(())
    }
}

impl Debug for AdjMapGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// Two graphs are equal iff their canonical serializations match, so
/// insertion order never matters.
impl PartialEq for AdjMapGraph {
    fn eq(&self, other: &Self) -> bool {
        self.number_of_vertices() == other.number_of_vertices()
            && self.number_of_edges() == other.number_of_edges()
            && self.canonical_form() == other.canonical_form()
    }
}

impl Eq for AdjMapGraph {}

impl Hash for AdjMapGraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

/// Trait for computing a canonical hash digest of a graph.
///
/// The digest hashes the canonical serialization, so it is independent of
/// insertion order and internal storage layout.
pub trait GraphDigest {
    /// Computes a digest using the hash function `D`, returned as a
    /// hexadecimal string.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a SHA-256 digest. The returned string is exactly 64
    /// characters long.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let graph = AdjMapGraph::from_edges([("a", "b")]);
    /// assert_eq!(graph.digest_sha256().len(), 64);
    /// ```
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl GraphDigest for AdjMapGraph {
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        hasher.update(self.canonical_form().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use crate::{Edge, Vertex};

    use super::*;

    fn hash_of(graph: &AdjMapGraph) -> u64 {
        let mut hasher = DefaultHasher::new();
        graph.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn canonical_form_is_label_sorted() {
        let graph = AdjMapGraph::from_edges([("b", "c"), ("c", "a")]);
        assert_eq!(graph.canonical_form(), "a: [c]\nb: [c]\nc: [a, b]\n");
    }

    #[test]
    fn isolated_vertices_render_empty_neighborhoods() {
        let mut graph = AdjMapGraph::new();
        graph.add_vertex("lonely");
        assert_eq!(graph.canonical_form(), "lonely: []\n");
        assert_eq!(AdjMapGraph::new().canonical_form(), "");
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let forwards = AdjMapGraph::from_parts(
            ["v0", "v1", "v2"],
            [Edge::new("v0", "v1"), Edge::new("v1", "v2")],
        );
        let backwards = AdjMapGraph::from_parts(
            ["v2", "v0", "v1"],
            [Edge::new("v2", "v1"), Edge::new("v1", "v0")],
        );

        assert_eq!(forwards, backwards);
        assert_eq!(hash_of(&forwards), hash_of(&backwards));
        assert_eq!(forwards.digest_sha256(), backwards.digest_sha256());
    }

    #[test]
    fn equality_respects_structure() {
        let path = AdjMapGraph::from_edges([("v0", "v1"), ("v1", "v2")]);
        let mut other = path.clone();
        assert_eq!(path, other);

        other.remove_edge(&Edge::new("v1", "v2"));
        assert_ne!(path, other);
        assert_ne!(path.digest_sha256(), other.digest_sha256());

        other.add_edge(("v1", "v2"));
        assert_eq!(path, other);
    }

    #[test]
    fn removal_and_reinsertion_round_trips_the_digest() {
        let mut graph = AdjMapGraph::from_edges([("a", "b"), ("b", "c"), ("a", "c")]);
        let digest = graph.digest_sha256();

        graph.remove_vertex(&Vertex::new("b"));
        graph.add_vertex("b");
        graph.add_edge(("a", "b"));
        graph.add_edge(("b", "c"));

        assert_eq!(graph.digest_sha256(), digest);
    }
}
