use std::fmt::{Debug, Display};

use crate::Vertex;

/// An undirected edge between two vertices.
///
/// Construction normalizes the endpoint order so that the vertex with the
/// smaller label always comes first. `Edge::new(a, b)` and `Edge::new(b, a)`
/// are therefore equal and hash identically.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: Vertex,
    b: Vertex,
}

impl Edge {
    /// Creates the undirected edge between `v1` and `v2` in normalized order.
    pub fn new<U, V>(v1: U, v2: V) -> Self
    where
        U: Into<Vertex>,
        V: Into<Vertex>,
    {
        let (v1, v2) = (v1.into(), v2.into());
        if v1 <= v2 {
            Self { a: v1, b: v2 }
        } else {
            Self { a: v2, b: v1 }
        }
    }

    /// Both endpoints in normalized order.
    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.a, &self.b)
    }

    /// Returns true if both endpoints are equal.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Returns true if `v` is one of the endpoints.
    pub fn is_incident_to(&self, v: &Vertex) -> bool {
        self.a == *v || self.b == *v
    }

    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an
    /// endpoint. On a loop the sole endpoint is its own opposite.
    pub fn other_endpoint(&self, v: &Vertex) -> Option<&Vertex> {
        if self.a == *v {
            Some(&self.b)
        } else if self.b == *v {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<U, V> From<(U, V)> for Edge
where
    U: Into<Vertex>,
    V: Into<Vertex>,
{
    fn from(value: (U, V)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_order_is_normalized() {
        let e = Edge::new("w", "v");
        let f = Edge::new("v", "w");
        assert_eq!(e, f);
        assert_eq!(e.endpoints().0.label(), "v");
        assert_eq!(e.to_string(), "(v,w)");
        assert_eq!(f.to_string(), "(v,w)");
    }

    #[test]
    fn incidence_queries() {
        let e = Edge::new("a", "b");
        assert!(e.is_incident_to(&Vertex::new("a")));
        assert!(e.is_incident_to(&Vertex::new("b")));
        assert!(!e.is_incident_to(&Vertex::new("c")));

        assert_eq!(e.other_endpoint(&Vertex::new("a")), Some(&Vertex::new("b")));
        assert_eq!(e.other_endpoint(&Vertex::new("c")), None);
    }

    #[test]
    fn loops_are_values_too() {
        let e = Edge::new("a", "a");
        assert!(e.is_loop());
        assert_eq!(e.other_endpoint(&Vertex::new("a")), Some(&Vertex::new("a")));
    }

    #[test]
    fn tuple_conversions() {
        let e: Edge = ("b", "a").into();
        assert_eq!(e, Edge::new("a", "b"));
        let f: Edge = (Vertex::new("a"), Vertex::new("b")).into();
        assert_eq!(e, f);
    }
}
