use std::fmt::{Debug, Display};

/// A vertex is identified by its label.
///
/// Two vertices carrying the same label are the same vertex: equality,
/// ordering and hashing all derive from the label alone, so no identity
/// table is needed and vertices can be freely cloned and compared.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    /// Creates a vertex with the given label.
    pub fn new<L: Into<String>>(label: L) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the label identifying this vertex.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Vertex::new(label)
    }
}

impl From<&String> for Vertex {
    fn from(label: &String) -> Self {
        Vertex::new(label.as_str())
    }
}

impl From<&Vertex> for Vertex {
    fn from(vertex: &Vertex) -> Self {
        vertex.clone()
    }
}
