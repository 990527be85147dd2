/*!
# Mutation Outcomes

Mutations on a graph never fail and never panic on user input. When a
requested change cannot be applied, the graph is left untouched and the
reason is reported as an [`Outcome`] so callers and tests can branch on
behavior instead of parsing diagnostic text.
*/

/// Report of a single graph mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The graph was modified.
    Applied,
    /// A vertex with the same label is already present.
    NoOpDuplicateVertex,
    /// An equal edge is already present.
    NoOpDuplicateEdge,
    /// Both endpoints name the same vertex; the graph stays simple.
    NoOpSelfLoop,
    /// A referenced vertex is not in the graph.
    NoOpAbsentVertex,
    /// The edge to remove is not in the graph.
    NoOpAbsentEdge,
    /// Clique completion requires an edge-free graph.
    NoOpEdgesPresent,
}

impl Outcome {
    /// Returns true if the mutation changed the graph.
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// Returns true if the mutation was diagnosed and skipped.
    pub fn is_no_op(self) -> bool {
        !self.is_applied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_and_no_op_partition() {
        assert!(Outcome::Applied.is_applied());
        assert!(!Outcome::Applied.is_no_op());
        assert!(Outcome::NoOpAbsentEdge.is_no_op());
        assert!(!Outcome::NoOpAbsentVertex.is_applied());
    }
}
