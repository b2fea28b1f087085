//! Top level api methods for paths-rs.

use crate::graph::{Graph, GraphError};
use crate::report::Report;

/// Given a dot string, compute the shortest paths from the named source
/// node and return them as a printable report, one line per target node
/// with the path and its total distance.
pub fn dot_to_paths(dot: &str, source_name: &str) -> Result<String, GraphError> {
    let graph = Graph::from_dot(dot)?;
    let paths = graph.shortest_paths_from(source_name)?;

    Report::new(&graph, &paths).render_paths_with_distances()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_to_paths() {
        let report = dot_to_paths("digraph { a -> b [weight=2]; }", "a").unwrap();

        assert_eq!(report, "Path from a to b: a b  total distance: 2\n");
    }

    #[test]
    fn test_dot_to_paths_bad_source() {
        let err = dot_to_paths("digraph { a -> b; }", "z").unwrap_err();

        assert!(matches!(err, GraphError::UnknownNode(name) if name == "z"));
    }

    #[test]
    fn test_dot_to_paths_bad_dot() {
        let err = dot_to_paths("not dot at all", "a").unwrap_err();

        assert!(matches!(err, GraphError::Parse(_)));
    }
}
