//! For rendering the result of a shortest path search as text.
//!
//! Three layouts are offered, all one line per target node: just the path,
//! just the distance, or both.  Unreachable targets always render as the
//! word "unreachable" so they can never be confused with a real distance.

use std::fmt::{Display, Error, Formatter, Write};

use itertools::Itertools;

use crate::graph::{Graph, GraphError, ShortestPaths};

pub struct Report<'a> {
    graph: &'a Graph,
    paths: &'a ShortestPaths,
}

impl<'a> Report<'a> {
    /// A report over a search result and the graph it was computed on.
    pub fn new(graph: &'a Graph, paths: &'a ShortestPaths) -> Self {
        Self { graph, paths }
    }

    /// One line per target node: the names of the nodes along the shortest
    /// path from the source, in traversal order.
    pub fn render_paths(&self) -> Result<String, GraphError> {
        let source_name = self.source_name()?;
        let mut out = String::new();

        for target in self.targets() {
            let target_name = self.graph.node_name(target)?;
            match self.path_names(target)? {
                Some(names) => {
                    let _ = writeln!(
                        out,
                        "Path from {source_name} to {target_name}: {}",
                        names.iter().join(" ")
                    );
                }
                None => {
                    let _ = writeln!(out, "Path from {source_name} to {target_name}: unreachable");
                }
            }
        }
        Ok(out)
    }

    /// One line per target node: the total distance from the source.
    pub fn render_distances(&self) -> Result<String, GraphError> {
        let source_name = self.source_name()?;
        let mut out = String::new();

        for target in self.targets() {
            let target_name = self.graph.node_name(target)?;
            match self.paths.distance(target)? {
                Some(dist) => {
                    let _ = writeln!(out, "distance from {source_name} to {target_name} = {dist}");
                }
                None => {
                    let _ = writeln!(
                        out,
                        "distance from {source_name} to {target_name} = unreachable"
                    );
                }
            }
        }
        Ok(out)
    }

    /// One line per target node: the shortest path and its total distance.
    pub fn render_paths_with_distances(&self) -> Result<String, GraphError> {
        let source_name = self.source_name()?;
        let mut out = String::new();

        for target in self.targets() {
            let target_name = self.graph.node_name(target)?;
            match self.paths.path_to(target)? {
                Some(path) => {
                    let names = path
                        .nodes
                        .iter()
                        .map(|&node_idx| self.graph.node_name(node_idx))
                        .collect::<Result<Vec<_>, _>>()?;
                    let _ = writeln!(
                        out,
                        "Path from {source_name} to {target_name}: {}  total distance: {}",
                        names.iter().join(" "),
                        path.total
                    );
                }
                None => {
                    let _ = writeln!(out, "Path from {source_name} to {target_name}: unreachable");
                }
            }
        }
        Ok(out)
    }

    fn source_name(&self) -> Result<&str, GraphError> {
        self.graph.node_name(self.paths.source())
    }

    /// Every node of the graph except the search source, in index order.
    fn targets(&self) -> impl Iterator<Item = usize> + '_ {
        let source = self.paths.source();

        (0..self.graph.node_count()).filter(move |&target| target != source)
    }

    /// The node names along the shortest path to target, or None if target
    /// is unreachable.
    fn path_names(&self, target: usize) -> Result<Option<Vec<&str>>, GraphError> {
        let path = match self.paths.path_to(target)? {
            Some(path) => path,
            None => return Ok(None),
        };

        path.nodes
            .iter()
            .map(|&node_idx| self.graph.node_name(node_idx))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

impl Display for Report<'_> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), Error> {
        let body = self.render_paths_with_distances().map_err(|_| Error)?;

        write!(fmt, "{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Graph, ShortestPaths) {
        let graph = Graph::from("digraph { a -> b [weight=2]; b -> c [weight=1]; d; }");
        let paths = graph.shortest_paths_from("a").unwrap();

        (graph, paths)
    }

    #[test]
    fn test_render_paths() {
        let (graph, paths) = sample();
        let report = Report::new(&graph, &paths);

        assert_eq!(
            report.render_paths().unwrap(),
            "Path from a to b: a b\n\
             Path from a to c: a b c\n\
             Path from a to d: unreachable\n"
        );
    }

    #[test]
    fn test_render_distances() {
        let (graph, paths) = sample();
        let report = Report::new(&graph, &paths);

        assert_eq!(
            report.render_distances().unwrap(),
            "distance from a to b = 2\n\
             distance from a to c = 3\n\
             distance from a to d = unreachable\n"
        );
    }

    #[test]
    fn test_render_paths_with_distances() {
        let (graph, paths) = sample();
        let report = Report::new(&graph, &paths);

        assert_eq!(
            report.render_paths_with_distances().unwrap(),
            "Path from a to b: a b  total distance: 2\n\
             Path from a to c: a b c  total distance: 3\n\
             Path from a to d: unreachable\n"
        );
    }

    #[test]
    fn test_display_is_the_combined_layout() {
        let (graph, paths) = sample();
        let report = Report::new(&graph, &paths);

        assert_eq!(report.to_string(), report.render_paths_with_distances().unwrap());
    }
}
