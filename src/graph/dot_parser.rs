//! With Graph::from_dot(), creates a new graph given a string in the dot
//! language, extended with an edge weight attribute.
//!
//! For details on dot, see: <https://graphviz.org/doc/info/lang.html>
use pest::iterators::Pair;

use super::edge::DEFAULT_EDGE_WEIGHT;
use super::{Graph, GraphError};

#[derive(Parser)]
#[grammar = "dot.pest"]
pub struct DotParser;

use pest::Parser;
use pest_derive::Parser;

impl Graph {
    /// Given a string in the dot language, build a graph.
    ///
    /// Uses the Pest crate to do all the parsing.  The supported subset of
    /// dot is edge statements with an optional weight attribute, and bare
    /// node statements for nodes with no edges:
    ///
    ///   digraph { a -> b [weight=2.5]; b -> c; lone_node; }
    ///
    /// Edges without a weight attribute get weight 1.  Nodes are created in
    /// order of first appearance.
    pub fn from_dot(dot_str: &str) -> Result<Self, GraphError> {
        let dot_graph = DotParser::parse(Rule::dotgraph, dot_str)?
            .next()
            .expect("a successful parse always yields a dotgraph");

        let mut graph = Graph::new();

        for record in dot_graph.into_inner() {
            match record.as_rule() {
                Rule::digraph => (),
                Rule::stmt_list => {
                    for stmt in record.into_inner() {
                        let inner = stmt
                            .into_inner()
                            .next()
                            .expect("a stmt always wraps one statement");

                        add_stmt(&mut graph, inner);
                    }
                }
                Rule::EOI => (),
                _ => unreachable!(),
            }
        }
        Ok(graph)
    }
}

impl From<&str> for Graph {
    fn from(str: &str) -> Self {
        Self::from_dot(str).expect("unsuccessful parse of dot string")
    }
}

impl From<&String> for Graph {
    fn from(string: &String) -> Self {
        Self::from_dot(string).expect("unsuccessful parse of dot string")
    }
}

/// Apply a single parsed statement to the graph.
fn add_stmt(graph: &mut Graph, stmt: Pair<'_, Rule>) {
    match stmt.as_rule() {
        Rule::edge_stmt => add_edge_stmt(graph, stmt),
        Rule::node_stmt => {
            graph.add_node(stmt.as_str());
        }
        _ => unreachable!(),
    }
}

/// Given an edge_stmt (e.g. a -> b [weight=2];), add the edge and any new
/// nodes to the graph.
fn add_edge_stmt(graph: &mut Graph, edge_stmt: Pair<'_, Rule>) {
    let mut edge_rule = edge_stmt.into_inner();
    let src_name = edge_rule.next().expect("edge_stmt has a src node").as_str();
    let dst_name = edge_rule.next().expect("edge_stmt has a dst node").as_str();
    let weight = match edge_rule.next() {
        Some(weight_attr) => parse_weight(weight_attr),
        None => DEFAULT_EDGE_WEIGHT,
    };

    graph.add(src_name, dst_name, weight);
}

/// Pull the number out of a weight attribute (e.g. [weight=2.5]).
fn parse_weight(weight_attr: Pair<'_, Rule>) -> f64 {
    weight_attr
        .into_inner()
        .next()
        .expect("a weight attribute always holds a number")
        .as_str()
        .parse()
        .expect("the grammar only matches valid numbers")
}

#[cfg(test)]
mod tests {
    use super::super::edge::EdgeDisposition;
    use super::*;

    #[test]
    fn test_parse_weighted_edges() {
        let graph = Graph::from_dot("digraph { a -> b [weight=2]; b -> c [weight=0.5]; }").unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.get_edge(0).weight, 2.0);
        assert_eq!(graph.get_edge(1).weight, 0.5);
    }

    #[test]
    fn test_parse_default_weight() {
        let graph = Graph::from_dot("digraph { a -> b; }").unwrap();

        assert_eq!(graph.get_edge(0).weight, DEFAULT_EDGE_WEIGHT);
    }

    #[test]
    fn test_parse_named_graph() {
        let graph = Graph::from_dot("digraph sample { a -> b; }").unwrap();

        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_parse_node_statement() {
        let graph = Graph::from_dot("digraph { a -> b; c; }").unwrap();

        let lone_idx = graph.node_idx("c").unwrap();
        let lone_node = graph.get_node(lone_idx);
        assert!(lone_node.no_in_edges());
        assert!(lone_node.no_out_edges());
    }

    #[test]
    fn test_parse_comments_and_newlines() {
        let graph = Graph::from_dot(
            "digraph {
                // the main route
                a -> b [weight=3]
                b -> c [weight=1];
            }",
        )
        .unwrap();

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_parse_first_seen_order() {
        let graph = Graph::from_dot("digraph { b -> a; a -> c; }").unwrap();

        assert_eq!(graph.node_idx("b"), Some(0));
        assert_eq!(graph.node_idx("a"), Some(1));
        assert_eq!(graph.node_idx("c"), Some(2));
    }

    #[test]
    fn test_parse_negative_weight_is_accepted() {
        // Construction allows any weight; only a search rejects them.
        let graph = Graph::from_dot("digraph { a -> b [weight=-2]; }").unwrap();

        assert_eq!(graph.get_edge(0).weight, -2.0);
    }

    #[test]
    fn test_parse_failure() {
        let err = Graph::from_dot("graph { a -- b; }").unwrap_err();

        assert!(matches!(err, GraphError::Parse(_)));
    }

    #[test]
    fn test_parse_edges_from_str() {
        let graph = Graph::from("digraph { a -> b; a -> c; b -> d; c -> d;}");

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(
            graph.get_node(0).get_edges(EdgeDisposition::Out),
            &[0, 1]
        );
    }
}
