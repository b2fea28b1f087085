//! Examples of graphs to be used for testing and display.

use crate::graph::Graph;

pub const DOT_EXAMPLES: [(&str, &str); 8] = [
    (
        "five_node_cycle",
        "digraph {
            A -> C [weight=1]; B -> B [weight=2]; B -> D [weight=1];
            B -> E [weight=2]; C -> B [weight=7]; C -> D [weight=3];
            D -> E [weight=1]; E -> A [weight=1]; E -> B [weight=1];
        }",
    ),
    ("single_edge",     "digraph { a -> b [weight=2]; }"),
    ("default_weights", "digraph { a -> b; b -> c; }"),
    ("isolated_node",   "digraph { a -> b [weight=1]; c; }"),
    (
        "two_routes",
        "digraph {
            a -> b [weight=1]; b -> d [weight=5];
            a -> c [weight=2]; c -> d [weight=2];
        }",
    ),
    (
        "diamond_tie",
        "digraph {
            a -> b [weight=1]; a -> c [weight=1];
            b -> d [weight=1]; c -> d [weight=1];
        }",
    ),
    ("parallel_edges",  "digraph { a -> b [weight=4]; a -> b [weight=2]; }"),
    ("self_loop",       "digraph { a -> a [weight=1]; a -> b [weight=3]; }"),
];

pub fn dot_example_str(title: &str) -> &'static str {
    for (dot_title, dot) in DOT_EXAMPLES {
        if title == dot_title {
            return dot;
        }
    }
    panic!("Could not find requested example: {title}")
}

pub fn dot_example_graph(title: &str) -> Graph {
    Graph::from(dot_example_str(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every example must parse.
    #[test]
    fn test_all_examples_build() {
        for (title, _) in DOT_EXAMPLES {
            let graph = dot_example_graph(title);

            assert!(graph.node_count() > 0, "example {title} has no nodes");
        }
    }

    #[test]
    #[should_panic(expected = "Could not find requested example")]
    fn test_unknown_example_panics() {
        dot_example_str("no_such_example");
    }
}
