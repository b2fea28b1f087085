//! Demo: build a small directed weighted graph twice (once with raw node
//! indexes, once with named edges alone), search it from node "A", and
//! print the result in the three report layouts.

use paths_rs::graph::{Graph, GraphError};
use paths_rs::report::Report;

/// The demo graph: five nodes, a self loop on B, and a cycle back to A.
const DEMO_EDGES: [(&str, &str, f64); 9] = [
    ("A", "C", 1.0),
    ("B", "B", 2.0),
    ("B", "D", 1.0),
    ("B", "E", 2.0),
    ("C", "B", 7.0),
    ("C", "D", 3.0),
    ("D", "E", 1.0),
    ("E", "A", 1.0),
    ("E", "B", 1.0),
];

fn main() -> Result<(), GraphError> {
    // Build the graph node by node, wiring edges up by index.
    let mut graph = Graph::new();
    let a_idx = graph.add_node("A");
    let b_idx = graph.add_node("B");
    let c_idx = graph.add_node("C");
    let d_idx = graph.add_node("D");
    let e_idx = graph.add_node("E");

    graph.add_edge(a_idx, c_idx, 1.0);
    graph.add_edge(b_idx, b_idx, 2.0);
    graph.add_edge(b_idx, d_idx, 1.0);
    graph.add_edge(b_idx, e_idx, 2.0);
    graph.add_edge(c_idx, b_idx, 7.0);
    graph.add_edge(c_idx, d_idx, 3.0);
    graph.add_edge(d_idx, e_idx, 1.0);
    graph.add_edge(e_idx, a_idx, 1.0);
    graph.add_edge(e_idx, b_idx, 1.0);

    let paths = graph.shortest_paths(a_idx)?;
    let report = Report::new(&graph, &paths);

    println!("Paths:");
    print!("{}", report.render_paths()?);
    println!("\nDistances:");
    print!("{}", report.render_distances()?);
    println!("\nPaths with distances:");
    print!("{}", report.render_paths_with_distances()?);

    // The same graph again, built from names alone; nodes are created on
    // first mention.
    let mut named_graph = Graph::new();
    for (src_name, dst_name, weight) in DEMO_EDGES {
        named_graph.add(src_name, dst_name, weight);
    }

    let named_paths = named_graph.shortest_paths_from("A")?;

    println!("\nNamed graph:");
    print!("{}", Report::new(&named_graph, &named_paths));

    Ok(())
}
