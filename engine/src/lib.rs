//! Shortest routes between named locations.
//!
//! A location graph is read from a plain text edge list (see `import::edge_list`),
//! location names are mapped to dense node ids by the `LocationGraph` builder and
//! queries are answered with Dijkstra's algorithm (see `algo::dijkstra`).
//!
//! # Example
//!
//! ```
//! use route_finder::{algo::dijkstra::shortest_path, algo::QueryResult, datastr::graph::LocationGraph};
//!
//! let mut graph = LocationGraph::new();
//! let a = graph.resolve_location("A");
//! let b = graph.resolve_location("B");
//! let c = graph.resolve_location("C");
//! graph.add_undirected(a, b, 5);
//! graph.add_undirected(b, c, 3);
//! graph.add_undirected(a, c, 10);
//!
//! assert_eq!(shortest_path(&graph, a, c), QueryResult::Found { distance: 8, path: vec![a, b, c] });
//! ```

#[macro_use]
pub mod report;

pub mod algo;
pub mod cli;
pub mod datastr;
pub mod export;
pub mod import;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
