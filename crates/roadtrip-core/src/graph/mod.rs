//! Weighted undirected graph and shortest-path queries
//!
//! Provides the pieces needed to answer route queries:
//! - `store`: the in-memory adjacency map built once from the dataset
//! - `traversal`: the provider trait the path engine reads through
//! - `algos`: Dijkstra shortest distance and path reconstruction

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{find_route, shortest_distance, shortest_path, shortest_path_tree};
pub use store::{Distance, Graph};
pub use traversal::GraphProvider;
pub use types::{Route, RouteLeg, RouteOutcome};
