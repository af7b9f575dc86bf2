//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest distances, path reconstruction and
//!   the route queries built on top of them

pub mod dijkstra;

pub use dijkstra::{
    find_route, shortest_distance, shortest_path, shortest_path_tree, ShortestPathTree,
};
