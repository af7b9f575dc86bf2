//! Roadtrip Core Library
//!
//! Graph store, Dijkstra path engine and dataset loader for the roadtrip
//! route finder.

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod logging;
