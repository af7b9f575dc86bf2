//! In-memory graph store
//!
//! Adjacency is a map of maps keyed by location identifier. Every edge is
//! stored in both directions with the same weight.

use std::collections::{BTreeMap, HashMap};

/// Edge weight and accumulated route length
pub type Distance = u64;

/// Undirected weighted graph keyed by location identifier
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, BTreeMap<String, Distance>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the edge `a <-> b`.
    ///
    /// Unseen endpoints get an adjacency entry on first use. A later call for
    /// the same pair replaces the weight in both directions.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Distance) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), weight);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), weight);
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Neighbors of `id` with their edge weights, in identifier order
    pub fn neighbors(&self, id: &str) -> Option<&BTreeMap<String, Distance>> {
        self.adjacency.get(id)
    }

    /// Lookup helper: weight of the direct edge between `a` and `b`, if there is one
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Distance> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each pair counted once)
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut others = 0;
        for (from, neighbors) in &self.adjacency {
            for to in neighbors.keys() {
                if from == to {
                    loops += 1;
                } else {
                    others += 1;
                }
            }
        }
        loops + others / 2
    }

    /// All node identifiers, sorted
    pub fn nodes(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
