use crate::graph::store::{Distance, Graph};

/// Trait for providing graph adjacency to the path engine
pub trait GraphProvider {
    fn contains(&self, id: &str) -> bool;
    fn neighbors(&self, id: &str) -> Vec<(String, Distance)>;
}

impl GraphProvider for Graph {
    fn contains(&self, id: &str) -> bool {
        self.has_node(id)
    }

    fn neighbors(&self, id: &str) -> Vec<(String, Distance)> {
        Graph::neighbors(self, id)
            .map(|n| n.iter().map(|(to, w)| (to.clone(), *w)).collect())
            .unwrap_or_default()
    }
}
