use crate::graph::store::Distance;
use serde::Serialize;

/// One hop of a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

/// A shortest route between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub total_distance: Distance,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// Location identifiers from source to destination
    pub fn stops(&self) -> Vec<&str> {
        let mut stops: Vec<&str> = self.legs.iter().map(|leg| leg.from.as_str()).collect();
        if let Some(last) = self.legs.last() {
            stops.push(last.to.as_str());
        }
        stops
    }
}

/// Result of a route query between two known locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Found(Route),
    /// Disconnected, or source and destination are the same location
    NoPath,
}
