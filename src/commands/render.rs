//! Text rendering shared by the interactive session and `route`

use std::io::{self, Write};

use roadtrip_core::graph::RouteOutcome;

pub const INVALID_LOCATIONS: &str = "Invalid country names. Please enter valid country names.";

/// Write a route, one `* X --> Y (w unit.)` line per leg
pub fn write_route_outcome<W: Write>(
    out: &mut W,
    from: &str,
    to: &str,
    outcome: &RouteOutcome,
    unit: &str,
) -> io::Result<()> {
    writeln!(out, "Route from {} to {}:", from, to)?;
    match outcome {
        RouteOutcome::Found(route) => {
            for leg in &route.legs {
                writeln!(
                    out,
                    "* {} --> {} ({} {}.)",
                    leg.from, leg.to, leg.distance, unit
                )?;
            }
        }
        RouteOutcome::NoPath => {
            writeln!(out, "No path found between {} and {}", from, to)?;
        }
    }
    Ok(())
}

/// JSON view of a route query
pub fn route_outcome_json(from: &str, to: &str, outcome: &RouteOutcome) -> serde_json::Value {
    match outcome {
        RouteOutcome::Found(route) => serde_json::json!({
            "found": true,
            "route": route,
        }),
        RouteOutcome::NoPath => serde_json::json!({
            "found": false,
            "from": from,
            "to": to,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadtrip_core::graph::{find_route, Graph};

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("X", "Y", 10);
        graph.add_edge("Y", "Z", 5);
        graph.add_edge("X", "Z", 20);
        graph
    }

    fn render(from: &str, to: &str, outcome: &RouteOutcome) -> String {
        let mut buf = Vec::new();
        write_route_outcome(&mut buf, from, to, outcome, "km").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_found_route() {
        let graph = sample_graph();
        let outcome = find_route(&graph, "X", "Z").unwrap();

        assert_eq!(
            render("X", "Z", &outcome),
            "Route from X to Z:\n* X --> Y (10 km.)\n* Y --> Z (5 km.)\n"
        );
    }

    #[test]
    fn test_render_no_path() {
        assert_eq!(
            render("A", "A", &RouteOutcome::NoPath),
            "Route from A to A:\nNo path found between A and A\n"
        );
    }

    #[test]
    fn test_route_json() {
        let graph = sample_graph();
        let outcome = find_route(&graph, "X", "Z").unwrap();
        let json = route_outcome_json("X", "Z", &outcome);

        assert_eq!(json["found"], true);
        assert_eq!(json["route"]["total_distance"], 15);
        assert_eq!(json["route"]["legs"].as_array().map(Vec::len), Some(2));

        let json = route_outcome_json("A", "B", &RouteOutcome::NoPath);
        assert_eq!(json["found"], false);
        assert_eq!(json["to"], "B");
    }
}
