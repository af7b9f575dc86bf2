//! Interactive session: prompt for location pairs until the exit token

use std::io::{self, BufRead, Write};

use roadtrip_core::config::DisplayConfig;
use roadtrip_core::error::{ExitCode, Result, RoadtripError};
use roadtrip_core::graph::{find_route, Graph};

use super::dispatch::{Command, CommandContext};
use super::render::{write_route_outcome, INVALID_LOCATIONS};

/// Exit status used when the session is interrupted with Ctrl-C
const INTERRUPTED_EXIT: i32 = 130;

pub struct InteractiveCommand;

impl Command for InteractiveCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let (graph, report) = ctx.load_graph()?;
        tracing::info!(
            locations = report.nodes,
            connections = report.edges,
            "ready for queries"
        );

        // The handler must not touch stdout: the main thread may be mid-write
        let _ = ctrlc::set_handler(|| {
            eprintln!();
            std::process::exit(INTERRUPTED_EXIT);
        });

        let stdin = io::stdin();
        let queries = run_session(&graph, &ctx.config.display, stdin.lock(), io::stdout())?;
        tracing::debug!(queries, "session ended");

        Ok(ExitCode::Success)
    }
}

/// Outcome of one prompt
enum Prompted {
    Location(String),
    Quit,
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    which: &str,
    exit_token: &str,
) -> Result<Prompted> {
    write!(
        output,
        "Enter the name of the {} country (type {} to quit): ",
        which, exit_token
    )?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // EOF ends the session like the exit token
        writeln!(output)?;
        return Ok(Prompted::Quit);
    }

    let answer = line.trim();
    if answer.to_lowercase() == exit_token.to_lowercase() {
        return Ok(Prompted::Quit);
    }
    Ok(Prompted::Location(answer.to_string()))
}

/// Answer location pairs read from `input` until the exit token or EOF.
///
/// Per-query problems never end the session. Returns the number of queries
/// answered.
pub fn run_session<R: BufRead, W: Write>(
    graph: &Graph,
    display: &DisplayConfig,
    mut input: R,
    mut output: W,
) -> Result<usize> {
    let exit_token = display.exit_token.trim();
    let mut queries = 0;

    loop {
        let Prompted::Location(from) = prompt(&mut input, &mut output, "first", exit_token)? else {
            break;
        };
        let Prompted::Location(to) = prompt(&mut input, &mut output, "second", exit_token)? else {
            break;
        };

        queries += 1;
        match find_route(graph, &from, &to) {
            Ok(outcome) => write_route_outcome(&mut output, &from, &to, &outcome, &display.unit)?,
            Err(RoadtripError::UnknownLocation { id }) => {
                tracing::debug!(location = %id, "unknown location");
                writeln!(output, "{}", INVALID_LOCATIONS)?;
            }
            Err(e) => return Err(e),
        }
    }

    output.flush()?;
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("X", "Y", 10);
        graph.add_edge("Y", "Z", 5);
        graph.add_edge("X", "Z", 20);
        graph.add_edge("P", "Q", 3);
        graph
    }

    fn session(input: &str) -> (usize, String) {
        session_with(input, &DisplayConfig::default())
    }

    fn session_with(input: &str, display: &DisplayConfig) -> (usize, String) {
        let graph = sample_graph();
        let mut out = Vec::new();
        let queries = run_session(&graph, display, input.as_bytes(), &mut out).unwrap();
        (queries, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_route_then_exit() {
        let (queries, out) = session("X\nZ\nEXIT\n");

        assert_eq!(queries, 1);
        assert!(out.contains("Route from X to Z:\n* X --> Y (10 km.)\n* Y --> Z (5 km.)\n"));
        assert_eq!(
            out.matches("Enter the name of the first country (type EXIT to quit): ")
                .count(),
            2
        );
    }

    #[test]
    fn test_exit_token_is_case_insensitive() {
        let (queries, _) = session("exit\n");
        assert_eq!(queries, 0);

        let (queries, _) = session("X\n  Exit  \n");
        assert_eq!(queries, 0);
    }

    #[test]
    fn test_unknown_location_keeps_session_alive() {
        let (queries, out) = session("X\nNOWHERE\nP\nQ\nEXIT\n");

        assert_eq!(queries, 2);
        assert!(out.contains(INVALID_LOCATIONS));
        assert!(out.contains("* P --> Q (3 km.)"));
    }

    #[test]
    fn test_identifiers_are_exact_match() {
        let (_, out) = session("x\nZ\nEXIT\n");
        assert!(out.contains(INVALID_LOCATIONS));
    }

    #[test]
    fn test_disconnected_pair_reports_no_path() {
        let (_, out) = session("X\nQ\nEXIT\n");

        assert!(out.contains("Route from X to Q:\nNo path found between X and Q\n"));
        assert!(!out.contains(INVALID_LOCATIONS));
    }

    #[test]
    fn test_same_location_reports_no_path() {
        let (_, out) = session("Y\nY\nEXIT\n");
        assert!(out.contains("No path found between Y and Y"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (queries, out) = session("X\nZ\nP\n");

        assert_eq!(queries, 1);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_input_is_trimmed() {
        let (_, out) = session("  X \r\n Y\nEXIT\n");
        assert!(out.contains("* X --> Y (10 km.)"));
    }

    #[test]
    fn test_custom_display_settings() {
        let display = DisplayConfig {
            unit: "mi".to_string(),
            exit_token: "quit".to_string(),
        };
        let (queries, out) = session_with("Y\nZ\nQUIT\n", &display);

        assert_eq!(queries, 1);
        assert!(out.contains("(type quit to quit)"));
        assert!(out.contains("* Y --> Z (5 mi.)"));
    }
}
