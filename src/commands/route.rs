//! `roadtrip route` command - one-shot shortest route query

use std::io::{self, Write};

use crate::cli::OutputFormat;
use roadtrip_core::bail_usage;
use roadtrip_core::error::{ExitCode, Result};
use roadtrip_core::graph::{find_route, RouteOutcome};

use super::dispatch::{Command, CommandContext};
use super::render::{route_outcome_json, write_route_outcome};

pub struct RouteCommand<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl Command for RouteCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let (from, to) = (self.from.trim(), self.to.trim());
        if from.is_empty() || to.is_empty() {
            bail_usage!("route requires two non-empty location identifiers");
        }

        let (graph, _) = ctx.load_graph()?;
        let outcome = find_route(&graph, from, to)?;

        match ctx.cli.format {
            OutputFormat::Json => {
                println!("{}", route_outcome_json(from, to, &outcome));
            }
            OutputFormat::Human => {
                let mut stdout = io::stdout().lock();
                write_route_outcome(&mut stdout, from, to, &outcome, &ctx.config.display.unit)?;
                if let RouteOutcome::Found(route) = &outcome {
                    if !ctx.cli.quiet {
                        writeln!(
                            stdout,
                            "Total: {} {}.",
                            route.total_distance, ctx.config.display.unit
                        )?;
                    }
                }
            }
        }

        Ok(match outcome {
            RouteOutcome::Found(_) => ExitCode::Success,
            RouteOutcome::NoPath => ExitCode::Failure,
        })
    }
}
