//! `roadtrip locations` command - list known identifiers

use crate::cli::OutputFormat;
use roadtrip_core::error::{ExitCode, Result};

use super::dispatch::{Command, CommandContext};

pub struct LocationsCommand;

impl Command for LocationsCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let (graph, _) = ctx.load_graph()?;
        let ids = graph.nodes();

        match ctx.cli.format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "locations": ids })),
            OutputFormat::Human => {
                for id in ids {
                    println!("{}", id);
                }
            }
        }

        Ok(ExitCode::Success)
    }
}
