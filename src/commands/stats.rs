//! `roadtrip stats` command - dataset summary

use crate::cli::OutputFormat;
use roadtrip_core::error::{ExitCode, Result};

use super::dispatch::{Command, CommandContext};

pub struct StatsCommand;

impl Command for StatsCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let (_, report) = ctx.load_graph()?;
        let path = ctx.dataset_path();

        match ctx.cli.format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(&report)?;
                value["dataset"] = serde_json::json!(path.display().to_string());
                println!("{}", value);
            }
            OutputFormat::Human => {
                println!("dataset: {}", path.display());
                println!("records: {}", report.records);
                println!("skipped: {}", report.skipped);
                println!("locations: {}", report.nodes);
                println!("connections: {}", report.edges);
            }
        }

        Ok(ExitCode::Success)
    }
}
