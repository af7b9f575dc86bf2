//! Command dispatch logic for roadtrip

use std::time::Instant;

use crate::cli::{Cli, Commands};
use roadtrip_core::error::{ExitCode, Result};
use tracing::debug;

mod command;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<ExitCode> {
    let ctx = CommandContext::new(cli, start)?;
    let dataset = ctx.dataset_path();

    debug!(
        elapsed = ?start.elapsed(),
        format = %cli.format,
        dataset = %dataset.display(),
        "resolve_config"
    );

    match &cli.command {
        None | Some(Commands::Interactive) => super::interactive::InteractiveCommand.execute(&ctx),
        Some(Commands::Route { from, to }) => super::route::RouteCommand { from, to }.execute(&ctx),
        Some(Commands::Stats) => super::stats::StatsCommand.execute(&ctx),
        Some(Commands::Locations) => super::locations::LocationsCommand.execute(&ctx),
    }
}
