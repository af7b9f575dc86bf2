//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use roadtrip_core::config::RoadtripConfig;
use roadtrip_core::dataset::{self, LoadReport};
use roadtrip_core::error::{ExitCode, Result};
use roadtrip_core::graph::Graph;
use roadtrip_core::trace_time;

/// Resolve configuration from `--config`, or the user config directory
pub fn resolve_config(cli: &Cli) -> Result<RoadtripConfig> {
    match &cli.config {
        Some(path) => RoadtripConfig::load(path),
        None => RoadtripConfig::discover(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RoadtripConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = resolve_config(cli)?;
        Ok(Self { cli, config, start })
    }

    /// Dataset path; `--data` wins over the configured one
    pub fn dataset_path(&self) -> PathBuf {
        self.cli
            .data
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.dataset.path))
    }

    /// Load the dataset into a graph. Called once per process.
    pub fn load_graph(&self) -> Result<(Graph, LoadReport)> {
        let loaded = dataset::load_graph(&self.dataset_path(), &self.config.dataset)?;
        trace_time!(self.start, "load_graph");
        Ok(loaded)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode>;
}
