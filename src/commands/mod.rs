//! CLI commands for roadtrip

pub mod dispatch;
pub mod interactive;
pub mod locations;
pub mod render;
pub mod route;
pub mod stats;
