//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level roadtrip configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadtripConfig {
    /// Where the distance dataset lives and how to read it
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// How routes are presented to the user
    #[serde(default)]
    pub display: DisplayConfig,
}

/// What to do with a record the loader cannot parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop loading and report the offending line
    #[default]
    Abort,
    /// Log the record and continue without it
    Skip,
}

/// Dataset location and column layout.
///
/// Defaults describe `capdist.csv` (`numa,ida,numb,idb,kmdist,midist`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the delimited distance file
    #[serde(default = "default_dataset_path")]
    pub path: String,

    /// Skip the first line as a header
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Single-byte field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Zero-based column of the first location identifier
    #[serde(default = "default_from_column")]
    pub from_column: usize,

    /// Zero-based column of the second location identifier
    #[serde(default = "default_to_column")]
    pub to_column: usize,

    /// Zero-based column of the distance
    #[serde(default = "default_distance_column")]
    pub distance_column: usize,

    /// Malformed record handling
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            has_header: default_has_header(),
            delimiter: default_delimiter(),
            from_column: default_from_column(),
            to_column: default_to_column(),
            distance_column: default_distance_column(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

/// Output settings for the interactive session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Unit label printed after each leg distance
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Token that ends the interactive session (case-insensitive)
    #[serde(default = "default_exit_token")]
    pub exit_token: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            exit_token: default_exit_token(),
        }
    }
}

fn default_dataset_path() -> String {
    "capdist.csv".to_string()
}

fn default_has_header() -> bool {
    true
}

fn default_delimiter() -> char {
    ','
}

fn default_from_column() -> usize {
    1
}

fn default_to_column() -> usize {
    3
}

fn default_distance_column() -> usize {
    4
}

fn default_unit() -> String {
    "km".to_string()
}

fn default_exit_token() -> String {
    "EXIT".to_string()
}
