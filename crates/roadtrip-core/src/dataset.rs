//! Distance dataset loader
//!
//! Reads delimited records of `(location, location, distance)` and feeds them
//! to a [`Graph`]. Each record is validated completely before it touches the
//! graph, so a rejected record never leaves a half-applied edge behind.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::config::{DatasetConfig, MalformedPolicy};
use crate::error::{Result, RoadtripError};
use crate::graph::{Distance, Graph};
use crate::trace_time;

/// One accepted dataset row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

/// Summary of a completed load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Records applied to the graph
    pub records: usize,
    /// Records rejected under the skip policy
    pub skipped: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// Parse a distance field, tolerating thousands separators (`1,234`)
pub fn parse_distance(raw: &str) -> std::result::Result<Distance, String> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err("distance is empty".to_string());
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!(
            "distance must be a non-negative integer, found {:?}",
            raw
        ));
    }
    cleaned
        .parse::<Distance>()
        .map_err(|e| format!("distance {:?} is out of range: {}", raw, e))
}

fn field<'r>(
    record: &'r csv::StringRecord,
    column: usize,
    name: &str,
) -> std::result::Result<&'r str, String> {
    let value = record
        .get(column)
        .ok_or_else(|| format!("missing {} column {}", name, column))?;
    if value.is_empty() {
        return Err(format!("{} is empty", name));
    }
    Ok(value)
}

/// Extract a distance record from a raw row using the configured columns
pub fn parse_record(
    record: &csv::StringRecord,
    opts: &DatasetConfig,
) -> std::result::Result<DistanceRecord, String> {
    let required = opts
        .from_column
        .max(opts.to_column)
        .max(opts.distance_column)
        + 1;
    if record.len() < required {
        return Err(format!(
            "expected at least {} fields, found {}",
            required,
            record.len()
        ));
    }

    let from = field(record, opts.from_column, "first location")?;
    let to = field(record, opts.to_column, "second location")?;
    let distance = parse_distance(field(record, opts.distance_column, "distance")?)?;

    Ok(DistanceRecord {
        from: from.to_string(),
        to: to.to_string(),
        distance,
    })
}

/// Build a graph from any reader of delimited records
#[tracing::instrument(skip_all, fields(policy = ?opts.on_malformed))]
pub fn read_graph<R: Read>(input: R, opts: &DatasetConfig) -> Result<(Graph, LoadReport)> {
    let start = Instant::now();
    let delimiter = u8::try_from(opts.delimiter)
        .map_err(|_| RoadtripError::invalid_value("delimiter", opts.delimiter))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(opts.has_header)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut graph = Graph::new();
    let mut report = LoadReport::default();

    for result in reader.records() {
        let parsed = match result {
            Ok(row) => {
                let line = row.position().map_or(0, |p| p.line());
                parse_record(&row, opts).map_err(|reason| (line, reason))
            }
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                Err((line, e.to_string()))
            }
        };

        match parsed {
            Ok(record) => {
                graph.add_edge(&record.from, &record.to, record.distance);
                report.records += 1;
            }
            Err((line, reason)) => match opts.on_malformed {
                MalformedPolicy::Abort => return Err(RoadtripError::malformed(line, reason)),
                MalformedPolicy::Skip => {
                    tracing::warn!(line, reason = %reason, "skipping malformed record");
                    report.skipped += 1;
                }
            },
        }
    }

    report.nodes = graph.node_count();
    report.edges = graph.edge_count();
    trace_time!(start, "read_graph", records = report.records);
    tracing::debug!(
        records = report.records,
        skipped = report.skipped,
        nodes = report.nodes,
        edges = report.edges,
        "dataset loaded"
    );

    Ok((graph, report))
}

/// Build a graph from the dataset file at `path`
pub fn load_graph(path: &Path, opts: &DatasetConfig) -> Result<(Graph, LoadReport)> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RoadtripError::DatasetNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RoadtripError::Io(e)
        }
    })?;

    tracing::debug!(path = %path.display(), "loading dataset");
    read_graph(file, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CAPDIST_SAMPLE: &str = "\
numa,ida,numb,idb,kmdist,midist
2,USA,20,CAN,735,457
20,CAN,2,USA,735,457
2,USA,70,MEX,2991,1859
70,MEX,2,USA,2991,1859
200,UKG,220,FRN,342,213
";

    fn skip_policy() -> DatasetConfig {
        DatasetConfig {
            on_malformed: MalformedPolicy::Skip,
            ..DatasetConfig::default()
        }
    }

    #[test]
    fn test_reads_capdist_layout() {
        let (graph, report) =
            read_graph(CAPDIST_SAMPLE.as_bytes(), &DatasetConfig::default()).unwrap();

        assert_eq!(report.records, 5);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.nodes, 5);
        assert_eq!(report.edges, 3);
        assert_eq!(graph.edge_weight("USA", "CAN"), Some(735));
        assert_eq!(graph.edge_weight("MEX", "USA"), Some(2991));
        assert!(!graph.has_node("numa"));
        assert!(!graph.has_node("ida"));
    }

    #[test]
    fn test_later_record_overwrites_weight() {
        let data = "h1,a,h2,b,km\n0,X,0,Y,10\n0,X,0,Y,7\n";
        let (graph, report) = read_graph(data.as_bytes(), &DatasetConfig::default()).unwrap();

        assert_eq!(report.records, 2);
        assert_eq!(graph.edge_weight("X", "Y"), Some(7));
    }

    #[test]
    fn test_abort_on_bad_distance() {
        let data = "numa,ida,numb,idb,kmdist\n1,A,2,B,10\n1,A,3,C,ten\n";
        let err = read_graph(data.as_bytes(), &DatasetConfig::default()).unwrap_err();

        match err {
            RoadtripError::MalformedRecord { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("non-negative integer"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_policy_drops_whole_record() {
        let data = "numa,ida,numb,idb,kmdist\n1,A,2,B,10\n1,A,3,C,-4\n1,A\n1,B,3,C,6\n";
        let (graph, report) = read_graph(data.as_bytes(), &skip_policy()).unwrap();

        assert_eq!(report.records, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(graph.edge_weight("A", "C"), None);
        assert_eq!(graph.edge_weight("B", "C"), Some(6));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let data = "numa,ida,numb,idb,kmdist\n1,A,2\n";
        let err = read_graph(data.as_bytes(), &DatasetConfig::default()).unwrap_err();
        assert!(err.to_string().contains("expected at least 5 fields, found 3"));
    }

    #[test]
    fn test_empty_identifier_is_malformed() {
        let data = "numa,ida,numb,idb,kmdist\n1, ,2,B,5\n";
        let err = read_graph(data.as_bytes(), &DatasetConfig::default()).unwrap_err();
        assert!(err.to_string().contains("first location is empty"));
    }

    #[test]
    fn test_quoted_distance_with_separator() {
        let data = "numa,ida,numb,idb,kmdist\n1,RUS,2,AUL,\"14,497\"\n";
        let (graph, _) = read_graph(data.as_bytes(), &DatasetConfig::default()).unwrap();
        assert_eq!(graph.edge_weight("AUL", "RUS"), Some(14497));
    }

    #[test]
    fn test_custom_layout_without_header() {
        let opts = DatasetConfig {
            has_header: false,
            delimiter: '\t',
            from_column: 0,
            to_column: 1,
            distance_column: 2,
            ..DatasetConfig::default()
        };
        let data = "X\tY\t10\nY\tZ\t5\n";
        let (graph, report) = read_graph(data.as_bytes(), &opts).unwrap();

        assert_eq!(report.records, 2);
        assert_eq!(graph.edge_weight("Z", "Y"), Some(5));
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("42"), Ok(42));
        assert_eq!(parse_distance(" 1,234 "), Ok(1234));
        assert_eq!(parse_distance("0"), Ok(0));
        assert!(parse_distance("").is_err());
        assert!(parse_distance("-3").is_err());
        assert!(parse_distance("3.5").is_err());
        assert!(parse_distance("99999999999999999999999").is_err());
    }

    #[test]
    fn test_load_graph_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capdist.csv");
        fs::write(&path, CAPDIST_SAMPLE).unwrap();

        let (graph, report) = load_graph(&path, &DatasetConfig::default()).unwrap();
        assert_eq!(report.nodes, graph.node_count());
        assert!(graph.has_node("UKG"));
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.csv"), &DatasetConfig::default())
            .unwrap_err();
        assert!(matches!(err, RoadtripError::DatasetNotFound { .. }));
    }
}
