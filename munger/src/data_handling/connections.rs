use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::data_handling::field;
use crate::models::ConnectionGraph;

/// Probe ID with known-bad upstream data; rows touching it are dropped.
pub const EXCLUDED_PROBE: &str = "LDLCQ3";

/// Fold a connection file into `nodes`. Each data row reads
/// `gene1,gene2,...,score` with the score in the last column. The edge
/// gene1 -> gene2 is inserted (overwriting any earlier score), and gene2 is
/// registered as a node even when it has no outgoing edges of its own.
///
/// The same file may be folded into several graphs (the per-disease graph
/// and the run-wide accumulator), and folding a file into the same graph
/// twice leaves it unchanged.
pub fn map_connections(nodes: &mut ConnectionGraph, path: &str) -> Result<()> {
    info!("Reading connection data from: {}", path);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening connection file {path}"))?;

    let mut edges = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let row = idx + 2;
        let record = record.with_context(|| format!("{path}: row {row}: malformed CSV"))?;
        let gene1 = field(&record, 0, path, row)?;
        let gene2 = field(&record, 1, path, row)?;
        if gene1 == EXCLUDED_PROBE || gene2 == EXCLUDED_PROBE {
            continue;
        }
        let score = record
            .get(record.len() - 1)
            .ok_or_else(|| anyhow!("{path}: row {row}: empty record"))?;

        nodes
            .entry(gene1.to_string())
            .or_default()
            .insert(gene2.to_string(), score.to_string());
        nodes.entry(gene2.to_string()).or_default();
        edges += 1;
    }
    debug!("{}: {} edges over {} nodes", path, edges, nodes.len());
    Ok(())
}
