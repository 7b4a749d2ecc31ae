use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::models::ConnectionGraph;

/// Write every node of the graph, one gene symbol per line.
pub fn save_gene_list(out_path: &str, nodes: &ConnectionGraph) -> Result<()> {
    info!("Writing gene list to: {}", out_path);
    let file =
        File::create(out_path).with_context(|| format!("creating gene list {out_path}"))?;
    let mut out = BufWriter::new(file);
    for gene in nodes.keys() {
        writeln!(out, "{gene}")?;
    }
    Ok(())
}
