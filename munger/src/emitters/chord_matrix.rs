use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::helper_functions::{fill_holes, sort_by_cluster};
use crate::models::{ConnectionGraph, GeneTable, DAYS};

/// Write the square connection matrix consumed by the chord diagram.
///
/// Fills record holes for the graph first, then emits rows and columns in
/// cluster/alphabetical order. Every field is comma-terminated, including
/// the last one on each row; the downstream parser depends on that exact
/// shape. Scores, cluster ids, and day values are copied through verbatim,
/// with a literal `0` for absent edges.
pub fn save_connections(
    out_path: &str,
    nodes: &ConnectionGraph,
    gene_data: &mut GeneTable,
) -> Result<()> {
    info!("Writing chord matrix to: {}", out_path);
    fill_holes(nodes, gene_data);
    let genes = sort_by_cluster(nodes, gene_data)?;

    let file =
        File::create(out_path).with_context(|| format!("creating chord matrix {out_path}"))?;
    let mut out = BufWriter::new(file);

    for gene in &genes {
        write!(out, "{gene},")?;
    }
    write!(out, "Cluster,")?;
    for day in DAYS {
        write!(out, "{day},")?;
    }
    writeln!(out)?;

    for gene in &genes {
        let connections = nodes
            .get(gene)
            .ok_or_else(|| anyhow!("gene {gene} missing from graph"))?;
        for g in &genes {
            match connections.get(g) {
                Some(score) => write!(out, "{score},")?,
                None => write!(out, "0,")?,
            }
        }
        let record = gene_data
            .get(gene)
            .ok_or_else(|| anyhow!("no gene record for {gene}"))?;
        write!(out, "{},", record.cluster)?;
        for day in &record.days {
            write!(out, "{day},")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
