use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::models::{ConnectionGraph, GeneRecord, GeneTable};

/// Synthesize default records for graph genes the master table never
/// mentions, so every downstream lookup succeeds. Extends `gene_data` in
/// place.
pub fn fill_holes(nodes: &ConnectionGraph, gene_data: &mut GeneTable) {
    for gene in nodes.keys() {
        if !gene_data.contains_key(gene) {
            gene_data.insert(gene.clone(), GeneRecord::hole());
        }
    }
}

fn cluster_index(gene: &str, record: &GeneRecord) -> Result<i64> {
    record
        .cluster
        .parse()
        .with_context(|| format!("gene {gene}: cluster {:?} is not an integer", record.cluster))
}

/// Canonical row/column order for matrix and heatmap emission: genes
/// grouped by ascending cluster index, alphabetical within a cluster.
/// The cluster range runs up to the maximum index anywhere in the table,
/// so empty clusters simply contribute no genes.
pub fn sort_by_cluster(nodes: &ConnectionGraph, gene_data: &GeneTable) -> Result<Vec<String>> {
    let mut num_clusters = 0;
    for (gene, record) in gene_data {
        num_clusters = num_clusters.max(cluster_index(gene, record)?);
    }

    let mut sorted_genes = Vec::with_capacity(nodes.len());
    for i in 0..=num_clusters {
        let mut this_cluster = Vec::new();
        for gene in nodes.keys() {
            let record = gene_data
                .get(gene)
                .ok_or_else(|| anyhow!("no gene record for {gene}"))?;
            if cluster_index(gene, record)? == i {
                this_cluster.push(gene.clone());
            }
        }
        this_cluster.sort();
        sorted_genes.extend(this_cluster);
    }
    Ok(sorted_genes)
}

/// Log the out-degree of every gene, counted against the graph's own node
/// set. Verification aid only.
pub fn log_connection_counts(nodes: &ConnectionGraph) {
    for (gene, connections) in nodes {
        let count = nodes.keys().filter(|g| connections.contains_key(*g)).count();
        debug!("{}: {}", gene, count);
    }
}
