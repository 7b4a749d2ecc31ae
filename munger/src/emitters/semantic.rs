use std::collections::BTreeMap;
use std::fs::File;

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use crate::data_handling::field;
use crate::models::{
    ConnectionGraph, DayValues, DiseaseRelations, EdgeScores, GeneTable, SemanticGene,
};

/// Build the semantic graph for one disease: per-gene expression values,
/// disease relations, free-text description, and directed edges carrying
/// the full sub-score vectors re-parsed from the connection file.
///
/// Each connection row contributes the same score bundle to the source
/// gene's `Outgoing` map and the target's `Incoming` map. Rows naming a
/// symbol outside the graph's node set (such as the excluded probe) are
/// reported and skipped.
pub fn capture_semantic_data(
    nodes: &ConnectionGraph,
    gene_data: &GeneTable,
    gene_desc: &BTreeMap<String, String>,
    connections_path: &str,
) -> Result<BTreeMap<String, SemanticGene>> {
    let mut sem_data = BTreeMap::new();
    for gene in nodes.keys() {
        let record = gene_data
            .get(gene)
            .ok_or_else(|| anyhow!("no gene record for {gene}"))?;
        sem_data.insert(
            gene.clone(),
            SemanticGene {
                days: DayValues::from_record(gene, record)?,
                relations: DiseaseRelations::from_record(record),
                description: gene_desc.get(gene).cloned().unwrap_or_default(),
                outgoing: BTreeMap::new(),
                incoming: BTreeMap::new(),
            },
        );
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(connections_path)
        .with_context(|| format!("opening connection file {connections_path}"))?;
    for (idx, record) in reader.records().enumerate() {
        let row = idx + 2;
        let record =
            record.with_context(|| format!("{connections_path}: row {row}: malformed CSV"))?;
        let gene1 = field(&record, 0, connections_path, row)?.to_string();
        let gene2 = field(&record, 1, connections_path, row)?.to_string();
        if !sem_data.contains_key(&gene1) || !sem_data.contains_key(&gene2) {
            warn!(
                "{}: row {}: skipping {} -> {}, not in the gene set",
                connections_path, row, gene1, gene2
            );
            continue;
        }
        let link = EdgeScores::parse(&record, connections_path, row)?;
        if let Some(source) = sem_data.get_mut(&gene1) {
            source.outgoing.insert(gene2.clone(), link.clone());
        }
        if let Some(target) = sem_data.get_mut(&gene2) {
            target.incoming.insert(gene1, link);
        }
    }
    Ok(sem_data)
}

/// Serialize the semantic graph as human-readable JSON (2-space indent).
pub fn save_semantic_json(
    out_path: &str,
    sem_data: &BTreeMap<String, SemanticGene>,
) -> Result<()> {
    info!("Writing semantic graph to: {}", out_path);
    let file =
        File::create(out_path).with_context(|| format!("creating semantic JSON {out_path}"))?;
    serde_json::to_writer_pretty(file, sem_data)
        .with_context(|| format!("serializing semantic JSON {out_path}"))?;
    Ok(())
}
