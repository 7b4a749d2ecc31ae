use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::helper_functions::sort_by_cluster;
use crate::models::{ConnectionGraph, GeneTable, DAYS};

/// Write the long-form heatmap table: one row per (gene, day) pair in
/// cluster/alphabetical gene order and fixed day order. Expects the record
/// map to already cover every graph gene (the matrix emitter fills holes
/// earlier in the pipeline); a missing record fails the run.
pub fn save_heatmap_data(
    out_path: &str,
    nodes: &ConnectionGraph,
    gene_data: &GeneTable,
) -> Result<()> {
    info!("Writing heatmap data to: {}", out_path);
    let genes = sort_by_cluster(nodes, gene_data)?;

    let file =
        File::create(out_path).with_context(|| format!("creating heatmap file {out_path}"))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "Gene_Symbol,Day,Value,Cluster")?;
    for gene in &genes {
        let record = gene_data
            .get(gene)
            .ok_or_else(|| anyhow!("no gene record for {gene}"))?;
        for (day, value) in DAYS.iter().zip(&record.days) {
            writeln!(out, "{gene},{day},{value},{}", record.cluster)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeneRecord;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn emits_nine_rows_per_gene_in_day_order() {
        let mut nodes = ConnectionGraph::new();
        nodes.insert("PAX6".to_string(), BTreeMap::new());
        nodes.insert("SOX2".to_string(), BTreeMap::new());

        let mut gene_data = GeneTable::new();
        let mut pax6 = GeneRecord::hole();
        pax6.cluster = "0".to_string();
        pax6.days = ["1", "2", "3", "4", "5", "6", "7", "8", "9"].map(String::from);
        gene_data.insert("PAX6".to_string(), pax6);
        let mut sox2 = GeneRecord::hole();
        sox2.cluster = "1".to_string();
        gene_data.insert("SOX2".to_string(), sox2);

        let dir = tempdir().unwrap();
        let out_path = dir.path().join("heatmap.csv");
        save_heatmap_data(out_path.to_str().unwrap(), &nodes, &gene_data).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Gene_Symbol,Day,Value,Cluster");
        assert_eq!(lines.len(), 1 + 2 * 9);
        assert_eq!(lines[1], "PAX6,d0,1,0");
        assert_eq!(lines[2], "PAX6,d7,2,0");
        assert_eq!(lines[9], "PAX6,d77,9,0");
        // SOX2 sits in a later cluster, so its rows follow PAX6's.
        assert_eq!(lines[10], "SOX2,d0,,1");
    }

    #[test]
    fn missing_record_is_fatal() {
        let mut nodes = ConnectionGraph::new();
        nodes.insert("PAX6".to_string(), BTreeMap::new());
        let mut gene_data = GeneTable::new();
        gene_data.insert("SOX2".to_string(), GeneRecord::hole());

        let dir = tempdir().unwrap();
        let out_path = dir.path().join("heatmap.csv");
        assert!(save_heatmap_data(out_path.to_str().unwrap(), &nodes, &gene_data).is_err());
    }
}
