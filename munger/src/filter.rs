use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::emitters::chord_matrix::save_connections;
use crate::models::{ConnectionGraph, GeneTable};

/// Restrict the accumulated connection graph to the symbols listed in
/// `list_path` (one per line) and re-emit the chord matrix next to the
/// list file as `<list>_chord_data.csv`.
///
/// Symbols missing from the graph are reported and dropped; the ones found
/// keep their original full edge maps, so edges pointing outside the subset
/// simply never match a column.
pub fn run_gene_list_filter(
    list_path: &str,
    db: &ConnectionGraph,
    gene_data: &mut GeneTable,
) -> Result<()> {
    info!("Creating chord data for gene list: {}", list_path);
    let out_name = format!("{list_path}_chord_data.csv");

    let file = File::open(list_path).with_context(|| format!("opening gene list {list_path}"))?;
    let mut nodes = ConnectionGraph::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("reading gene list {list_path}"))?;
        let gene = line.trim();
        if gene.is_empty() {
            continue;
        }
        match db.get(gene) {
            Some(connections) => {
                nodes.insert(gene.to_string(), connections.clone());
            }
            None => error!("missing gene: {}", gene),
        }
    }

    save_connections(&out_name, &nodes, gene_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::connections::map_connections;
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn accumulator() -> ConnectionGraph {
        let dir = tempdir().unwrap();
        let path = dir.path().join("autism_data.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "gene1,gene2,a,b,c,d,score").unwrap();
        writeln!(file, "FOXG1,PAX6,x,x,x,x,0.91").unwrap();
        writeln!(file, "FOXG1,SOX2,x,x,x,x,0.42").unwrap();
        writeln!(file, "PAX6,SOX2,x,x,x,x,0.17").unwrap();
        let mut db = ConnectionGraph::new();
        map_connections(&mut db, path.to_str().unwrap()).unwrap();
        db
    }

    #[test]
    fn missing_symbols_are_dropped_and_found_ones_keep_their_edges() {
        let db = accumulator();
        let dir = tempdir().unwrap();
        let list_path = dir.path().join("my_genes.txt");
        fs::write(&list_path, "FOXG1\nNOT_A_GENE\nPAX6\n").unwrap();

        let mut gene_data = GeneTable::new();
        run_gene_list_filter(list_path.to_str().unwrap(), &db, &mut gene_data).unwrap();

        let out_path = format!("{}_chord_data.csv", list_path.to_str().unwrap());
        let written = fs::read_to_string(&out_path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        // Two found genes, both hole-filled into cluster 7.
        assert_eq!(lines[0], "FOXG1,PAX6,Cluster,d0,d7,d12,d19,d26,d33,d49,d63,d77,");
        assert_eq!(lines.len(), 3);
        // FOXG1 keeps its full edge map: PAX6 matches a column, SOX2 does not.
        assert!(lines[1].starts_with("0,0.91,7,"));
        assert!(lines[2].starts_with("0,0,7,"));
    }

    #[test]
    fn restricted_graph_keeps_original_edge_maps_unmodified() {
        let db = accumulator();
        let dir = tempdir().unwrap();
        let list_path = dir.path().join("subset.txt");
        fs::write(&list_path, "FOXG1\n").unwrap();

        let mut gene_data = GeneTable::new();
        run_gene_list_filter(list_path.to_str().unwrap(), &db, &mut gene_data).unwrap();

        // The accumulator itself is untouched by the filter stage.
        assert_eq!(
            db["FOXG1"],
            BTreeMap::from([
                ("PAX6".to_string(), "0.91".to_string()),
                ("SOX2".to_string(), "0.42".to_string()),
            ])
        );
    }
}
