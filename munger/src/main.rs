use std::env;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::data_handling::connections::map_connections;
use crate::data_handling::descriptions::load_gene_descriptions;
use crate::data_handling::gene_table::GeneClockTable;
use crate::emitters::chord_matrix::save_connections;
use crate::emitters::gene_list::save_gene_list;
use crate::emitters::heatmap::save_heatmap_data;
use crate::emitters::semantic::{capture_semantic_data, save_semantic_json};
use crate::filter::run_gene_list_filter;
use crate::helper_functions::log_connection_counts;
use crate::models::ConnectionGraph;

mod config;
mod data_handling;
mod emitters;
mod filter;
mod helper_functions;
mod models;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("Starting the chord data pipeline");

    let gene_table = GeneClockTable {
        path: format!("{}/GeneClockData.csv", config.data_dir),
    };
    let mut gene_data = gene_table.load()?;

    // Union of every disease's connections, consumed by the filter stage.
    let mut db = ConnectionGraph::new();

    for disease in config.selected_diseases() {
        info!("Processing {}", disease);
        let connections_filename = format!("{}/{}_data.csv", config.data_dir, disease);
        let descriptions_filename =
            format!("{}/{}_gene_descriptions.txt", config.data_dir, disease);
        let chord_filename = format!("{}/{}_chord_data.csv", config.data_dir, disease);
        let heatmap_filename = format!("{}/{}_heatmap_data.csv", config.data_dir, disease);
        let genes_filename = format!("{}/{}_gene_list.csv", config.data_dir, disease);
        let semantic_json_filename = format!("{}/{}_semantic.json", config.data_dir, disease);

        let mut nodes = ConnectionGraph::new();
        map_connections(&mut nodes, &connections_filename)?;
        map_connections(&mut db, &connections_filename)?;

        save_connections(&chord_filename, &nodes, &mut gene_data)?;
        log_connection_counts(&nodes);
        save_heatmap_data(&heatmap_filename, &nodes, &gene_data)?;
        save_gene_list(&genes_filename, &nodes)?;

        let gene_desc = load_gene_descriptions(&descriptions_filename)?;
        let sem_data =
            capture_semantic_data(&nodes, &gene_data, &gene_desc, &connections_filename)?;
        save_semantic_json(&semantic_json_filename, &sem_data)?;

        info!("{} done", disease);
    }

    if let Some(list_path) = env::args().nth(1) {
        run_gene_list_filter(&list_path, &db, &mut gene_data)?;
    }

    Ok(())
}
