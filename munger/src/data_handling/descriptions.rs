use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{anyhow, Context, Result};
use tracing::info;

/// Read a tab-delimited gene description file: column 0 is the symbol,
/// column 2 the description, which may be wrapped in double quotes.
pub fn load_gene_descriptions(path: &str) -> Result<BTreeMap<String, String>> {
    info!("Reading gene descriptions from: {}", path);
    let file = File::open(path).with_context(|| format!("opening gene descriptions {path}"))?;
    let reader = BufReader::new(file);

    let mut descriptions = BTreeMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading gene descriptions {path}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let symbol = fields[0];
        let description = fields.get(2).ok_or_else(|| {
            anyhow!(
                "{path}: line {}: expected 3 tab-delimited columns, got {}",
                idx + 1,
                fields.len()
            )
        })?;
        descriptions.insert(
            symbol.to_string(),
            description.trim_matches('"').to_string(),
        );
    }
    Ok(descriptions)
}
