use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::data_handling::field;
use crate::models::{GeneRecord, GeneTable};

/// Loader for the master gene table (`GeneClockData.csv`): one row per
/// gene carrying the expression time course, cluster assignment, and
/// disease-association flags.
pub struct GeneClockTable {
    pub path: String,
}

impl GeneClockTable {
    /// Read the table into a map keyed by gene symbol. The first row is a
    /// header. Column layout (0-based): 1 = symbol, 2-10 = day values,
    /// 11 = cluster, 14-19 = disease flags. A row missing any of these
    /// columns fails the whole load.
    pub fn load(&self) -> Result<GeneTable> {
        info!("Reading gene clock data from: {}", self.path);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("opening gene table {}", self.path))?;

        let mut gene_data = GeneTable::new();
        for (idx, record) in reader.records().enumerate() {
            let row = idx + 2;
            let record =
                record.with_context(|| format!("{}: row {row}: malformed CSV", self.path))?;
            let column = |i: usize| -> Result<String> {
                Ok(field(&record, i, &self.path, row)?.to_string())
            };

            let symbol = column(1)?;
            let mut days: [String; 9] = Default::default();
            for (slot, value) in days.iter_mut().zip(2..=10) {
                *slot = column(value)?;
            }
            gene_data.insert(
                symbol,
                GeneRecord {
                    days,
                    cluster: column(11)?,
                    autism: column(14)?,
                    holoprecencephaly: column(15)?,
                    microcephaly: column(16)?,
                    lissencephaly: column(17)?,
                    alzheimer: column(18)?,
                    tauopathy: column(19)?,
                },
            );
        }
        debug!("Loaded {} gene records", gene_data.len());
        Ok(gene_data)
    }
}
