pub mod connections;
pub mod descriptions;
pub mod gene_table;

use anyhow::{anyhow, Result};

/// Fetch a column from a CSV record, turning an out-of-bounds access into a
/// fatal error naming the file and row. Row numbers are 1-based and count
/// the header line, matching what an editor shows.
pub(crate) fn field<'a>(
    record: &'a csv::StringRecord,
    idx: usize,
    path: &str,
    row: usize,
) -> Result<&'a str> {
    record
        .get(idx)
        .ok_or_else(|| anyhow!("{path}: row {row}: missing column {idx}"))
}
