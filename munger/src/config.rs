use std::env;

use crate::models::DISEASES;

/// Which connection datasets a run processes. The upstream tooling only
/// ever ran the autism dataset, so that stays the default; `all` opts into
/// the full disease list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiseaseSelection {
    Single(String),
    All,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the input CSV/TSV files; outputs land next to them.
    pub data_dir: String,
    pub diseases: DiseaseSelection,
}

impl Config {
    /// Build the configuration from the environment:
    /// `MUNGE_DATA_DIR` (default `data`) and `MUNGE_DISEASES`
    /// (`all` or one disease name, default `autism`).
    pub fn from_env() -> Self {
        let data_dir = env::var("MUNGE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let diseases = match env::var("MUNGE_DISEASES") {
            Ok(value) if value.eq_ignore_ascii_case("all") => DiseaseSelection::All,
            Ok(value) => DiseaseSelection::Single(value),
            Err(_) => DiseaseSelection::Single("autism".to_string()),
        };
        Config { data_dir, diseases }
    }

    pub fn selected_diseases(&self) -> Vec<&str> {
        match &self.diseases {
            DiseaseSelection::All => DISEASES.to_vec(),
            DiseaseSelection::Single(name) => vec![name.as_str()],
        }
    }
}
