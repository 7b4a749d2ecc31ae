use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

/// Sampling days of the expression time course, in emission order.
pub const DAYS: [&str; 9] = ["d0", "d7", "d12", "d19", "d26", "d33", "d49", "d63", "d77"];

/// Diseases with connection datasets. The first six also form the
/// `Relations` section of the semantic graph.
pub const DISEASES: [&str; 9] = [
    "alzheimer",
    "autism",
    "holoprecencephaly",
    "lissencephaly",
    "microcephaly",
    "tauopathy",
    "WBSsymmetrical",
    "WBShighlyLinear",
    "WilliamsBeurenSyndrome",
];

/// Master table of per-gene expression and disease-association data,
/// keyed by gene symbol.
pub type GeneTable = BTreeMap<String, GeneRecord>;

/// Directed connection graph: gene symbol -> {neighbor symbol -> score}.
/// Scores stay as the raw strings from the source file so that matrix
/// emission is a byte-exact pass-through. Every gene referenced as either
/// endpoint of an edge is present as a key, possibly with no edges.
pub type ConnectionGraph = BTreeMap<String, BTreeMap<String, String>>;

/// One row of the master gene table. Day values and disease flags are kept
/// as the raw strings from the file; only the semantic path parses days to
/// numbers. Records are never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRecord {
    /// Expression values aligned with [`DAYS`]; may be empty strings.
    pub days: [String; 9],
    pub cluster: String,
    pub autism: String,
    pub holoprecencephaly: String,
    pub microcephaly: String,
    pub lissencephaly: String,
    pub alzheimer: String,
    pub tauopathy: String,
}

impl GeneRecord {
    /// Default record for a gene that shows up in a connection graph but
    /// not in the master table: blank expression data, cluster 7.
    pub fn hole() -> Self {
        GeneRecord {
            days: Default::default(),
            cluster: "7".to_string(),
            autism: String::new(),
            holoprecencephaly: String::new(),
            microcephaly: String::new(),
            lissencephaly: String::new(),
            alzheimer: String::new(),
            tauopathy: String::new(),
        }
    }
}

/// Named sub-scores of one gene-gene connection, taken from columns 6-14 of
/// the connection file. Bundles are built once and never mutated; the same
/// values land in the source gene's `Outgoing` and the target's `Incoming`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeScores {
    pub neighborhood: f64,
    pub fusion: f64,
    pub cooccurence: f64,
    pub homology: f64,
    pub coexpression: f64,
    pub experimental: f64,
    pub knowledge: f64,
    pub textmining: f64,
    #[serde(rename = "combined score")]
    pub combined_score: f64,
}

impl EdgeScores {
    /// Parse the nine sub-scores out of one connection row. Column indices
    /// are fixed by the upstream file format.
    pub fn parse(record: &csv::StringRecord, path: &str, row: usize) -> Result<Self> {
        let score = |idx: usize| -> Result<f64> {
            let raw = record
                .get(idx)
                .ok_or_else(|| anyhow!("{path}: row {row}: missing column {idx}"))?;
            raw.parse().with_context(|| {
                format!("{path}: row {row}: column {idx} value {raw:?} is not numeric")
            })
        };
        Ok(EdgeScores {
            neighborhood: score(6)?,
            fusion: score(7)?,
            cooccurence: score(8)?,
            homology: score(9)?,
            coexpression: score(10)?,
            experimental: score(11)?,
            knowledge: score(12)?,
            textmining: score(13)?,
            combined_score: score(14)?,
        })
    }
}

/// Expression values of the semantic graph, numeric and in day order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayValues {
    pub d0: f64,
    pub d7: f64,
    pub d12: f64,
    pub d19: f64,
    pub d26: f64,
    pub d33: f64,
    pub d49: f64,
    pub d63: f64,
    pub d77: f64,
}

impl DayValues {
    pub fn from_record(gene: &str, record: &GeneRecord) -> Result<Self> {
        let day = |idx: usize| -> Result<f64> {
            let raw = &record.days[idx];
            raw.parse().with_context(|| {
                format!("gene {gene}: day {} value {raw:?} is not numeric", DAYS[idx])
            })
        };
        Ok(DayValues {
            d0: day(0)?,
            d7: day(1)?,
            d12: day(2)?,
            d19: day(3)?,
            d26: day(4)?,
            d33: day(5)?,
            d49: day(6)?,
            d63: day(7)?,
            d77: day(8)?,
        })
    }
}

/// Disease-association booleans of the semantic graph, covering the first
/// six entries of [`DISEASES`]. A flag counts as associated only when the
/// source cell reads exactly "yes".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseRelations {
    pub alzheimer: bool,
    pub autism: bool,
    pub holoprecencephaly: bool,
    pub lissencephaly: bool,
    pub microcephaly: bool,
    pub tauopathy: bool,
}

impl DiseaseRelations {
    pub fn from_record(record: &GeneRecord) -> Self {
        DiseaseRelations {
            alzheimer: record.alzheimer == "yes",
            autism: record.autism == "yes",
            holoprecencephaly: record.holoprecencephaly == "yes",
            lissencephaly: record.lissencephaly == "yes",
            microcephaly: record.microcephaly == "yes",
            tauopathy: record.tauopathy == "yes",
        }
    }
}

/// One gene of the semantic JSON graph.
#[derive(Debug, Clone, Serialize)]
pub struct SemanticGene {
    #[serde(rename = "Days")]
    pub days: DayValues,
    #[serde(rename = "Relations")]
    pub relations: DiseaseRelations,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Outgoing")]
    pub outgoing: BTreeMap<String, EdgeScores>,
    #[serde(rename = "Incoming")]
    pub incoming: BTreeMap<String, EdgeScores>,
}
