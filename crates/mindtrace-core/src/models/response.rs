use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One answered questionnaire item, as submitted by the patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawResponse {
    /// Sub-scale tag for multi-domain instruments (e.g. a WHOQOL facet).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Zero-based position of the item within the instrument.
    pub item_index: u32,
    pub value: f64,
}

impl RawResponse {
    pub fn new(item_index: u32, value: f64) -> Self {
        Self {
            domain: None,
            item_index,
            value,
        }
    }

    pub fn in_domain(domain: impl Into<String>, item_index: u32, value: f64) -> Self {
        Self {
            domain: Some(domain.into()),
            item_index,
            value,
        }
    }

    /// Build an un-tagged response set from plain item values, indexed by
    /// position.
    pub fn from_values(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Self::new(i as u32, *v))
            .collect()
    }
}
