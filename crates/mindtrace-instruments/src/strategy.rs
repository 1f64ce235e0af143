//! The closed set of scoring rules shared by the supported instruments.

use std::collections::{BTreeMap, HashSet};

use mindtrace_core::models::response::RawResponse;

use crate::error::InstrumentError;
use crate::scoring::{SafetyFlag, ScoreBand, ScoringResult, classify};

/// An item whose positive answer raises a safety flag on its own.
///
/// The item is identified by its `item_index` tag, never by where it happens
/// to sit in the response slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyProbe {
    pub item_index: u32,
    pub flag: SafetyFlag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringStrategy {
    /// Sum every value and look the sum up in `bands`.
    Additive {
        bands: &'static [ScoreBand],
        safety_probe: Option<SafetyProbe>,
    },
    /// Sum every value, multiply by `factor`, then look the result up.
    Scaled {
        bands: &'static [ScoreBand],
        factor: f64,
    },
    /// Mean per domain tag, normalized to 0–100 as
    /// `(mean - item_min) * multiplier`; the overall score is the unweighted
    /// mean of the domain scores.
    DomainAveraged {
        bands: &'static [ScoreBand],
        item_min: f64,
        multiplier: f64,
    },
}

impl ScoringStrategy {
    pub fn bands(&self) -> &'static [ScoreBand] {
        match self {
            Self::Additive { bands, .. }
            | Self::Scaled { bands, .. }
            | Self::DomainAveraged { bands, .. } => bands,
        }
    }

    /// Apply this rule to a non-empty response set in which every
    /// `item_index` appears once. `instrument` is only used to label errors.
    pub fn apply(
        &self,
        instrument: &str,
        responses: &[RawResponse],
    ) -> Result<ScoringResult, InstrumentError> {
        if responses.is_empty() {
            return Err(InstrumentError::invalid(instrument, "no responses"));
        }
        reject_repeated_items(instrument, responses)?;

        let (total_score, alerts, domain_scores) = match self {
            Self::Additive { safety_probe, .. } => {
                let alerts = match safety_probe {
                    Some(probe) => check_probe(instrument, probe, responses)?,
                    None => Vec::new(),
                };
                (sum(responses), alerts, BTreeMap::new())
            }
            Self::Scaled { factor, .. } => (sum(responses) * factor, Vec::new(), BTreeMap::new()),
            Self::DomainAveraged {
                item_min,
                multiplier,
                ..
            } => {
                let (overall, domains) =
                    domain_average(instrument, responses, *item_min, *multiplier)?;
                (overall, Vec::new(), domains)
            }
        };

        let band = classify(self.bands(), total_score).ok_or_else(|| {
            InstrumentError::invalid(
                instrument,
                format!("score {total_score} falls outside every classification band"),
            )
        })?;

        Ok(ScoringResult {
            total_score,
            classification: band.label.to_string(),
            alerts,
            domain_scores,
        })
    }
}

fn reject_repeated_items(instrument: &str, responses: &[RawResponse]) -> Result<(), InstrumentError> {
    let mut seen = HashSet::with_capacity(responses.len());
    match responses.iter().find(|r| !seen.insert(r.item_index)) {
        Some(dup) => Err(InstrumentError::invalid(
            instrument,
            format!("item {} answered more than once", dup.item_index),
        )),
        None => Ok(()),
    }
}

fn sum(responses: &[RawResponse]) -> f64 {
    responses.iter().map(|r| r.value).sum()
}

fn check_probe(
    instrument: &str,
    probe: &SafetyProbe,
    responses: &[RawResponse],
) -> Result<Vec<SafetyFlag>, InstrumentError> {
    let item = responses
        .iter()
        .find(|r| r.item_index == probe.item_index)
        .ok_or_else(|| {
            InstrumentError::invalid(
                instrument,
                format!("safety-probe item {} is missing", probe.item_index),
            )
        })?;

    Ok(if item.value > 0.0 {
        vec![probe.flag]
    } else {
        Vec::new()
    })
}

struct DomainAccumulator {
    name: String,
    total: f64,
    count: u32,
}

fn domain_average(
    instrument: &str,
    responses: &[RawResponse],
    item_min: f64,
    multiplier: f64,
) -> Result<(f64, BTreeMap<String, f64>), InstrumentError> {
    // Insertion order follows the first appearance of each domain tag.
    let mut groups: Vec<DomainAccumulator> = Vec::new();
    for response in responses {
        let name = match response.domain.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(InstrumentError::invalid(
                    instrument,
                    format!("item {} has no domain tag", response.item_index),
                ));
            }
        };

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => {
                group.total += response.value;
                group.count += 1;
            }
            None => groups.push(DomainAccumulator {
                name: name.to_string(),
                total: response.value,
                count: 1,
            }),
        }
    }

    let scores: Vec<(String, f64)> = groups
        .into_iter()
        .map(|g| {
            let mean = g.total / f64::from(g.count);
            (g.name, (mean - item_min) * multiplier)
        })
        .collect();

    let overall = scores.iter().map(|(_, s)| s).sum::<f64>() / scores.len() as f64;
    Ok((overall, scores.into_iter().collect()))
}
