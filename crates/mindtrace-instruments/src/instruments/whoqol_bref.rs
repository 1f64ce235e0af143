use crate::scoring::{ScoreBand, ScoreRange};
use crate::strategy::ScoringStrategy;
use crate::{Instrument, InstrumentCode};

/// WHOQOL-BREF: WHO Quality of Life, abbreviated version.
/// 26 items rated 1–5, each tagged with its domain. Domain means are mapped
/// onto 0–100; the domain set comes from the responses themselves.
pub struct WhoqolBref;

/// Maps an item mean in 1–5 onto 0–100.
pub const DOMAIN_MULTIPLIER: f64 = 25.0;

pub const BANDS: &[ScoreBand] = &[
    ScoreBand::new(0.0, 40.0, "Qualidade de vida ruim"),
    ScoreBand::new(40.0, 70.0, "Qualidade de vida intermediária"),
    ScoreBand::new(70.0, 100.0, "Qualidade de vida boa"),
];

impl Instrument for WhoqolBref {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::WhoqolBref
    }

    fn name(&self) -> &str {
        "WHOQOL-BREF"
    }

    fn item_count(&self) -> usize {
        26
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange::likert(1.0, 5.0)
    }

    fn strategy(&self) -> ScoringStrategy {
        ScoringStrategy::DomainAveraged {
            bands: BANDS,
            item_min: 1.0,
            multiplier: DOMAIN_MULTIPLIER,
        }
    }
}
