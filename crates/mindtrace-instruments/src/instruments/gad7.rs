use crate::scoring::{ScoreBand, ScoreRange};
use crate::strategy::ScoringStrategy;
use crate::{Instrument, InstrumentCode};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

pub const BANDS: &[ScoreBand] = &[
    ScoreBand::new(0.0, 5.0, "Ansiedade mínima"),
    ScoreBand::new(5.0, 10.0, "Ansiedade leve"),
    ScoreBand::new(10.0, 15.0, "Ansiedade moderada"),
    ScoreBand::new(15.0, 21.0, "Ansiedade grave"),
];

impl Instrument for Gad7 {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn item_count(&self) -> usize {
        7
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange::likert(0.0, 3.0)
    }

    fn strategy(&self) -> ScoringStrategy {
        ScoringStrategy::Additive {
            bands: BANDS,
            safety_probe: None,
        }
    }
}
