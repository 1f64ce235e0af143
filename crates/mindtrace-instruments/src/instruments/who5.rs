use crate::scoring::{ScoreBand, ScoreRange};
use crate::strategy::ScoringStrategy;
use crate::{Instrument, InstrumentCode};

/// WHO-5 Well-Being Index.
/// 5 items, each rated 0–5. Raw 0–25, reported as a 0–100 percentage.
pub struct Who5;

pub const SCALE_FACTOR: f64 = 4.0;

pub const BANDS: &[ScoreBand] = &[
    ScoreBand::new(0.0, 29.0, "Bem-estar muito baixo"),
    ScoreBand::new(29.0, 50.0, "Bem-estar reduzido"),
    ScoreBand::new(50.0, 100.0, "Bem-estar preservado"),
];

impl Instrument for Who5 {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Who5
    }

    fn name(&self) -> &str {
        "WHO-5"
    }

    fn item_count(&self) -> usize {
        5
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange::likert(0.0, 5.0)
    }

    fn strategy(&self) -> ScoringStrategy {
        ScoringStrategy::Scaled {
            bands: BANDS,
            factor: SCALE_FACTOR,
        }
    }
}
