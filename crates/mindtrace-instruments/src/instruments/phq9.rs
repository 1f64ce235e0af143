use crate::scoring::{SafetyFlag, ScoreBand, ScoreRange};
use crate::strategy::{SafetyProbe, ScoringStrategy};
use crate::{Instrument, InstrumentCode};

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub struct Phq9;

/// Item 9 ("thoughts that you would be better off dead...").
pub const SUICIDALITY_ITEM: u32 = 8;

pub const BANDS: &[ScoreBand] = &[
    ScoreBand::new(0.0, 5.0, "Ausência ou sintomas depressivos mínimos"),
    ScoreBand::new(5.0, 10.0, "Sintomas depressivos leves"),
    ScoreBand::new(10.0, 15.0, "Depressão moderada"),
    ScoreBand::new(15.0, 20.0, "Depressão moderadamente grave"),
    ScoreBand::new(20.0, 27.0, "Depressão grave"),
];

impl Instrument for Phq9 {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn item_count(&self) -> usize {
        9
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange::likert(0.0, 3.0)
    }

    fn strategy(&self) -> ScoringStrategy {
        ScoringStrategy::Additive {
            bands: BANDS,
            safety_probe: Some(SafetyProbe {
                item_index: SUICIDALITY_ITEM,
                flag: SafetyFlag::SuicidalIdeation,
            }),
        }
    }
}
