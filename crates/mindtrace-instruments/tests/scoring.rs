use mindtrace_core::models::response::RawResponse;
use mindtrace_instruments::error::InstrumentError;
use mindtrace_instruments::scoring::{SafetyFlag, ScoreBand, classify, partitions};
use mindtrace_instruments::{InstrumentCode, all_instruments, get_instrument, score};

fn responses(values: &[f64]) -> Vec<RawResponse> {
    RawResponse::from_values(values)
}

/// Nine PHQ-9 items summing to `total`, with item 8 left at zero.
fn phq9_summing_to(total: u32) -> Vec<RawResponse> {
    let mut values = [0.0; 9];
    let mut remaining = total;
    for v in values.iter_mut().take(8) {
        let take = remaining.min(3);
        *v = f64::from(take);
        remaining -= take;
    }
    responses(&values)
}

#[test]
fn phq9_mild_scenario() {
    let result = score("phq_9", &responses(&[3.0, 2.0, 1.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0])).unwrap();
    assert_eq!(result.total_score, 9.0);
    assert_eq!(result.classification, "Sintomas depressivos leves");
    assert!(result.alerts.is_empty());
    assert!(result.domain_scores.is_empty());
}

#[test]
fn phq9_boundary_resolves_to_higher_band() {
    assert_eq!(
        score("phq_9", &phq9_summing_to(4)).unwrap().classification,
        "Ausência ou sintomas depressivos mínimos"
    );
    assert_eq!(
        score("phq_9", &phq9_summing_to(5)).unwrap().classification,
        "Sintomas depressivos leves"
    );
    assert_eq!(
        score("phq_9", &phq9_summing_to(10)).unwrap().classification,
        "Depressão moderada"
    );
    assert_eq!(
        score("phq_9", &phq9_summing_to(15)).unwrap().classification,
        "Depressão moderadamente grave"
    );
    assert_eq!(
        score("phq_9", &phq9_summing_to(20)).unwrap().classification,
        "Depressão grave"
    );
}

#[test]
fn phq9_maximum_is_severe() {
    let result = score("phq_9", &responses(&[3.0; 9])).unwrap();
    assert_eq!(result.total_score, 27.0);
    assert_eq!(result.classification, "Depressão grave");
}

#[test]
fn phq9_positive_probe_raises_suicidality_alert() {
    let result = score("phq_9", &responses(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0])).unwrap();
    assert_eq!(result.classification, "Ausência ou sintomas depressivos mínimos");
    assert_eq!(result.alerts, vec![SafetyFlag::SuicidalIdeation]);
    assert_eq!(result.alerts[0].to_string(), "Ideação suicida presente");
}

#[test]
fn phq9_probe_found_by_item_index_not_position() {
    // Probe item submitted first; a positional lookup would miss it.
    let mut set = responses(&[0.0; 8]);
    set.insert(0, RawResponse::new(8, 2.0));
    let result = score("phq_9", &set).unwrap();
    assert_eq!(result.alerts, vec![SafetyFlag::SuicidalIdeation]);
    assert_eq!(result.total_score, 2.0);
}

#[test]
fn repeated_item_index_is_invalid_response_set() {
    // A second, positive answer to item 8 must not slip past the alert.
    let mut set = responses(&[0.0; 9]);
    set.push(RawResponse::new(8, 3.0));
    let err = score("phq_9", &set).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidResponseSet { .. }));
    assert!(err.to_string().contains("item 8 answered more than once"));

    let mut set = responses(&[1.0; 5]);
    set.push(RawResponse::new(0, 1.0));
    assert!(matches!(
        score("who_5", &set),
        Err(InstrumentError::InvalidResponseSet { .. })
    ));

    let set = vec![
        RawResponse::in_domain("Físico", 0, 3.0),
        RawResponse::in_domain("Psicológico", 0, 3.0),
    ];
    assert!(matches!(
        score("whoqol_bref", &set),
        Err(InstrumentError::InvalidResponseSet { .. })
    ));
}

#[test]
fn phq9_missing_probe_is_invalid_response_set() {
    let err = score("phq_9", &responses(&[1.0, 1.0, 1.0])).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidResponseSet { .. }));
    assert!(err.to_string().contains("safety-probe item 8"));
}

#[test]
fn gad7_bands() {
    let cases = [
        ([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "Ansiedade mínima"),
        ([2.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0], "Ansiedade leve"),
        ([3.0, 3.0, 3.0, 1.0, 0.0, 0.0, 0.0], "Ansiedade moderada"),
        ([3.0, 3.0, 3.0, 3.0, 3.0, 0.0, 0.0], "Ansiedade grave"),
        ([3.0; 7], "Ansiedade grave"),
    ];
    for (values, expected) in cases {
        let result = score("gad_7", &responses(&values)).unwrap();
        assert_eq!(result.classification, expected, "values {values:?}");
        assert!(result.alerts.is_empty());
    }
}

#[test]
fn gad7_needs_no_probe_item() {
    let result = score("gad_7", &responses(&[1.0, 1.0])).unwrap();
    assert_eq!(result.total_score, 2.0);
}

#[test]
fn who5_scales_before_lookup() {
    let result = score("who_5", &responses(&[2.0, 2.0, 1.0, 1.0, 1.0])).unwrap();
    assert_eq!(result.total_score, 28.0);
    assert_eq!(result.classification, "Bem-estar muito baixo");

    // Raw 12 → 48: a raw-sum lookup would have landed in the lowest band.
    let result = score("who_5", &responses(&[3.0, 3.0, 2.0, 2.0, 2.0])).unwrap();
    assert_eq!(result.total_score, 48.0);
    assert_eq!(result.classification, "Bem-estar reduzido");

    let result = score("who_5", &responses(&[5.0; 5])).unwrap();
    assert_eq!(result.total_score, 100.0);
    assert_eq!(result.classification, "Bem-estar preservado");
}

#[test]
fn whoqol_single_domain_overall_equals_domain_score() {
    let set = vec![
        RawResponse::in_domain("Físico", 0, 4.0),
        RawResponse::in_domain("Físico", 1, 3.0),
        RawResponse::in_domain("Físico", 2, 5.0),
    ];
    let result = score("whoqol_bref", &set).unwrap();
    assert_eq!(result.domain_scores.len(), 1);
    assert_eq!(result.domain_scores["Físico"], 75.0);
    assert_eq!(result.total_score, result.domain_scores["Físico"]);
    assert_eq!(result.classification, "Qualidade de vida boa");
}

#[test]
fn whoqol_overall_is_unweighted_mean_of_domains() {
    // Físico mean 2 → 25, Psicológico mean 4 → 75 with three times the items.
    let set = vec![
        RawResponse::in_domain("Físico", 0, 2.0),
        RawResponse::in_domain("Psicológico", 1, 4.0),
        RawResponse::in_domain("Psicológico", 2, 4.0),
        RawResponse::in_domain("Psicológico", 3, 4.0),
    ];
    let result = score("whoqol_bref", &set).unwrap();
    assert_eq!(result.domain_scores["Físico"], 25.0);
    assert_eq!(result.domain_scores["Psicológico"], 75.0);
    assert_eq!(result.total_score, 50.0);
    assert_eq!(result.classification, "Qualidade de vida intermediária");
}

#[test]
fn whoqol_band_boundaries_resolve_upward() {
    let domain = |values: &[f64]| -> Vec<RawResponse> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| RawResponse::in_domain("Físico", i as u32, *v))
            .collect()
    };

    // Mean 2.6 → 40.
    let result = score("whoqol_bref", &domain(&[3.0, 3.0, 3.0, 2.0, 2.0])).unwrap();
    assert_eq!(result.total_score, 40.0);
    assert_eq!(result.classification, "Qualidade de vida intermediária");

    // Mean 3.8 → 70.
    let result = score("whoqol_bref", &domain(&[4.0, 4.0, 4.0, 4.0, 3.0])).unwrap();
    assert_eq!(result.total_score, 70.0);
    assert_eq!(result.classification, "Qualidade de vida boa");
}

#[test]
fn whoqol_domains_come_from_input() {
    let set = vec![
        RawResponse::in_domain("Sono", 0, 1.0),
        RawResponse::in_domain("Lazer", 1, 2.0),
        RawResponse::in_domain("Trabalho", 2, 1.0),
    ];
    let result = score("whoqol_bref", &set).unwrap();
    let names: Vec<_> = result.domain_scores.keys().cloned().collect();
    assert_eq!(names, vec!["Lazer", "Sono", "Trabalho"]);
    assert_eq!(result.classification, "Qualidade de vida ruim");
}

#[test]
fn whoqol_rejects_missing_or_blank_domain() {
    let untagged = vec![RawResponse::in_domain("Físico", 0, 3.0), RawResponse::new(1, 3.0)];
    let err = score("whoqol_bref", &untagged).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidResponseSet { .. }));

    let blank = vec![RawResponse::in_domain("  ", 0, 3.0)];
    assert!(matches!(
        score("whoqol_bref", &blank),
        Err(InstrumentError::InvalidResponseSet { .. })
    ));
}

#[test]
fn empty_response_set_is_rejected_for_every_instrument() {
    for instrument in all_instruments() {
        let err = instrument.score(&[]).unwrap_err();
        assert!(
            matches!(err, InstrumentError::InvalidResponseSet { .. }),
            "{} accepted an empty response set",
            instrument.name()
        );
    }
}

#[test]
fn score_outside_every_band_is_an_error() {
    // Out-of-scale values slip past the scorer but never past the bands.
    let err = score("gad_7", &responses(&[9.0, 9.0, 9.0])).unwrap_err();
    assert!(err.to_string().contains("outside every classification band"));

    let err = score("phq_9", &responses(&[-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidResponseSet { .. }));
}

#[test]
fn unknown_code_is_typed_error() {
    let err = score("bdi_ii", &responses(&[1.0])).unwrap_err();
    assert_eq!(err, InstrumentError::UnknownInstrument("bdi_ii".to_string()));
    assert!(get_instrument("PHQ-9").is_none());
}

#[test]
fn band_tables_partition_their_score_range() {
    let expected = [
        (InstrumentCode::Phq9, 0.0, 27.0),
        (InstrumentCode::Gad7, 0.0, 21.0),
        (InstrumentCode::Who5, 0.0, 100.0),
        (InstrumentCode::WhoqolBref, 0.0, 100.0),
    ];
    for (code, min, max) in expected {
        let bands = code.instrument().strategy().bands();
        assert!(partitions(bands, min, max), "{code} bands leave gaps");
    }
}

#[test]
fn classify_is_lower_inclusive_and_top_closed() {
    const BANDS: &[ScoreBand] = &[ScoreBand::new(0.0, 5.0, "low"), ScoreBand::new(5.0, 10.0, "high")];
    assert_eq!(classify(BANDS, 4.999).unwrap().label, "low");
    assert_eq!(classify(BANDS, 5.0).unwrap().label, "high");
    assert_eq!(classify(BANDS, 10.0).unwrap().label, "high");
    assert!(classify(BANDS, 10.5).is_none());
    assert!(classify(BANDS, f64::NAN).is_none());
    assert!(classify(&[], 1.0).is_none());
}

#[test]
fn instrument_codes_round_trip_through_strings() {
    for code in InstrumentCode::ALL {
        assert_eq!(code.as_str().parse::<InstrumentCode>().unwrap(), code);
        assert_eq!(code.instrument().code(), code);
    }
}

#[test]
fn validate_responses_reports_out_of_scale_items() {
    let instrument = get_instrument("phq_9").unwrap();
    let set = responses(&[0.0, 4.0, 1.5, 3.0]);
    let errors = instrument.validate_responses(&set);
    let bad: Vec<_> = errors.iter().map(|e| e.item_index).collect();
    assert_eq!(bad, vec![1, 2]);
    assert!(errors[0].message.contains("PHQ-9"));

    let whoqol = get_instrument("whoqol_bref").unwrap();
    assert_eq!(whoqol.validate_responses(&responses(&[0.0, 1.0, 5.0])).len(), 1);
}

#[test]
fn scoring_result_serializes_flags_and_domains() {
    let mut values = vec![0.0; 9];
    values[8] = 2.0;
    let result = score("phq_9", &responses(&values)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["alerts"], serde_json::json!(["suicidal_ideation"]));
    assert_eq!(json["domain_scores"], serde_json::json!({}));
    assert_eq!(
        serde_json::to_value(InstrumentCode::WhoqolBref).unwrap(),
        "whoqol_bref"
    );
}
