use std::io::Cursor;

use super::common::*;
use crate::monitors::cognitive::domain::{FactorKind, SensorSnapshot};
use crate::monitors::cognitive::evaluation::{
    DiseaseStage, FactorRule, FactorTable, FactorTableError, RiskEvaluator, RiskTier,
};

fn heart_rate_matched(heart_rate: f64) -> bool {
    let snapshot = SensorSnapshot {
        heart_rate,
        ..clear_snapshot()
    };
    evaluator()
        .evaluate(&snapshot)
        .matched_factors
        .iter()
        .any(|factor| factor.factor == FactorKind::HeartRate)
}

#[test]
fn reference_weights_sum_to_one() {
    let table = FactorTable::reference();
    assert_eq!(table.rules().len(), 7);
    assert!((table.total_weight() - 1.0).abs() < 1e-9);

    let result = evaluator().evaluate(&all_bands_snapshot());
    assert_eq!(result.risk_percentage, 100.0);
}

#[test]
fn band_edges_are_inclusive() {
    assert!(heart_rate_matched(55.0));
    assert!(heart_rate_matched(90.0));
    assert!(!heart_rate_matched(54.99));
    assert!(!heart_rate_matched(90.01));
}

#[test]
fn all_bands_snapshot_is_critical_detection() {
    let result = evaluator().evaluate(&all_bands_snapshot());

    assert!(result.detected);
    assert_eq!(result.risk_percentage, 100.0);
    assert_eq!(result.risk_level, RiskTier::Critical);
    assert_eq!(result.disease_stage, DiseaseStage::Advanced);
    assert_eq!(result.total_factors, 7);
    assert_eq!(result.evaluated_at, evaluated_at());
    assert_eq!(result.timestamp_label(), "2025-03-14 09:30:00 UTC");

    let order: Vec<FactorKind> = result
        .matched_factors
        .iter()
        .map(|factor| factor.factor)
        .collect();
    assert_eq!(order, FactorKind::ALL);
    assert_eq!(result.matched_factors[0].name, "Heart Rate");
}

#[test]
fn matched_factors_render_values_and_bands_with_units() {
    let result = evaluator().evaluate(&all_bands_snapshot());

    let rendered: Vec<(&str, &str)> = result
        .matched_factors
        .iter()
        .map(|factor| (factor.value.as_str(), factor.band.as_str()))
        .collect();
    assert_eq!(
        rendered,
        [
            ("70", "55-90 BPM"),
            ("94%", "92-96%"),
            ("36.5°C", "36-36.8°C"),
            ("0.1000", "0.05-0.15"),
            ("0.7500g", "0.6-0.9g"),
            ("5", "3-7"),
            ("60%", "50-70%"),
        ]
    );
    assert!(result.matched_factors[1]
        .rationale
        .contains("Chronic hypoxia"));
}

#[test]
fn displayed_values_round_exact_halves_up() {
    assert_eq!(FactorKind::BodyTemperature.format_value(36.25), "36.3°C");
    assert_eq!(FactorKind::BodyTemperature.format_value(36.75), "36.8°C");
    assert_eq!(FactorKind::BodyTemperature.format_value(36.44), "36.4°C");
    assert_eq!(FactorKind::Acceleration.format_value(0.71875), "0.7188g");
    assert_eq!(FactorKind::BalanceAngle.format_value(-0.03125), "-0.0313");
    assert_eq!(FactorKind::BalanceAngle.format_value(0.1), "0.1000");
}

#[test]
fn clear_snapshot_is_not_detected() {
    let result = evaluator().evaluate(&clear_snapshot());

    assert!(!result.detected);
    assert_eq!(result.risk_percentage, 0.0);
    assert_eq!(result.risk_score, 0.0);
    assert_eq!(result.risk_level, RiskTier::Low);
    assert_eq!(result.disease_stage, DiseaseStage::NoSignificantRisk);
    assert!(result.matched_factors.is_empty());
    assert_eq!(result.total_factors, 0);
}

#[test]
fn resting_snapshot_only_matches_heart_rate() {
    let result = evaluator().evaluate(&resting_snapshot());

    assert!(!result.detected);
    assert_eq!(result.risk_percentage, 15.0);
    assert_eq!(result.risk_level, RiskTier::Low);
    assert_eq!(result.total_factors, 1);
    assert_eq!(result.matched_factors[0].factor, FactorKind::HeartRate);
}

#[test]
fn partial_matches_accumulate_weights() {
    let snapshot = SensorSnapshot {
        heart_rate: 80.0,
        spo2: 93.0,
        acceleration: 0.8,
        energy: 4.0,
        ..clear_snapshot()
    };

    let result = evaluator().evaluate(&snapshot);

    assert_eq!(result.total_factors, 4);
    assert_eq!(result.risk_percentage, 65.0);
    assert_eq!(result.risk_level, RiskTier::Moderate);
    assert_eq!(result.disease_stage, DiseaseStage::MildToModerate);
    assert!(result.detected);
}

#[test]
fn below_forty_percent_is_low_without_detection() {
    let snapshot = SensorSnapshot {
        heart_rate: 80.0,
        spo2: 93.0,
        ..clear_snapshot()
    };

    let result = evaluator().evaluate(&snapshot);

    assert_eq!(result.risk_percentage, 35.0);
    assert_eq!(result.risk_level, RiskTier::Low);
    assert!(!result.detected);
}

#[test]
fn tier_thresholds_are_closed_from_below() {
    let cases = [
        (39.9, RiskTier::Low),
        (40.0, RiskTier::LowModerate),
        (59.9, RiskTier::LowModerate),
        (60.0, RiskTier::Moderate),
        (69.9, RiskTier::Moderate),
        (70.0, RiskTier::High),
        (79.9, RiskTier::High),
        (80.0, RiskTier::Critical),
        (100.0, RiskTier::Critical),
    ];

    for (percentage, expected) in cases {
        assert_eq!(RiskTier::classify(percentage), expected, "p = {percentage}");
    }
}

#[test]
fn tier_labels_round_trip() {
    for tier in RiskTier::ALL {
        assert_eq!(RiskTier::from_label(tier.label()), Some(tier));
    }
    assert_eq!(RiskTier::from_label("low_moderate"), Some(RiskTier::LowModerate));
    assert_eq!(RiskTier::from_label(" CRITICAL "), Some(RiskTier::Critical));
    assert_eq!(RiskTier::from_label("severe"), None);
    assert_eq!(
        serde_json::to_value(RiskTier::LowModerate).expect("serialize"),
        serde_json::json!("Low-Moderate")
    );
}

#[test]
fn evaluation_is_idempotent() {
    let evaluator = evaluator();
    let snapshot = all_bands_snapshot();

    let first = evaluator.evaluate(&snapshot);
    let second = evaluator.evaluate(&snapshot);

    assert_eq!(first, second);
}

#[test]
fn evaluation_never_mutates_the_snapshot() {
    let snapshot = all_bands_snapshot();
    let before = snapshot.clone();
    let _ = evaluator().evaluate(&snapshot);
    assert_eq!(snapshot, before);
}

#[test]
fn custom_tables_normalize_by_total_weight() {
    let table = FactorTable::new(vec![
        FactorRule::new(FactorKind::HeartRate, 55.0, 90.0, 0.5),
        FactorRule::new(FactorKind::BloodOxygen, 92.0, 96.0, 0.5),
        FactorRule::new(FactorKind::Humidity, 50.0, 70.0, 0.5),
    ])
    .expect("valid table");
    let evaluator = RiskEvaluator::new(table);

    let snapshot = SensorSnapshot {
        heart_rate: 72.0,
        ..clear_snapshot()
    };
    let result = evaluator.evaluate(&snapshot);

    assert_eq!(result.risk_score, 0.5);
    assert_eq!(result.risk_percentage, 33.3);
    assert_eq!(result.risk_level, RiskTier::Low);
}

#[test]
fn summary_reports_detection_narrative() {
    let detected = evaluator().evaluate(&all_bands_snapshot()).summary();
    assert!(detected.contains("detected 7 risk factors"));
    assert!(detected.contains("100.0%"));
    assert!(detected.contains("Disease Stage: Advanced Stage."));

    let clear = evaluator().evaluate(&clear_snapshot()).summary();
    assert!(clear.contains("below the 60% threshold"));
}

#[test]
fn table_validation_rejects_bad_rules() {
    assert!(matches!(FactorTable::new(Vec::new()), Err(FactorTableError::Empty)));

    let duplicate = FactorTable::new(vec![
        FactorRule::new(FactorKind::HeartRate, 55.0, 90.0, 0.5),
        FactorRule::new(FactorKind::HeartRate, 60.0, 80.0, 0.5),
    ]);
    assert!(matches!(
        duplicate,
        Err(FactorTableError::DuplicateFactor(FactorKind::HeartRate))
    ));

    for weight in [0.0, -0.1, 1.5, f64::NAN] {
        let result = FactorTable::new(vec![FactorRule::new(FactorKind::Humidity, 50.0, 70.0, weight)]);
        assert!(
            matches!(result, Err(FactorTableError::InvalidWeight { .. })),
            "weight {weight} accepted"
        );
    }

    let inverted = FactorTable::new(vec![FactorRule::new(FactorKind::EnergyLevel, 7.0, 3.0, 0.2)]);
    assert!(matches!(inverted, Err(FactorTableError::InvalidBand { .. })));

    let unbounded = FactorTable::new(vec![FactorRule::new(
        FactorKind::EnergyLevel,
        3.0,
        f64::INFINITY,
        0.2,
    )]);
    assert!(matches!(unbounded, Err(FactorTableError::InvalidBand { .. })));
}

#[test]
fn json_tables_fill_default_names_and_rationales() {
    let json = r#"{"rules": [
        {"factor": "heart_rate", "min": 50, "max": 95, "weight": 0.6},
        {"factor": "blood_oxygen", "min": 90, "max": 96, "weight": 0.4, "name": "SpO2"}
    ]}"#;

    let table = FactorTable::from_json_reader(Cursor::new(json)).expect("table");

    assert_eq!(table.rules()[0].name, "Heart Rate");
    assert!(table.rules()[0].rationale.contains("heart rate variability"));
    assert_eq!(table.rules()[1].name, "SpO2");
    assert_eq!(table.rules()[0].band(), "50-95 BPM");
}

#[test]
fn json_tables_surface_parse_errors() {
    let error = FactorTable::from_json_reader(Cursor::new(r#"{"rules": [{"factor": "pulse"}]}"#))
        .expect_err("unknown factor");
    assert!(matches!(error, FactorTableError::Json(_)));

    let error = FactorTable::from_path("./missing-factor-table.json").expect_err("missing file");
    assert!(matches!(error, FactorTableError::Io(_)));
}
