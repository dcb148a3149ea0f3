use super::super::domain::SensorSnapshot;
use super::config::FactorTable;
use super::MatchedFactor;

pub(crate) struct ScoreSignals {
    pub risk_score: f64,
    pub total_weight: f64,
}

impl ScoreSignals {
    pub fn risk_percentage(&self) -> f64 {
        if self.total_weight > 0.0 {
            100.0 * self.risk_score / self.total_weight
        } else {
            0.0
        }
    }
}

/// Walks the table in order, accumulating weights of in-band readings.
pub(crate) fn score_snapshot(
    snapshot: &SensorSnapshot,
    table: &FactorTable,
) -> (Vec<MatchedFactor>, ScoreSignals) {
    let mut matched = Vec::new();
    let mut risk_score = 0.0;
    let mut total_weight = 0.0;

    for rule in table.rules() {
        let value = rule.factor.reading(snapshot);
        if rule.contains(value) {
            risk_score += rule.weight;
            matched.push(MatchedFactor {
                factor: rule.factor,
                name: rule.name.clone(),
                value: rule.factor.format_value(value),
                band: rule.band(),
                rationale: rule.rationale.clone(),
            });
        }
        total_weight += rule.weight;
    }

    (
        matched,
        ScoreSignals {
            risk_score,
            total_weight,
        },
    )
}
