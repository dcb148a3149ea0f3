mod config;
mod policy;
mod rules;

pub use config::{FactorRule, FactorTable, FactorTableError};
pub use policy::{
    DiseaseStage, RiskTier, CRITICAL_THRESHOLD, DETECTION_THRESHOLD, HIGH_THRESHOLD,
    LOW_MODERATE_THRESHOLD, MODERATE_THRESHOLD,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{FactorKind, SensorSnapshot};
use crate::monitors::clock::{Clock, SystemClock};
use policy::is_detected;

/// Stateless evaluator applying a factor table to sensor snapshots.
#[derive(Clone)]
pub struct RiskEvaluator {
    table: FactorTable,
    clock: Arc<dyn Clock>,
}

impl RiskEvaluator {
    pub fn new(table: FactorTable) -> Self {
        Self {
            table,
            clock: Arc::new(SystemClock),
        }
    }

    /// Evaluator over [`FactorTable::reference`].
    pub fn reference() -> Self {
        Self::new(FactorTable::reference().clone())
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn table(&self) -> &FactorTable {
        &self.table
    }

    pub fn evaluate(&self, snapshot: &SensorSnapshot) -> EvaluationResult {
        let (matched_factors, signals) = rules::score_snapshot(snapshot, &self.table);

        let risk_percentage = signals.risk_percentage();
        let risk_level = RiskTier::classify(risk_percentage);

        EvaluationResult {
            detected: is_detected(risk_percentage),
            risk_percentage: round_to_tenth(risk_percentage),
            risk_score: signals.risk_score,
            risk_level,
            disease_stage: risk_level.disease_stage(),
            total_factors: matched_factors.len(),
            matched_factors,
            evaluated_at: self.clock.now(),
        }
    }
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::reference()
    }
}

impl std::fmt::Debug for RiskEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskEvaluator")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Factor whose reading fell inside its risk band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedFactor {
    pub factor: FactorKind,
    pub name: String,
    pub value: String,
    pub band: String,
    pub rationale: String,
}

/// Output of a single evaluation. Ordering of `matched_factors` follows the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub detected: bool,
    /// Rounded to one decimal place; tiering used the unrounded value.
    pub risk_percentage: f64,
    /// Sum of matched weights.
    pub risk_score: f64,
    pub risk_level: RiskTier,
    pub disease_stage: DiseaseStage,
    pub matched_factors: Vec<MatchedFactor>,
    pub total_factors: usize,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationResult {
    /// Narrative diagnosis shown beneath the score card.
    pub fn summary(&self) -> String {
        if self.detected {
            format!(
                "Based on the current sensor readings, the system has detected {} risk factors that match the established Alzheimer's disease indicators. The overall risk score is {:.1}%, which exceeds the {:.0}% threshold for positive detection. Disease Stage: {}.",
                self.total_factors,
                self.risk_percentage,
                DETECTION_THRESHOLD,
                self.disease_stage.label()
            )
        } else {
            format!(
                "Based on the current sensor readings, the system has detected {} risk factors, resulting in a risk score of {:.1}%. This is below the {:.0}% threshold, indicating no significant Alzheimer's disease markers at this time.",
                self.total_factors, self.risk_percentage, DETECTION_THRESHOLD
            )
        }
    }

    pub fn timestamp_label(&self) -> String {
        self.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}
