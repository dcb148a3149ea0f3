use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::domain::{SensorSnapshot, VitalReadings};
use super::evaluation::{EvaluationResult, RiskEvaluator};
use super::guidance::{GuidanceBundle, GuidanceSelector};
use crate::monitors::feeds::{FeedError, SnapshotSource};

/// Everything the dashboard renders for one screening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningReport {
    pub snapshot: SensorSnapshot,
    pub vitals: VitalReadings,
    pub evaluation: EvaluationResult,
    pub summary: String,
    /// Present only when the evaluation is a positive detection.
    pub guidance: Option<GuidanceBundle>,
}

/// Service composing a telemetry source with the evaluator and guidance selector.
pub struct ScreeningService<S> {
    source: Arc<S>,
    evaluator: Arc<RiskEvaluator>,
    selector: GuidanceSelector,
}

impl<S> ScreeningService<S>
where
    S: SnapshotSource + 'static,
{
    pub fn new(source: Arc<S>, evaluator: RiskEvaluator) -> Self {
        Self {
            source,
            evaluator: Arc::new(evaluator),
            selector: GuidanceSelector::new(),
        }
    }

    /// Pull the latest snapshot from the source and screen it.
    pub fn screen(&self) -> Result<ScreeningReport, FeedError> {
        let snapshot = self.source.latest()?;
        Ok(self.screen_snapshot(&snapshot))
    }

    pub fn screen_snapshot(&self, snapshot: &SensorSnapshot) -> ScreeningReport {
        let evaluation = self.evaluator.evaluate(snapshot);
        let guidance = evaluation
            .detected
            .then(|| self.selector.select(evaluation.risk_level));

        if evaluation.detected {
            info!(
                risk_percentage = evaluation.risk_percentage,
                risk_level = %evaluation.risk_level,
                matched = evaluation.total_factors,
                "cognitive risk detected"
            );
        } else {
            debug!(
                risk_percentage = evaluation.risk_percentage,
                matched = evaluation.total_factors,
                "screening below detection threshold"
            );
        }

        ScreeningReport {
            snapshot: snapshot.clone(),
            vitals: VitalReadings::classify(snapshot),
            summary: evaluation.summary(),
            evaluation,
            guidance,
        }
    }

    /// Guidance for a tier label, falling back for unknown labels.
    pub fn guidance(&self, label: &str) -> GuidanceBundle {
        self.selector.select_by_label(label)
    }

    pub fn evaluator(&self) -> &RiskEvaluator {
        &self.evaluator
    }
}
