//! Cognitive decline screening over wearable vitals.
//!
//! [`RiskEvaluator`] scores a [`SensorSnapshot`] against a weighted factor
//! table and classifies the result into a [`RiskTier`];
//! [`GuidanceSelector`] maps the tier to authored care guidance. Both are
//! pure. [`ScreeningService`] wires them to a telemetry source.

pub mod domain;
pub mod evaluation;
pub mod guidance;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{FactorKind, SensorSnapshot, VitalReadings, VitalStatus};
pub use evaluation::{
    DiseaseStage, EvaluationResult, FactorRule, FactorTable, FactorTableError, MatchedFactor,
    RiskEvaluator, RiskTier,
};
pub use guidance::{GuidanceBundle, GuidanceCaps, GuidanceSelector};
pub use router::screening_router;
pub use service::{ScreeningReport, ScreeningService};
