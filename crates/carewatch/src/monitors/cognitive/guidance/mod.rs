//! Tier-keyed care guidance.
//!
//! Content lives in static authored tables; selection only picks a table and
//! truncates its lists from the front, so the output is fully determined by
//! the tier.

mod catalog;
mod protocols;

pub use catalog::GuidanceCaps;
pub use protocols::{support_resources, Directive, EmergencyPlan, EscalationProtocols, SectionNotes};

use serde::Serialize;

use super::evaluation::RiskTier;
use catalog::{authored, take_front, AuthoredGuidance, FALLBACK};

/// Guidance surfaced for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceBundle {
    pub urgency: &'static str,
    pub medications: Vec<&'static str>,
    pub memory_aids: Vec<&'static str>,
    pub caregiver_support: Vec<&'static str>,
    pub lifestyle: Vec<&'static str>,
    pub notes: SectionNotes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<EscalationProtocols>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_plan: Option<EmergencyPlan>,
    pub resources: Vec<Directive>,
}

impl GuidanceBundle {
    fn truncated(tier: RiskTier, source: &'static AuthoredGuidance) -> Self {
        let caps = GuidanceCaps::for_tier(tier);
        Self {
            urgency: source.urgency,
            medications: take_front(source.medications, caps.medications),
            memory_aids: take_front(source.memory_aids, caps.memory_aids),
            caregiver_support: take_front(source.caregiver_support, caps.caregiver_support),
            lifestyle: take_front(source.lifestyle, caps.lifestyle),
            notes: SectionNotes::for_tier(tier),
            protocols: EscalationProtocols::for_tier(tier),
            emergency_plan: EmergencyPlan::for_tier(tier),
            resources: support_resources(tier),
        }
    }

    fn fallback() -> Self {
        Self {
            urgency: FALLBACK.urgency,
            medications: FALLBACK.medications.to_vec(),
            memory_aids: FALLBACK.memory_aids.to_vec(),
            caregiver_support: FALLBACK.caregiver_support.to_vec(),
            lifestyle: FALLBACK.lifestyle.to_vec(),
            notes: SectionNotes::for_tier(RiskTier::Low),
            protocols: None,
            emergency_plan: None,
            resources: support_resources(RiskTier::Low),
        }
    }

    /// True for the generic "continue monitoring" bundle.
    pub fn is_fallback(&self) -> bool {
        self.urgency == FALLBACK.urgency
    }
}

/// Maps a tier to its guidance bundle. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidanceSelector;

impl GuidanceSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn select(&self, tier: RiskTier) -> GuidanceBundle {
        match authored(tier) {
            Some(source) => GuidanceBundle::truncated(tier, source),
            None => GuidanceBundle::fallback(),
        }
    }

    /// Unrecognized labels resolve to the fallback bundle.
    pub fn select_by_label(&self, label: &str) -> GuidanceBundle {
        match RiskTier::from_label(label) {
            Some(tier) => self.select(tier),
            None => GuidanceBundle::fallback(),
        }
    }

    /// Untruncated medication list authored for a tier; empty for tiers without one.
    pub fn authored_medications(&self, tier: RiskTier) -> &'static [&'static str] {
        authored(tier)
            .map(|source| source.medications)
            .unwrap_or_default()
    }

    /// Untruncated memory aid list authored for a tier; empty for tiers without one.
    pub fn authored_memory_aids(&self, tier: RiskTier) -> &'static [&'static str] {
        authored(tier)
            .map(|source| source.memory_aids)
            .unwrap_or_default()
    }
}
