use serde::{Deserialize, Serialize};

pub const CRITICAL_THRESHOLD: f64 = 80.0;
pub const HIGH_THRESHOLD: f64 = 70.0;
pub const MODERATE_THRESHOLD: f64 = 60.0;
pub const LOW_MODERATE_THRESHOLD: f64 = 40.0;

/// Positive detection cut-off. Kept separate from the tier thresholds.
pub const DETECTION_THRESHOLD: f64 = 60.0;

/// Ordered risk classification, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    #[serde(rename = "Low-Moderate")]
    LowModerate,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    pub const ALL: [RiskTier; 5] = [
        RiskTier::Low,
        RiskTier::LowModerate,
        RiskTier::Moderate,
        RiskTier::High,
        RiskTier::Critical,
    ];

    /// Highest threshold first; the first one met wins.
    pub fn classify(risk_percentage: f64) -> Self {
        if risk_percentage >= CRITICAL_THRESHOLD {
            RiskTier::Critical
        } else if risk_percentage >= HIGH_THRESHOLD {
            RiskTier::High
        } else if risk_percentage >= MODERATE_THRESHOLD {
            RiskTier::Moderate
        } else if risk_percentage >= LOW_MODERATE_THRESHOLD {
            RiskTier::LowModerate
        } else {
            RiskTier::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::LowModerate => "Low-Moderate",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
            RiskTier::Critical => "Critical",
        }
    }

    /// Accepts the display label, ignoring case and `-`/`_`/space differences.
    pub fn from_label(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "low" => Some(RiskTier::Low),
            "lowmoderate" => Some(RiskTier::LowModerate),
            "moderate" => Some(RiskTier::Moderate),
            "high" => Some(RiskTier::High),
            "critical" => Some(RiskTier::Critical),
            _ => None,
        }
    }

    pub const fn disease_stage(self) -> DiseaseStage {
        match self {
            RiskTier::Low => DiseaseStage::NoSignificantRisk,
            RiskTier::LowModerate => DiseaseStage::EarlyWarningSigns,
            RiskTier::Moderate => DiseaseStage::MildToModerate,
            RiskTier::High => DiseaseStage::ModerateToSevere,
            RiskTier::Critical => DiseaseStage::Advanced,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Clinical stage label paired one-to-one with a [`RiskTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseStage {
    #[serde(rename = "No Significant Risk")]
    NoSignificantRisk,
    #[serde(rename = "Early Warning Signs")]
    EarlyWarningSigns,
    #[serde(rename = "Mild to Moderate")]
    MildToModerate,
    #[serde(rename = "Moderate to Severe")]
    ModerateToSevere,
    #[serde(rename = "Advanced Stage")]
    Advanced,
}

impl DiseaseStage {
    pub const fn label(self) -> &'static str {
        match self {
            DiseaseStage::NoSignificantRisk => "No Significant Risk",
            DiseaseStage::EarlyWarningSigns => "Early Warning Signs",
            DiseaseStage::MildToModerate => "Mild to Moderate",
            DiseaseStage::ModerateToSevere => "Moderate to Severe",
            DiseaseStage::Advanced => "Advanced Stage",
        }
    }
}

// Same value as MODERATE_THRESHOLD today; the two are configured independently.
pub(crate) fn is_detected(risk_percentage: f64) -> bool {
    risk_percentage >= DETECTION_THRESHOLD
}
