use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::super::domain::FactorKind;

/// One monitored factor: the closed risk band and its contribution weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRule {
    pub factor: FactorKind,
    pub min: f64,
    pub max: f64,
    pub weight: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rationale: String,
}

impl FactorRule {
    pub fn new(factor: FactorKind, min: f64, max: f64, weight: f64) -> Self {
        Self {
            factor,
            min,
            max,
            weight,
            name: factor.label().to_string(),
            rationale: factor.rationale().to_string(),
        }
    }

    /// Inclusive on both edges.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn band(&self) -> String {
        format!("{}-{}{}", self.min, self.max, self.factor.band_unit())
    }
}

/// Ordered rule table consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorTable {
    rules: Vec<FactorRule>,
}

#[derive(Deserialize)]
struct FactorTableFile {
    rules: Vec<FactorRule>,
}

impl FactorTable {
    /// Validates and wraps a rule list, filling blank names and rationales.
    pub fn new(rules: Vec<FactorRule>) -> Result<Self, FactorTableError> {
        if rules.is_empty() {
            return Err(FactorTableError::Empty);
        }

        let mut seen = BTreeSet::new();
        let mut validated = Vec::with_capacity(rules.len());
        for mut rule in rules {
            if !seen.insert(rule.factor) {
                return Err(FactorTableError::DuplicateFactor(rule.factor));
            }
            if !(rule.weight > 0.0 && rule.weight <= 1.0) {
                return Err(FactorTableError::InvalidWeight {
                    factor: rule.factor,
                    weight: rule.weight,
                });
            }
            if !rule.min.is_finite() || !rule.max.is_finite() || rule.min > rule.max {
                return Err(FactorTableError::InvalidBand {
                    factor: rule.factor,
                    min: rule.min,
                    max: rule.max,
                });
            }
            if rule.name.trim().is_empty() {
                rule.name = rule.factor.label().to_string();
            }
            if rule.rationale.trim().is_empty() {
                rule.rationale = rule.factor.rationale().to_string();
            }
            validated.push(rule);
        }

        Ok(Self { rules: validated })
    }

    /// The cognitive-decline table shipped with the dashboard. Built once per process.
    pub fn reference() -> &'static FactorTable {
        static REFERENCE: OnceLock<FactorTable> = OnceLock::new();
        REFERENCE.get_or_init(|| FactorTable {
            rules: vec![
                FactorRule::new(FactorKind::HeartRate, 55.0, 90.0, 0.15),
                FactorRule::new(FactorKind::BloodOxygen, 92.0, 96.0, 0.20),
                FactorRule::new(FactorKind::BodyTemperature, 36.0, 36.8, 0.10),
                FactorRule::new(FactorKind::BalanceAngle, 0.05, 0.15, 0.15),
                FactorRule::new(FactorKind::Acceleration, 0.6, 0.9, 0.15),
                FactorRule::new(FactorKind::EnergyLevel, 3.0, 7.0, 0.15),
                FactorRule::new(FactorKind::Humidity, 50.0, 70.0, 0.10),
            ],
        })
    }

    /// Reads `{"rules": [...]}` JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, FactorTableError> {
        let file: FactorTableFile = serde_json::from_reader(reader)?;
        Self::new(file.rules)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FactorTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn rules(&self) -> &[FactorRule] {
        &self.rules
    }

    pub fn total_weight(&self) -> f64 {
        self.rules.iter().map(|rule| rule.weight).sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FactorTableError {
    #[error("factor table must contain at least one rule")]
    Empty,
    #[error("{0:?} is listed more than once")]
    DuplicateFactor(FactorKind),
    #[error("{factor:?} weight {weight} must be within (0, 1]")]
    InvalidWeight { factor: FactorKind, weight: f64 },
    #[error("{factor:?} band {min}..{max} is not a closed finite range")]
    InvalidBand {
        factor: FactorKind,
        min: f64,
        max: f64,
    },
    #[error("failed to read factor table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid factor table JSON: {0}")]
    Json(#[from] serde_json::Error),
}
