use serde::{Deserialize, Serialize};

/// Point-in-time wearable readings after feed normalization.
///
/// Every numeric field is present; upstream normalization replaces missing or
/// malformed values with `0` before a snapshot is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorSnapshot {
    #[serde(alias = "hr")]
    pub heart_rate: f64,
    pub spo2: f64,
    /// Display-only; never scored.
    #[serde(alias = "bp")]
    pub blood_pressure: String,
    pub angle: f64,
    #[serde(alias = "accel")]
    pub acceleration: f64,
    #[serde(alias = "eng")]
    pub energy: f64,
    #[serde(alias = "temp")]
    pub temperature: f64,
    #[serde(alias = "hum")]
    pub humidity: f64,
}

pub(crate) const EMPTY_BLOOD_PRESSURE: &str = "0/0";

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            heart_rate: 0.0,
            spo2: 0.0,
            blood_pressure: EMPTY_BLOOD_PRESSURE.to_string(),
            angle: 0.0,
            acceleration: 0.0,
            energy: 0.0,
            temperature: 0.0,
            humidity: 0.0,
        }
    }
}

/// Monitored measurements that can carry a risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    HeartRate,
    BloodOxygen,
    BodyTemperature,
    BalanceAngle,
    Acceleration,
    EnergyLevel,
    Humidity,
}

impl FactorKind {
    pub const ALL: [FactorKind; 7] = [
        FactorKind::HeartRate,
        FactorKind::BloodOxygen,
        FactorKind::BodyTemperature,
        FactorKind::BalanceAngle,
        FactorKind::Acceleration,
        FactorKind::EnergyLevel,
        FactorKind::Humidity,
    ];

    pub fn reading(self, snapshot: &SensorSnapshot) -> f64 {
        match self {
            FactorKind::HeartRate => snapshot.heart_rate,
            FactorKind::BloodOxygen => snapshot.spo2,
            FactorKind::BodyTemperature => snapshot.temperature,
            FactorKind::BalanceAngle => snapshot.angle,
            FactorKind::Acceleration => snapshot.acceleration,
            FactorKind::EnergyLevel => snapshot.energy,
            FactorKind::Humidity => snapshot.humidity,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::HeartRate => "Heart Rate",
            FactorKind::BloodOxygen => "Blood Oxygen",
            FactorKind::BodyTemperature => "Body Temperature",
            FactorKind::BalanceAngle => "Balance/Angle",
            FactorKind::Acceleration => "Movement/Acceleration",
            FactorKind::EnergyLevel => "Energy Level",
            FactorKind::Humidity => "Humidity Level",
        }
    }

    pub const fn rationale(self) -> &'static str {
        match self {
            FactorKind::HeartRate => {
                "Reduced heart rate variability is associated with Alzheimer's disease"
            }
            FactorKind::BloodOxygen => {
                "Chronic hypoxia (low oxygen) can contribute to cognitive decline"
            }
            FactorKind::BodyTemperature => {
                "Lower body temperature can indicate metabolic changes in Alzheimer's patients"
            }
            FactorKind::BalanceAngle => {
                "Balance problems and postural instability are common in Alzheimer's patients"
            }
            FactorKind::Acceleration => {
                "Reduced motor coordination and slower movements are Alzheimer's symptoms"
            }
            FactorKind::EnergyLevel => "Fatigue and low energy are early signs of Alzheimer's disease",
            FactorKind::Humidity => "Environmental factors can affect patient comfort and symptoms",
        }
    }

    /// Suffix printed after a risk band, e.g. `55-90 BPM`.
    pub const fn band_unit(self) -> &'static str {
        match self {
            FactorKind::HeartRate => " BPM",
            FactorKind::BloodOxygen | FactorKind::Humidity => "%",
            FactorKind::BodyTemperature => "°C",
            FactorKind::Acceleration => "g",
            FactorKind::BalanceAngle | FactorKind::EnergyLevel => "",
        }
    }

    /// Renders an observed value the way the dashboard cards show it.
    pub fn format_value(self, value: f64) -> String {
        match self {
            FactorKind::HeartRate | FactorKind::EnergyLevel => format!("{value}"),
            FactorKind::BloodOxygen | FactorKind::Humidity => format!("{value}%"),
            FactorKind::BodyTemperature => format!("{}°C", fixed(value, 1)),
            FactorKind::BalanceAngle => fixed(value, 4),
            FactorKind::Acceleration => format!("{}g", fixed(value, 4)),
        }
    }
}

/// Fixed-point text with exact halves rounded away from zero (`36.25` -> `36.3`).
fn fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32 + 1);
    let scaled = value * scale;
    let exact_half =
        scaled.fract() == 0.0 && scaled / scale == value && (scaled % 10.0).abs() == 5.0;
    let shown = if exact_half {
        value.signum() * (scaled.abs() + 5.0) / scale
    } else {
        value
    };
    format!("{shown:.digits$}")
}

/// Coarse status of a vital sign relative to its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalStatus {
    Low,
    Normal,
    High,
}

impl VitalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            VitalStatus::Low => "Low",
            VitalStatus::Normal => "Normal",
            VitalStatus::High => "High",
        }
    }
}

/// Status of the vitals that have a clinical normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalReadings {
    pub heart_rate: VitalStatus,
    pub spo2: VitalStatus,
    pub temperature: VitalStatus,
}

impl VitalReadings {
    pub fn classify(snapshot: &SensorSnapshot) -> Self {
        let heart_rate = if snapshot.heart_rate < 60.0 {
            VitalStatus::Low
        } else if snapshot.heart_rate > 100.0 {
            VitalStatus::High
        } else {
            VitalStatus::Normal
        };

        let spo2 = if snapshot.spo2 < 95.0 {
            VitalStatus::Low
        } else {
            VitalStatus::Normal
        };

        let temperature = if snapshot.temperature < 36.0 {
            VitalStatus::Low
        } else if snapshot.temperature > 37.5 {
            VitalStatus::High
        } else {
            VitalStatus::Normal
        };

        Self {
            heart_rate,
            spo2,
            temperature,
        }
    }
}
