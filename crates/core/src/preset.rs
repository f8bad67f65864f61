//! Named preset profiles for quick-fill.

use crate::error::CoreError;
use crate::record::PatientRecord;
use std::str::FromStr;

/// A built-in complete patient profile.
///
/// Loading a preset through the form session replaces the whole record and
/// returns the submission lifecycle to idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Healthy,
    AtRisk,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Healthy, Preset::AtRisk];

    /// Wire name of the preset.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Healthy => "healthy",
            Preset::AtRisk => "at-risk",
        }
    }

    /// The complete record this preset fills in.
    pub fn record(self) -> PatientRecord {
        match self {
            Preset::Healthy => PatientRecord {
                age: 57,
                sex: 0,
                cp: 1,
                trestbps: 130,
                chol: 236,
                fbs: 0,
                restecg: 0,
                thalach: 174,
                exang: 0,
                oldpeak: 0.0,
                slope: 1,
                ca: 1,
                thal: 2,
            },
            Preset::AtRisk => PatientRecord {
                age: 63,
                sex: 1,
                cp: 3,
                trestbps: 145,
                chol: 233,
                fbs: 1,
                restecg: 0,
                thalach: 150,
                exang: 0,
                oldpeak: 2.3,
                slope: 0,
                ca: 0,
                thal: 1,
            },
        }
    }
}

impl FromStr for Preset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Preset::Healthy),
            "at-risk" => Ok(Preset::AtRisk),
            other => Err(CoreError::UnknownPreset(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
