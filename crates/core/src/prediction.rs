//! Classifier response models.
//!
//! Responsibilities:
//! - Define the strict shape of a successful classifier response
//! - Translate the wire's 0/1 class integer into a closed enum
//! - Tolerate additive fields from the service (no `deny_unknown_fields`),
//!   while missing or ill-typed required fields fail the parse

use serde::{Deserialize, Serialize};

/// Binary diagnosis class returned by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassLabel {
    /// Wire value 0.
    Healthy,
    /// Wire value 1.
    Disease,
}

impl ClassLabel {
    /// Convert to the wire integer.
    fn to_wire(self) -> u8 {
        match self {
            ClassLabel::Healthy => 0,
            ClassLabel::Disease => 1,
        }
    }

    /// Parse from the wire integer.
    fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(ClassLabel::Healthy),
            1 => Some(ClassLabel::Disease),
            _ => None,
        }
    }
}

impl Serialize for ClassLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for ClassLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        ClassLabel::from_wire(value).ok_or_else(|| {
            serde::de::Error::custom(format!("class label must be 0 or 1, got {}", value))
        })
    }
}

/// Confidence split over the two named classes, as percentages on a 0-100
/// scale. The service sends them summing to ~100; they are displayed as
/// received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    #[serde(rename = "Healthy")]
    pub healthy: f64,
    #[serde(rename = "Heart Disease")]
    pub heart_disease: f64,
}

/// A successful classifier response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Binary diagnosis class.
    pub prediction: ClassLabel,
    /// Human-readable status label from the service.
    pub status: String,
    /// Optional confidence split; absent when the model cannot report one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<ClassProbabilities>,
}
