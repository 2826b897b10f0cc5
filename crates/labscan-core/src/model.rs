use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a value relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Normal,
    Low,
    High,
    /// Only ever assigned by an external classification source.
    #[serde(rename = "Needs Attention", alias = "NeedsAttention")]
    NeedsAttention,
}

impl Status {
    pub fn is_normal(&self) -> bool {
        matches!(self, Status::Normal)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Normal => write!(f, "Normal"),
            Status::Low => write!(f, "Low"),
            Status::High => write!(f, "High"),
            Status::NeedsAttention => write!(f, "Needs Attention"),
        }
    }
}

/// Inclusive reference bounds. Serialized as plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRange {
    #[serde(with = "rust_decimal::serde::float")]
    pub low: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub high: Decimal,
}

impl ReferenceRange {
    pub fn new(low: Decimal, high: Decimal) -> Self {
        Self { low, high }
    }

    /// Range attached to loosely extracted values that have no known bounds.
    pub fn placeholder() -> Self {
        Self {
            low: Decimal::ZERO,
            high: Decimal::from(999_999),
        }
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}

/// A single measurement extracted from a lab report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    /// Display name of the measured quantity.
    pub parameter: String,
    /// Normalized so that `Display` yields the canonical form (`13.50` -> `13.5`).
    /// Serialized as that string; read back from either a string or a number.
    #[serde(deserialize_with = "deserialize_value")]
    pub value: Decimal,
    pub unit: String,
    pub range: ReferenceRange,
    pub status: Status,
}

fn deserialize_value<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Number(f64),
    }

    let text = match RawValue::deserialize(deserializer)? {
        RawValue::Text(s) => s,
        RawValue::Number(n) => n.to_string(),
    };
    Decimal::from_str(text.trim())
        .map(|d| d.normalize())
        .map_err(|e| serde::de::Error::custom(format!("invalid value '{}': {}", text, e)))
}

/// One point of a synthetic historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}
