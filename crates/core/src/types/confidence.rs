use serde::{Deserialize, Serialize};

use super::language::Language;
use crate::error::{Error, Result};

/// One language's score for a detection call
///
/// Created fresh per call and never persisted. `confidence` is always in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub language: Language,
    pub confidence: f64,
}

impl DetectionResult {
    pub fn new(language: Language, confidence: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&confidence));
        Self {
            language,
            confidence,
        }
    }
}

/// Classification of a confidence score against a [`ConfidenceRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// An immutable `[0, 1]`-bounded interval with `lower <= upper`
///
/// Scores below `lower` classify low, scores above `upper` classify high,
/// everything in between (inclusive) is medium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfidenceRange")]
pub struct ConfidenceRange {
    lower: f64,
    upper: f64,
}

#[derive(Deserialize)]
struct RawConfidenceRange {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawConfidenceRange> for ConfidenceRange {
    type Error = Error;

    fn try_from(raw: RawConfidenceRange) -> Result<Self> {
        ConfidenceRange::new(raw.lower, raw.upper)
    }
}

impl ConfidenceRange {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) {
            return Err(Error::InvalidArgument(format!(
                "confidence bounds must lie in [0, 1], got [{lower}, {upper}]"
            )));
        }
        if lower > upper {
            return Err(Error::InvalidArgument(format!(
                "confidence lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn classify(&self, confidence: f64) -> ConfidenceLevel {
        if confidence < self.lower {
            ConfidenceLevel::Low
        } else if confidence > self.upper {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Medium
        }
    }
}

impl Default for ConfidenceRange {
    fn default() -> Self {
        // Fallback thresholds; normally supplied by config
        Self {
            lower: 0.3,
            upper: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validates_bounds() {
        assert!(ConfidenceRange::new(0.3, 0.7).is_ok());
        assert!(ConfidenceRange::new(0.7, 0.3).is_err());
        assert!(ConfidenceRange::new(-0.1, 0.5).is_err());
        assert!(ConfidenceRange::new(0.5, 1.1).is_err());
    }

    #[test]
    fn test_degenerate_range_is_valid() {
        let range = ConfidenceRange::new(0.5, 0.5).unwrap();
        assert_eq!(range.classify(0.5), ConfidenceLevel::Medium);
        assert_eq!(range.classify(0.49), ConfidenceLevel::Low);
        assert_eq!(range.classify(0.51), ConfidenceLevel::High);
    }

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        let range = ConfidenceRange::new(0.3, 0.7).unwrap();
        assert_eq!(range.classify(0.0), ConfidenceLevel::Low);
        assert_eq!(range.classify(0.3), ConfidenceLevel::Medium);
        assert_eq!(range.classify(0.7), ConfidenceLevel::Medium);
        assert_eq!(range.classify(0.98), ConfidenceLevel::High);
    }

    #[test]
    fn test_deserialize_rejects_inverted_range() {
        let err = serde_json::from_str::<ConfidenceRange>(r#"{"lower":0.9,"upper":0.1}"#);
        assert!(err.is_err());
    }
}
