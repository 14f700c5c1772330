//! Three-tier grade derived from an accuracy score.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest score graded [`Grade::High`].
pub const HIGH_THRESHOLD: f64 = 80.0;

/// Lowest score graded [`Grade::Mid`].
pub const MID_THRESHOLD: f64 = 60.0;

/// Coarse pronunciation grade.
///
/// Serialized as `"high"`, `"mid"` or `"low"`. Participants see the Korean
/// labels 상 / 중 / 하, which [`FromStr`] accepts as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// 하
    Low,
    /// 중
    Mid,
    /// 상
    High,
}

impl Grade {
    /// Grade a score in `[0, 100]`.
    ///
    /// * `score >= 80` → [`Grade::High`]
    /// * `60 <= score < 80` → [`Grade::Mid`]
    /// * `score < 60` → [`Grade::Low`]
    ///
    /// A `NaN` score grades low.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MID_THRESHOLD {
            Self::Mid
        } else {
            Self::Low
        }
    }

    /// Wire name of the grade.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        }
    }

    /// Korean label shown to participants.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "상",
            Self::Mid => "중",
            Self::Low => "하",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known grade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid grade '{0}': expected one of high, mid, low, 상, 중, 하")]
pub struct ParseGradeError(pub String);

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "상" => Ok(Self::High),
            "mid" | "중" => Ok(Self::Mid),
            "low" | "하" => Ok(Self::Low),
            _ => Err(ParseGradeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Grade::from_score(100.0), Grade::High);
        assert_eq!(Grade::from_score(80.0), Grade::High);
        assert_eq!(Grade::from_score(79.9), Grade::Mid);
        assert_eq!(Grade::from_score(60.0), Grade::Mid);
        assert_eq!(Grade::from_score(59.9), Grade::Low);
        assert_eq!(Grade::from_score(0.0), Grade::Low);
        assert_eq!(Grade::from_score(f64::NAN), Grade::Low);
    }

    #[test]
    fn test_parse() {
        assert_eq!("high".parse::<Grade>(), Ok(Grade::High));
        assert_eq!(" MID ".parse::<Grade>(), Ok(Grade::Mid));
        assert_eq!("Low".parse::<Grade>(), Ok(Grade::Low));
        assert_eq!("상".parse::<Grade>(), Ok(Grade::High));
        assert_eq!("중".parse::<Grade>(), Ok(Grade::Mid));
        assert_eq!("하".parse::<Grade>(), Ok(Grade::Low));

        assert!("".parse::<Grade>().is_err());
        assert!("medium".parse::<Grade>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Grade::High.label(), "상");
        assert_eq!(Grade::Mid.label(), "중");
        assert_eq!(Grade::Low.label(), "하");
        assert_eq!(Grade::Mid.to_string(), "mid");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Grade::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::from_str::<Grade>("\"low\"").unwrap(),
            Grade::Low
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Grade::High > Grade::Mid);
        assert!(Grade::Mid > Grade::Low);
    }
}
