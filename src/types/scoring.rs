use crate::error::ReadinessError;
use crate::scoring::constants::{
    ActionKey, DimensionKey, ReasonCode, GOLD_THRESHOLD, INTERNAL_THRESHOLD,
    PRODUCTION_READY_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    Draft,
    Internal,
    ProductionReady,
    Gold,
}

impl ReadinessStatus {
    pub const ALL: [ReadinessStatus; 4] = [
        Self::Draft,
        Self::Internal,
        Self::ProductionReady,
        Self::Gold,
    ];

    /// Tier boundaries are inclusive at the lower bound.
    pub fn from_score(score: u32) -> Self {
        if score >= GOLD_THRESHOLD {
            Self::Gold
        } else if score >= PRODUCTION_READY_THRESHOLD {
            Self::ProductionReady
        } else if score >= INTERNAL_THRESHOLD {
            Self::Internal
        } else {
            Self::Draft
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Internal => "internal",
            Self::ProductionReady => "production_ready",
            Self::Gold => "gold",
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadinessStatus {
    type Err = ReadinessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ReadinessError::InvalidStatus(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension_key: DimensionKey,
    pub points_awarded: u32,
    pub max_points: u32,
    pub measured: bool,
}

impl DimensionScore {
    pub fn percentage(&self) -> f64 {
        if self.max_points == 0 {
            return 0.0;
        }
        f64::from(self.points_awarded) / f64::from(self.max_points) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub dimension_key: DimensionKey,
    pub reason_code: ReasonCode,
    pub message: String,
    pub points_lost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action_key: ActionKey,
    pub title: String,
    pub description: String,
    pub points_gain: u32,
    pub dimension_key: DimensionKey,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: u32,
    pub status: ReadinessStatus,
    pub dimension_scores: Vec<DimensionScore>,
    pub reasons: Vec<Reason>,
    pub actions: Vec<Action>,
}

impl ScoreResult {
    pub fn dimension(&self, key: DimensionKey) -> Option<&DimensionScore> {
        self.dimension_scores
            .iter()
            .find(|score| score.dimension_key == key)
    }

    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reasons.iter().any(|reason| reason.reason_code == code)
    }

    pub fn has_action(&self, key: ActionKey) -> bool {
        self.actions.iter().any(|action| action.action_key == key)
    }

    pub fn points_available(&self) -> u32 {
        self.actions.iter().map(|action| action.points_gain).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_boundaries_are_inclusive_at_lower_bound() {
        assert_eq!(ReadinessStatus::from_score(0), ReadinessStatus::Draft);
        assert_eq!(ReadinessStatus::from_score(49), ReadinessStatus::Draft);
        assert_eq!(ReadinessStatus::from_score(50), ReadinessStatus::Internal);
        assert_eq!(ReadinessStatus::from_score(69), ReadinessStatus::Internal);
        assert_eq!(ReadinessStatus::from_score(70), ReadinessStatus::ProductionReady);
        assert_eq!(ReadinessStatus::from_score(84), ReadinessStatus::ProductionReady);
        assert_eq!(ReadinessStatus::from_score(85), ReadinessStatus::Gold);
        assert_eq!(ReadinessStatus::from_score(100), ReadinessStatus::Gold);
    }

    #[test]
    fn status_is_monotonic_in_score() {
        let mut previous = ReadinessStatus::from_score(0);
        for score in 1..=100 {
            let current = ReadinessStatus::from_score(score);
            assert!(current >= previous, "status dropped at {score}");
            previous = current;
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        let parsed: ReadinessStatus = " Production_Ready ".parse().expect("status should parse");
        assert_eq!(parsed, ReadinessStatus::ProductionReady);
        let err = "platinum"
            .parse::<ReadinessStatus>()
            .expect_err("unknown status should fail");
        assert!(err.to_string().contains("platinum"));
    }

    #[test]
    fn percentage_handles_zero_max() {
        let empty = DimensionScore {
            dimension_key: DimensionKey::Operational,
            points_awarded: 0,
            max_points: 0,
            measured: true,
        };
        assert_eq!(empty.percentage(), 0.0);

        let half = DimensionScore {
            max_points: 10,
            points_awarded: 5,
            ..empty
        };
        assert!((half.percentage() - 50.0).abs() < f64::EPSILON);
    }
}
