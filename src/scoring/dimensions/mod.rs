pub mod data_quality;
pub mod documentation;
pub mod operational;
pub mod ownership;
pub mod schema_hygiene;
pub mod stability;

use crate::scoring::constants::{DimensionKey, ReasonCode};
use crate::types::metadata::MetadataRecord;
use crate::types::scoring::{Action, DimensionScore, Reason};

/// What one scorer reports back to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionOutcome {
    pub score: DimensionScore,
    pub reasons: Vec<Reason>,
    pub actions: Vec<Action>,
}

pub type Scorer = fn(&MetadataRecord) -> DimensionOutcome;

/// Scorers in emission order.
pub const SCORERS: [(DimensionKey, Scorer); 6] = [
    (DimensionKey::Ownership, ownership::score_ownership),
    (DimensionKey::Documentation, documentation::score_documentation),
    (DimensionKey::SchemaHygiene, schema_hygiene::score_schema_hygiene),
    (DimensionKey::DataQuality, data_quality::score_data_quality),
    (DimensionKey::Stability, stability::score_stability),
    (DimensionKey::Operational, operational::score_operational),
];

/// Accumulates points and paired reason/action entries for one dimension.
pub(crate) struct Tally {
    key: DimensionKey,
    points: u32,
    reasons: Vec<Reason>,
    actions: Vec<Action>,
}

impl Tally {
    pub(crate) fn new(key: DimensionKey) -> Self {
        Self {
            key,
            points: 0,
            reasons: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.points += points;
    }

    /// Records a loss together with the action that recovers it.
    pub(crate) fn lose(
        &mut self,
        code: ReasonCode,
        points: u32,
        message: String,
        title: &str,
        description: String,
    ) {
        debug_assert_eq!(code.dimension(), self.key);
        self.reasons.push(Reason {
            dimension_key: self.key,
            reason_code: code,
            message,
            points_lost: points,
        });
        self.actions.push(Action {
            action_key: code.remedy(),
            title: title.to_string(),
            description,
            points_gain: points,
            dimension_key: self.key,
            url: None,
        });
    }

    pub(crate) fn finish(self, measured: bool) -> DimensionOutcome {
        DimensionOutcome {
            score: DimensionScore {
                dimension_key: self.key,
                points_awarded: self.points,
                max_points: self.key.max_points(),
                measured,
            },
            reasons: self.reasons,
            actions: self.actions,
        }
    }

    /// Finishes an unmeasured dimension: points stay, reasons and actions are dropped.
    pub(crate) fn finish_unmeasured(mut self) -> DimensionOutcome {
        self.reasons.clear();
        self.actions.clear();
        self.finish(false)
    }
}
