use crate::scoring::constants::DimensionKey;
use crate::types::metadata::{ColumnMetadata, MetadataRecord};
use crate::types::scoring::{Action, DimensionScore, ReadinessStatus, Reason};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dataset description file as written by hand or produced by dbt ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetFile {
    pub full_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub producing_job: Option<String>,
    #[serde(default)]
    pub sla_hours: Option<u32>,
    #[serde(flatten)]
    pub metadata: MetadataRecord,
}

/// Quality and stability signals as stored; `None` means never reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signals {
    pub has_freshness_checks: Option<bool>,
    pub has_volume_checks: Option<bool>,
    pub dbt_test_count: Option<u32>,
    pub has_sla: Option<bool>,
    pub unresolved_failures_30d: Option<u32>,
    pub breaking_changes_30d: Option<u32>,
    pub has_release_notes: Option<bool>,
    pub has_versioning: Option<bool>,
    pub backward_compatible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntity {
    pub full_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub intended_use: Option<String>,
    pub limitations: Option<String>,
    pub location_type: Option<String>,
    pub producing_job: Option<String>,
    pub sla_hours: Option<u32>,
    #[serde(default)]
    pub signals: Signals,
    pub readiness_score: u32,
    pub readiness_status: ReadinessStatus,
    pub last_seen_at: DateTime<Utc>,
    pub last_scored_at: Option<DateTime<Utc>>,
}

/// Everything the store keeps for one dataset apart from its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDataset {
    pub entity: DatasetEntity,
    pub dimension_scores: Vec<DimensionScore>,
    pub reasons: Vec<Reason>,
    pub actions: Vec<Action>,
    pub columns: Vec<ColumnMetadata>,
}

impl StoredDataset {
    fn is_measured(&self, key: DimensionKey) -> bool {
        self.dimension_scores
            .iter()
            .find(|dimension| dimension.dimension_key == key)
            .map_or(true, |dimension| dimension.measured)
    }

    /// Reasons for display; rows of unmeasured dimensions are hidden.
    pub fn visible_reasons(&self) -> Vec<&Reason> {
        self.reasons
            .iter()
            .filter(|reason| self.is_measured(reason.dimension_key))
            .collect()
    }

    /// Actions for display, largest gain first; rows of unmeasured
    /// dimensions are hidden.
    pub fn visible_actions(&self) -> Vec<&Action> {
        let mut actions = self
            .actions
            .iter()
            .filter(|action| self.is_measured(action.dimension_key))
            .collect::<Vec<_>>();
        actions.sort_by(|a, b| b.points_gain.cmp(&a.points_gain));
        actions
    }
}

/// One append-only history row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub score: u32,
    pub status: ReadinessStatus,
    pub recorded_at: DateTime<Utc>,
    pub scoring_version: String,
    pub metadata_sha256: String,
}
