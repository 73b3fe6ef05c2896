//! Conversions between stored catalog entities and scoring input.

use crate::types::dataset::{DatasetEntity, DatasetFile, Signals};
use crate::types::metadata::{ColumnMetadata, MetadataRecord};
use crate::types::scoring::ReadinessStatus;
use chrono::{DateTime, Utc};

/// Builds the scoring input from stored state.
///
/// Unreported flags become `false` and counters `0`; the not-measured fields
/// stay `None` so the engine skips their checks instead of penalizing them.
pub fn build_metadata(entity: &DatasetEntity, columns: Option<&[ColumnMetadata]>) -> MetadataRecord {
    let signals = &entity.signals;
    MetadataRecord {
        owner_name: entity.owner_name.clone(),
        owner_contact: entity.owner_contact.clone(),
        description: entity.description.clone(),
        columns: columns.map(<[ColumnMetadata]>::to_vec).unwrap_or_default(),
        intended_use: entity.intended_use.clone(),
        limitations: entity.limitations.clone(),
        has_freshness_checks: signals.has_freshness_checks.unwrap_or(false),
        has_volume_checks: signals.has_volume_checks.unwrap_or(false),
        dbt_test_count: signals.dbt_test_count.unwrap_or(0),
        // a committed refresh window is an SLA
        has_sla: signals.has_sla.unwrap_or(false) || entity.sla_hours.is_some(),
        unresolved_failures_30d: signals.unresolved_failures_30d,
        breaking_changes_30d: signals.breaking_changes_30d,
        has_release_notes: signals.has_release_notes.unwrap_or(false),
        has_versioning: signals.has_versioning.unwrap_or(false),
        backward_compatible: signals.backward_compatible,
    }
}

impl From<&MetadataRecord> for Signals {
    fn from(metadata: &MetadataRecord) -> Self {
        Self {
            has_freshness_checks: Some(metadata.has_freshness_checks),
            has_volume_checks: Some(metadata.has_volume_checks),
            dbt_test_count: Some(metadata.dbt_test_count),
            has_sla: Some(metadata.has_sla),
            unresolved_failures_30d: metadata.unresolved_failures_30d,
            breaking_changes_30d: metadata.breaking_changes_30d,
            has_release_notes: Some(metadata.has_release_notes),
            has_versioning: Some(metadata.has_versioning),
            backward_compatible: metadata.backward_compatible,
        }
    }
}

impl DatasetEntity {
    /// A never-scored entity described by `file`.
    pub fn from_file(file: &DatasetFile, now: DateTime<Utc>) -> Self {
        let mut entity = Self {
            full_name: file.full_name.clone(),
            display_name: file.full_name.clone(),
            description: None,
            owner_name: None,
            owner_contact: None,
            intended_use: None,
            limitations: None,
            location_type: None,
            producing_job: None,
            sla_hours: None,
            signals: Signals::default(),
            readiness_score: 0,
            readiness_status: ReadinessStatus::Draft,
            last_seen_at: now,
            last_scored_at: None,
        };
        entity.apply_file(file, now);
        entity
    }

    /// Refreshes descriptive fields from a newer description file; cached
    /// score fields are left for the next persist.
    pub fn apply_file(&mut self, file: &DatasetFile, now: DateTime<Utc>) {
        let metadata = &file.metadata;
        self.display_name = file
            .display_name
            .clone()
            .unwrap_or_else(|| file.full_name.clone());
        self.description = metadata.description.clone();
        self.owner_name = metadata.owner_name.clone();
        self.owner_contact = metadata.owner_contact.clone();
        self.intended_use = metadata.intended_use.clone();
        self.limitations = metadata.limitations.clone();
        self.location_type = file.location_type.clone();
        self.producing_job = file.producing_job.clone();
        self.sla_hours = file.sla_hours;
        self.signals = Signals::from(metadata);
        self.last_seen_at = now;
    }
}

/// Field edits applied by `readiness update`; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct EntityUpdate {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub intended_use: Option<String>,
    pub limitations: Option<String>,
}

impl EntityUpdate {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.description.is_none()
            && self.owner_name.is_none()
            && self.owner_contact.is_none()
            && self.intended_use.is_none()
            && self.limitations.is_none()
    }

    pub fn apply(self, entity: &mut DatasetEntity) {
        if let Some(display_name) = self.display_name {
            entity.display_name = display_name;
        }
        if let Some(description) = self.description {
            entity.description = Some(description);
        }
        if let Some(owner_name) = self.owner_name {
            entity.owner_name = Some(owner_name);
        }
        if let Some(owner_contact) = self.owner_contact {
            entity.owner_contact = Some(owner_contact);
        }
        if let Some(intended_use) = self.intended_use {
            entity.intended_use = Some(intended_use);
        }
        if let Some(limitations) = self.limitations {
            entity.limitations = Some(limitations);
        }
    }
}
