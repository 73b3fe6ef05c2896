use serde::{Deserialize, Serialize};

/// Snapshot of one dataset's metadata at scoring time.
///
/// `Option` fields whose absence means "not measured"
/// (`unresolved_failures_30d`, `breaking_changes_30d`, `backward_compatible`)
/// must stay `None` rather than collapse to `0`/`false`; the scorers branch
/// on the difference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataRecord {
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub description: Option<String>,
    pub columns: Vec<ColumnMetadata>,
    pub intended_use: Option<String>,
    pub limitations: Option<String>,
    pub has_freshness_checks: bool,
    pub has_volume_checks: bool,
    pub dbt_test_count: u32,
    pub has_sla: bool,
    pub unresolved_failures_30d: Option<u32>,
    pub breaking_changes_30d: Option<u32>,
    pub has_release_notes: bool,
    pub has_versioning: bool,
    pub backward_compatible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    pub description: Option<String>,
    pub nullable: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl ColumnMetadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            nullable: None,
            data_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn is_documented(&self) -> bool {
        has_text(self.description.as_deref())
    }
}

/// True when the value is present and not blank.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}
