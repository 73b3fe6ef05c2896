//! Stable identifiers shared by the scorers, the store and every renderer.
//!
//! Reason codes and action keys are versioned strings that downstream
//! consumers key off. A shipped value never changes meaning; new checks get
//! new variants.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SCORING_VERSION: &str = "v1";

pub const GOLD_THRESHOLD: u32 = 85;
pub const PRODUCTION_READY_THRESHOLD: u32 = 70;
pub const INTERNAL_THRESHOLD: u32 = 50;

/// Percent of columns that must carry a description.
pub const COLUMN_DOC_COVERAGE_TARGET_PCT: usize = 80;
/// Percent of nullable columns tolerated before schema hygiene loses points.
pub const NULLABLE_RATIO_LIMIT_PCT: usize = 50;
pub const SNAKE_CASE_PATTERN: &str = r"^[a-z][a-z0-9_]*$";
pub const LEGACY_SUFFIXES: [&str; 5] = ["_tmp", "_old", "_deprecated", "_backup", "_archive"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKey {
    Ownership,
    Documentation,
    SchemaHygiene,
    DataQuality,
    Stability,
    Operational,
}

impl DimensionKey {
    /// Emission order used by the orchestrator.
    pub const ALL: [DimensionKey; 6] = [
        Self::Ownership,
        Self::Documentation,
        Self::SchemaHygiene,
        Self::DataQuality,
        Self::Stability,
        Self::Operational,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ownership => "ownership",
            Self::Documentation => "documentation",
            Self::SchemaHygiene => "schema_hygiene",
            Self::DataQuality => "data_quality",
            Self::Stability => "stability",
            Self::Operational => "operational",
        }
    }

    pub fn max_points(self) -> u32 {
        match self {
            Self::Ownership => 15,
            Self::Documentation => 20,
            Self::SchemaHygiene => 15,
            Self::DataQuality => 20,
            Self::Stability => 20,
            Self::Operational => 10,
        }
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    MissingOwner,
    MissingContact,
    MissingDescription,
    InsufficientColumnDocs,
    NamingConventionViolations,
    HighNullableRatio,
    LegacyColumnsDetected,
    MissingQualityChecks,
    MissingSla,
    UnresolvedFailures,
    BreakingChangesDetected,
    MissingChangelog,
    BackwardIncompatible,
    MissingIntendedUse,
    MissingLimitations,
}

impl ReasonCode {
    pub const ALL: [ReasonCode; 15] = [
        Self::MissingOwner,
        Self::MissingContact,
        Self::MissingDescription,
        Self::InsufficientColumnDocs,
        Self::NamingConventionViolations,
        Self::HighNullableRatio,
        Self::LegacyColumnsDetected,
        Self::MissingQualityChecks,
        Self::MissingSla,
        Self::UnresolvedFailures,
        Self::BreakingChangesDetected,
        Self::MissingChangelog,
        Self::BackwardIncompatible,
        Self::MissingIntendedUse,
        Self::MissingLimitations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingOwner => "missing_owner",
            Self::MissingContact => "missing_contact",
            Self::MissingDescription => "missing_description",
            Self::InsufficientColumnDocs => "insufficient_column_docs",
            Self::NamingConventionViolations => "naming_convention_violations",
            Self::HighNullableRatio => "high_nullable_ratio",
            Self::LegacyColumnsDetected => "legacy_columns_detected",
            Self::MissingQualityChecks => "missing_quality_checks",
            Self::MissingSla => "missing_sla",
            Self::UnresolvedFailures => "unresolved_failures",
            Self::BreakingChangesDetected => "breaking_changes_detected",
            Self::MissingChangelog => "missing_changelog",
            Self::BackwardIncompatible => "backward_incompatible",
            Self::MissingIntendedUse => "missing_intended_use",
            Self::MissingLimitations => "missing_limitations",
        }
    }

    pub fn dimension(self) -> DimensionKey {
        match self {
            Self::MissingOwner | Self::MissingContact => DimensionKey::Ownership,
            Self::MissingDescription | Self::InsufficientColumnDocs => DimensionKey::Documentation,
            Self::NamingConventionViolations
            | Self::HighNullableRatio
            | Self::LegacyColumnsDetected => DimensionKey::SchemaHygiene,
            Self::MissingQualityChecks | Self::MissingSla | Self::UnresolvedFailures => {
                DimensionKey::DataQuality
            }
            Self::BreakingChangesDetected | Self::MissingChangelog | Self::BackwardIncompatible => {
                DimensionKey::Stability
            }
            Self::MissingIntendedUse | Self::MissingLimitations => DimensionKey::Operational,
        }
    }

    /// The action that clears this reason once it is carried out.
    pub fn remedy(self) -> ActionKey {
        match self {
            Self::MissingOwner => ActionKey::AssignOwner,
            Self::MissingContact => ActionKey::AddOwnerContact,
            Self::MissingDescription => ActionKey::AddDescription,
            Self::InsufficientColumnDocs => ActionKey::DocumentColumns,
            Self::NamingConventionViolations => ActionKey::FixNaming,
            Self::HighNullableRatio => ActionKey::ReduceNullableColumns,
            Self::LegacyColumnsDetected => ActionKey::RemoveLegacyColumns,
            Self::MissingQualityChecks => ActionKey::AddQualityChecks,
            Self::MissingSla => ActionKey::DefineSla,
            Self::UnresolvedFailures => ActionKey::ResolveFailures,
            Self::BreakingChangesDetected => ActionKey::PreventBreakingChanges,
            Self::MissingChangelog => ActionKey::AddChangelog,
            Self::BackwardIncompatible => ActionKey::MaintainCompatibility,
            Self::MissingIntendedUse => ActionKey::DefineIntendedUse,
            Self::MissingLimitations => ActionKey::DocumentLimitations,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKey {
    AssignOwner,
    AddOwnerContact,
    AddDescription,
    DocumentColumns,
    FixNaming,
    ReduceNullableColumns,
    RemoveLegacyColumns,
    AddQualityChecks,
    DefineSla,
    ResolveFailures,
    PreventBreakingChanges,
    AddChangelog,
    MaintainCompatibility,
    DefineIntendedUse,
    DocumentLimitations,
}

impl ActionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssignOwner => "assign_owner",
            Self::AddOwnerContact => "add_owner_contact",
            Self::AddDescription => "add_description",
            Self::DocumentColumns => "document_columns",
            Self::FixNaming => "fix_naming",
            Self::ReduceNullableColumns => "reduce_nullable_columns",
            Self::RemoveLegacyColumns => "remove_legacy_columns",
            Self::AddQualityChecks => "add_quality_checks",
            Self::DefineSla => "define_sla",
            Self::ResolveFailures => "resolve_failures",
            Self::PreventBreakingChanges => "prevent_breaking_changes",
            Self::AddChangelog => "add_changelog",
            Self::MaintainCompatibility => "maintain_compatibility",
            Self::DefineIntendedUse => "define_intended_use",
            Self::DocumentLimitations => "document_limitations",
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
