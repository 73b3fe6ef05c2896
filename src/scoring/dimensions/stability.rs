use super::{DimensionOutcome, Tally};
use crate::scoring::constants::{DimensionKey, ReasonCode};
use crate::types::metadata::MetadataRecord;

const NO_BREAKING_POINTS: u32 = 10;
const CHANGELOG_POINTS: u32 = 5;
const COMPATIBILITY_POINTS: u32 = 5;

pub fn score_stability(metadata: &MetadataRecord) -> DimensionOutcome {
    let mut tally = Tally::new(DimensionKey::Stability);

    match metadata.breaking_changes_30d {
        None => {}
        Some(0) => tally.award(NO_BREAKING_POINTS),
        Some(changes) => tally.lose(
            ReasonCode::BreakingChangesDetected,
            NO_BREAKING_POINTS,
            format!("{changes} breaking changes in last 30 days"),
            "Prevent breaking changes",
            "Review the change management process to avoid breaking changes that impact downstream consumers"
                .to_string(),
        ),
    }

    if metadata.has_release_notes || metadata.has_versioning {
        tally.award(CHANGELOG_POINTS);
    } else {
        tally.lose(
            ReasonCode::MissingChangelog,
            CHANGELOG_POINTS,
            "Changes are not documented or versioned".to_string(),
            "Document schema changes",
            "Maintain release notes or a changelog to document schema changes and versions"
                .to_string(),
        );
    }

    match metadata.backward_compatible {
        None => {}
        Some(true) => tally.award(COMPATIBILITY_POINTS),
        Some(false) => tally.lose(
            ReasonCode::BackwardIncompatible,
            COMPATIBILITY_POINTS,
            "Schema changes break backward compatibility".to_string(),
            "Maintain backward compatibility",
            "Ensure schema changes maintain backward compatibility for existing consumers"
                .to_string(),
        ),
    }

    let measured = metadata.breaking_changes_30d.is_some()
        || metadata.has_release_notes
        || metadata.has_versioning
        || metadata.backward_compatible.is_some();
    if measured {
        tally.finish(true)
    } else {
        tally.finish_unmeasured()
    }
}
