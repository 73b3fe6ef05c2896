//! Readiness scoring engine.
//!
//! [`score`] maps one [`MetadataRecord`] to a [`ScoreResult`]. It is pure and
//! total: no I/O, no shared state, and no error path for any well-typed
//! record. Callers own persistence of the result.

pub mod constants;
pub mod dimensions;

use crate::types::metadata::MetadataRecord;
use crate::types::scoring::{ReadinessStatus, ScoreResult};
use dimensions::SCORERS;
use tracing::debug;

pub fn score(metadata: &MetadataRecord) -> ScoreResult {
    let mut dimension_scores = Vec::with_capacity(SCORERS.len());
    let mut reasons = Vec::new();
    let mut actions = Vec::new();

    for (key, scorer) in SCORERS {
        let outcome = scorer(metadata);
        debug!(
            dimension = %key,
            points = outcome.score.points_awarded,
            max = outcome.score.max_points,
            measured = outcome.score.measured,
            reasons = outcome.reasons.len(),
            "dimension scored"
        );
        dimension_scores.push(outcome.score);
        reasons.extend(outcome.reasons);
        actions.extend(outcome.actions);
    }

    let total_score = dimension_scores
        .iter()
        .map(|dimension| dimension.points_awarded)
        .sum();

    ScoreResult {
        total_score,
        status: ReadinessStatus::from_score(total_score),
        dimension_scores,
        reasons,
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::constants::DimensionKey;

    #[test]
    fn dimensions_are_emitted_in_fixed_order() {
        let result = score(&MetadataRecord::default());
        let keys = result
            .dimension_scores
            .iter()
            .map(|dimension| dimension.dimension_key)
            .collect::<Vec<_>>();
        assert_eq!(keys, DimensionKey::ALL.to_vec());
    }

    #[test]
    fn reasons_follow_dimension_order() {
        let result = score(&MetadataRecord::default());
        let order = |key: DimensionKey| {
            DimensionKey::ALL
                .iter()
                .position(|candidate| *candidate == key)
                .unwrap_or(usize::MAX)
        };
        let positions = result
            .reasons
            .iter()
            .map(|reason| order(reason.dimension_key))
            .collect::<Vec<_>>();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn total_is_sum_of_dimension_points() {
        let metadata = MetadataRecord {
            owner_name: Some("Team C".to_string()),
            description: Some("Some description".to_string()),
            intended_use: Some("Internal use".to_string()),
            has_freshness_checks: true,
            ..MetadataRecord::default()
        };
        let result = score(&metadata);
        let sum: u32 = result
            .dimension_scores
            .iter()
            .map(|dimension| dimension.points_awarded)
            .sum();
        assert_eq!(result.total_score, sum);
        // 10 ownership + 5 documentation + 15 data quality + 5 operational
        assert_eq!(result.total_score, 35);
        assert_eq!(result.status, ReadinessStatus::Draft);
    }
}
