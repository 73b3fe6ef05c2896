use super::{DimensionOutcome, Tally};
use crate::scoring::constants::{DimensionKey, ReasonCode};
use crate::types::metadata::{has_text, MetadataRecord};

const CHECKS_POINTS: u32 = 10;
const SLA_POINTS: u32 = 5;
const FAILURES_POINTS: u32 = 5;

pub fn score_data_quality(metadata: &MetadataRecord) -> DimensionOutcome {
    let mut tally = Tally::new(DimensionKey::DataQuality);

    let has_checks =
        metadata.has_freshness_checks || metadata.has_volume_checks || metadata.dbt_test_count > 0;
    if has_checks {
        tally.award(CHECKS_POINTS);
    } else {
        tally.lose(
            ReasonCode::MissingQualityChecks,
            CHECKS_POINTS,
            "No freshness or volume checks configured".to_string(),
            "Add data quality checks",
            "Configure freshness and volume checks (e.g., dbt tests) to monitor data quality"
                .to_string(),
        );
    }

    // a stated intended use stands in for SLA awareness
    if metadata.has_sla || has_text(metadata.intended_use.as_deref()) {
        tally.award(SLA_POINTS);
    } else {
        tally.lose(
            ReasonCode::MissingSla,
            SLA_POINTS,
            "No SLA or intended use defined".to_string(),
            "Define data SLA",
            "Define a service level agreement or intended use cases for this dataset".to_string(),
        );
    }

    match metadata.unresolved_failures_30d {
        None => {}
        Some(0) => tally.award(FAILURES_POINTS),
        Some(failures) => tally.lose(
            ReasonCode::UnresolvedFailures,
            FAILURES_POINTS,
            format!("{failures} unresolved data quality failures in last 30 days"),
            "Resolve data quality failures",
            format!("Investigate and resolve {failures} outstanding data quality failures"),
        ),
    }

    tally.finish(true)
}
