use super::{DimensionOutcome, Tally};
use crate::scoring::constants::{DimensionKey, ReasonCode, COLUMN_DOC_COVERAGE_TARGET_PCT};
use crate::types::metadata::{has_text, MetadataRecord};

const DESCRIPTION_POINTS: u32 = 5;
const COLUMN_DOC_POINTS: u32 = 10;

pub fn score_documentation(metadata: &MetadataRecord) -> DimensionOutcome {
    let mut tally = Tally::new(DimensionKey::Documentation);

    if has_text(metadata.description.as_deref()) {
        tally.award(DESCRIPTION_POINTS);
    } else {
        tally.lose(
            ReasonCode::MissingDescription,
            DESCRIPTION_POINTS,
            "Dataset description is missing".to_string(),
            "Add dataset description",
            "Write a clear description explaining what this dataset contains and its purpose"
                .to_string(),
        );
    }

    // no columns: coverage is not judged
    let total = metadata.columns.len();
    if total > 0 {
        let documented = metadata
            .columns
            .iter()
            .filter(|column| column.is_documented())
            .count();
        if documented * 100 >= total * COLUMN_DOC_COVERAGE_TARGET_PCT {
            tally.award(COLUMN_DOC_POINTS);
        } else {
            let undocumented = total - documented;
            let percent = documented * 100 / total;
            tally.lose(
                ReasonCode::InsufficientColumnDocs,
                COLUMN_DOC_POINTS,
                format!(
                    "Only {percent}% of columns documented ({undocumented} columns missing docs)"
                ),
                "Document missing columns",
                format!(
                    "Add descriptions for {undocumented} undocumented columns (target: {COLUMN_DOC_COVERAGE_TARGET_PCT}% coverage)"
                ),
            );
        }
    }

    // the description check is always measurable
    tally.finish(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metadata::ColumnMetadata;

    fn columns(documented: usize, undocumented: usize) -> Vec<ColumnMetadata> {
        (0..documented)
            .map(|i| ColumnMetadata::named(format!("doc_{i}")).with_description("described"))
            .chain((0..undocumented).map(|i| ColumnMetadata::named(format!("bare_{i}"))))
            .collect()
    }

    #[test]
    fn no_columns_scores_description_only_without_coverage_reason() {
        let metadata = MetadataRecord {
            description: Some("Orders".to_string()),
            ..MetadataRecord::default()
        };
        let outcome = score_documentation(&metadata);
        assert_eq!(outcome.score.points_awarded, 5);
        assert!(outcome.reasons.is_empty());
        assert!(outcome.score.measured);
    }

    #[test]
    fn eighty_percent_coverage_earns_column_points() {
        let metadata = MetadataRecord {
            description: Some("Orders".to_string()),
            columns: columns(4, 1),
            ..MetadataRecord::default()
        };
        let outcome = score_documentation(&metadata);
        // description and coverage; nothing else awards documentation points
        assert_eq!(outcome.score.points_awarded, 15);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn low_coverage_reports_percentage_and_undocumented_count() {
        let metadata = MetadataRecord {
            description: Some("Orders".to_string()),
            columns: columns(2, 3),
            ..MetadataRecord::default()
        };
        let outcome = score_documentation(&metadata);
        assert_eq!(outcome.score.points_awarded, 5);
        assert_eq!(outcome.reasons.len(), 1);
        assert_eq!(
            outcome.reasons[0].reason_code,
            ReasonCode::InsufficientColumnDocs
        );
        assert_eq!(
            outcome.reasons[0].message,
            "Only 40% of columns documented (3 columns missing docs)"
        );
        assert!(outcome.actions[0].description.contains("3 undocumented"));
    }

    #[test]
    fn blank_descriptions_count_as_missing() {
        let metadata = MetadataRecord {
            description: Some(" \t".to_string()),
            columns: vec![ColumnMetadata::named("id").with_description("  ")],
            ..MetadataRecord::default()
        };
        let outcome = score_documentation(&metadata);
        assert_eq!(outcome.score.points_awarded, 0);
        assert_eq!(outcome.reasons.len(), 2);
        assert_eq!(outcome.reasons[0].reason_code, ReasonCode::MissingDescription);
        assert_eq!(outcome.reasons[1].message, "Only 0% of columns documented (1 columns missing docs)");
    }
}
