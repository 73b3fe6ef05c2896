use super::{DimensionOutcome, Tally};
use crate::scoring::constants::{
    DimensionKey, ReasonCode, LEGACY_SUFFIXES, NULLABLE_RATIO_LIMIT_PCT, SNAKE_CASE_PATTERN,
};
use crate::types::metadata::MetadataRecord;
use regex::Regex;
use std::sync::OnceLock;

const NAMING_POINTS: u32 = 5;
const NULLABLE_POINTS: u32 = 5;
const LEGACY_POINTS: u32 = 5;

fn re_snake_case() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // hardcoded pattern; the fallback never matches and is never reached
        Regex::new(SNAKE_CASE_PATTERN)
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

fn is_legacy_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    LEGACY_SUFFIXES
        .iter()
        .any(|suffix| lowered.ends_with(suffix))
}

pub fn score_schema_hygiene(metadata: &MetadataRecord) -> DimensionOutcome {
    let mut tally = Tally::new(DimensionKey::SchemaHygiene);
    let columns = &metadata.columns;
    if columns.is_empty() {
        return tally.finish(false);
    }

    let naming_issues = columns
        .iter()
        .map(|column| column.name.as_str())
        .filter(|name| !name.is_empty() && !re_snake_case().is_match(name))
        .collect::<Vec<_>>();
    match naming_issues.first() {
        None => tally.award(NAMING_POINTS),
        Some(example) => tally.lose(
            ReasonCode::NamingConventionViolations,
            NAMING_POINTS,
            format!(
                "{} columns violate snake_case naming (e.g., {example})",
                naming_issues.len()
            ),
            "Fix column naming conventions",
            format!(
                "Rename {} columns to follow snake_case convention",
                naming_issues.len()
            ),
        ),
    }

    // nullability is only judged when at least one column reports it
    if columns.iter().any(|column| column.nullable.is_some()) {
        let nullable = columns
            .iter()
            .filter(|column| column.nullable == Some(true))
            .count();
        if nullable * 100 > columns.len() * NULLABLE_RATIO_LIMIT_PCT {
            let percent = nullable * 100 / columns.len();
            tally.lose(
                ReasonCode::HighNullableRatio,
                NULLABLE_POINTS,
                format!(
                    "{percent}% of columns are nullable (threshold: {NULLABLE_RATIO_LIMIT_PCT}%)"
                ),
                "Reduce nullable columns",
                "Review and make columns non-nullable where appropriate to improve data quality"
                    .to_string(),
            );
        } else {
            tally.award(NULLABLE_POINTS);
        }
    }

    let legacy = columns
        .iter()
        .filter(|column| is_legacy_name(&column.name))
        .count();
    if legacy == 0 {
        tally.award(LEGACY_POINTS);
    } else {
        tally.lose(
            ReasonCode::LegacyColumnsDetected,
            LEGACY_POINTS,
            format!("{legacy} legacy/unused columns detected (ending in _tmp, _old, etc.)"),
            "Remove legacy columns",
            format!("Remove or rename {legacy} legacy columns to clean up schema"),
        );
    }

    tally.finish(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metadata::ColumnMetadata;

    fn with_columns(columns: Vec<ColumnMetadata>) -> MetadataRecord {
        MetadataRecord {
            columns,
            ..MetadataRecord::default()
        }
    }

    #[test]
    fn no_columns_awards_nothing_and_flags_nothing() {
        let outcome = score_schema_hygiene(&MetadataRecord::default());
        assert_eq!(outcome.score.points_awarded, 0);
        assert_eq!(outcome.score.max_points, 15);
        assert!(outcome.reasons.is_empty());
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn naming_and_legacy_violations_without_nullable_info() {
        let outcome = score_schema_hygiene(&with_columns(vec![
            ColumnMetadata::named("UserID"),
            ColumnMetadata::named("temp_data_tmp"),
        ]));
        // naming and legacy both fail; nullability is not judged
        assert_eq!(outcome.score.points_awarded, 0);
        assert_eq!(outcome.score.max_points, 15);
        assert!(outcome.score.measured);
        let codes = outcome
            .reasons
            .iter()
            .map(|reason| reason.reason_code)
            .collect::<Vec<_>>();
        assert_eq!(
            codes,
            vec![
                ReasonCode::NamingConventionViolations,
                ReasonCode::LegacyColumnsDetected
            ]
        );
        assert!(outcome.reasons[0].message.contains("(e.g., UserID)"));
    }

    #[test]
    fn clean_schema_with_nullable_info_earns_full_points() {
        let outcome = score_schema_hygiene(&with_columns(vec![
            ColumnMetadata::named("id").with_nullable(false),
            ColumnMetadata::named("email").with_nullable(true),
            ColumnMetadata::named("created_at"),
        ]));
        assert_eq!(outcome.score.points_awarded, 15);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn nullable_ratio_counts_unknown_columns_in_denominator() {
        // 2 nullable of 3 columns -> 66%, over the limit
        let outcome = score_schema_hygiene(&with_columns(vec![
            ColumnMetadata::named("a").with_nullable(true),
            ColumnMetadata::named("b").with_nullable(true),
            ColumnMetadata::named("c"),
        ]));
        assert_eq!(outcome.score.points_awarded, 10);
        assert_eq!(outcome.reasons[0].reason_code, ReasonCode::HighNullableRatio);
        assert_eq!(
            outcome.reasons[0].message,
            "66% of columns are nullable (threshold: 50%)"
        );
    }

    #[test]
    fn exactly_half_nullable_is_within_limit() {
        let outcome = score_schema_hygiene(&with_columns(vec![
            ColumnMetadata::named("a").with_nullable(true),
            ColumnMetadata::named("b").with_nullable(false),
        ]));
        assert_eq!(outcome.score.points_awarded, 15);
    }

    #[test]
    fn legacy_suffix_match_ignores_case() {
        assert!(is_legacy_name("Amount_OLD"));
        assert!(is_legacy_name("payload_archive"));
        assert!(!is_legacy_name("old_amount"));
        assert!(!is_legacy_name("deprecated_field"));
    }

    #[test]
    fn snake_case_requires_leading_lowercase_letter() {
        assert!(re_snake_case().is_match("user_id"));
        assert!(re_snake_case().is_match("a1_b2"));
        assert!(!re_snake_case().is_match("1st_col"));
        assert!(!re_snake_case().is_match("_hidden"));
        assert!(!re_snake_case().is_match("userId"));
    }
}
