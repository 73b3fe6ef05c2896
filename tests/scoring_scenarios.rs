use readiness::{
    score, ActionKey, ColumnMetadata, DimensionKey, MetadataRecord, ReadinessStatus, ReasonCode,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn complete() -> MetadataRecord {
    MetadataRecord {
        owner_name: text("Data Team"),
        owner_contact: text("#data-team"),
        description: text("Comprehensive user events table"),
        columns: vec![
            ColumnMetadata::named("user_id")
                .with_description("Unique user identifier")
                .with_nullable(false),
            ColumnMetadata::named("event_type")
                .with_description("Type of event")
                .with_nullable(true),
        ],
        intended_use: text("Analytics"),
        limitations: text("Delayed by one hour"),
        has_freshness_checks: true,
        has_sla: true,
        breaking_changes_30d: Some(0),
        has_release_notes: true,
        backward_compatible: Some(true),
        ..MetadataRecord::default()
    }
}

fn points(metadata: &MetadataRecord, key: DimensionKey) -> u32 {
    score(metadata)
        .dimension(key)
        .map(|dimension| dimension.points_awarded)
        .unwrap_or_default()
}

#[test]
fn empty_metadata_is_draft_with_guidance() {
    let result = score(&MetadataRecord::default());
    assert_eq!(result.total_score, 0);
    assert_eq!(result.status, ReadinessStatus::Draft);
    assert_eq!(result.dimension_scores.len(), 6);
    assert!(!result.reasons.is_empty());
    assert!(!result.actions.is_empty());
}

#[test]
fn complete_metadata_is_gold_without_reasons() {
    let result = score(&complete());
    assert_eq!(result.status, ReadinessStatus::Gold);
    assert!(result.reasons.is_empty());
    assert!(result.actions.is_empty());
    assert_eq!(result.points_available(), 0);
    // column-doc and description checks cover 15 of documentation's 20
    assert_eq!(result.total_score, 90);

    let with_clean_history = MetadataRecord {
        unresolved_failures_30d: Some(0),
        ..complete()
    };
    assert_eq!(score(&with_clean_history).total_score, 95);
}

#[test]
fn ownership_only_scores_fifteen() {
    let metadata = MetadataRecord {
        owner_name: text("X"),
        owner_contact: text("Y"),
        ..MetadataRecord::default()
    };
    let result = score(&metadata);
    assert_eq!(result.total_score, 15);
    assert_eq!(result.status, ReadinessStatus::Draft);
    assert_eq!(points(&metadata, DimensionKey::Ownership), 15);
}

#[test]
fn sparse_column_docs_lose_coverage_points() {
    let metadata = MetadataRecord {
        description: text("Orders"),
        columns: vec![
            ColumnMetadata::named("id").with_description("Key"),
            ColumnMetadata::named("a").with_description("A"),
            ColumnMetadata::named("b"),
            ColumnMetadata::named("c"),
            ColumnMetadata::named("d"),
        ],
        ..MetadataRecord::default()
    };
    let result = score(&metadata);
    assert_eq!(points(&metadata, DimensionKey::Documentation), 5);
    assert!(result.has_reason(ReasonCode::InsufficientColumnDocs));
    let reason = result
        .reasons
        .iter()
        .find(|reason| reason.reason_code == ReasonCode::InsufficientColumnDocs)
        .expect("coverage reason should be present");
    assert_eq!(
        reason.message,
        "Only 40% of columns documented (3 columns missing docs)"
    );
}

#[test]
fn bad_names_and_legacy_columns_both_penalized() {
    let metadata = MetadataRecord {
        columns: vec![
            ColumnMetadata::named("UserID"),
            ColumnMetadata::named("temp_data_tmp"),
        ],
        ..MetadataRecord::default()
    };
    let result = score(&metadata);
    assert!(result.has_reason(ReasonCode::NamingConventionViolations));
    assert!(result.has_reason(ReasonCode::LegacyColumnsDetected));
    assert!(!result.has_reason(ReasonCode::HighNullableRatio));
    // both remaining checks fail and the nullable check is skipped
    assert_eq!(points(&metadata, DimensionKey::SchemaHygiene), 0);
    assert_eq!(result.reasons.len(), result.actions.len());
}

#[test]
fn scoring_is_deterministic() {
    let metadata = MetadataRecord {
        columns: vec![ColumnMetadata::named("BadName")],
        unresolved_failures_30d: Some(3),
        breaking_changes_30d: Some(2),
        ..complete()
    };
    assert_eq!(score(&metadata), score(&metadata));
}

#[test]
fn unmeasured_signals_never_cost_points() {
    let base = complete();
    let baseline = score(&base).total_score;

    let without_failures = MetadataRecord {
        unresolved_failures_30d: None,
        ..base.clone()
    };
    let without_breaking = MetadataRecord {
        breaking_changes_30d: None,
        ..base.clone()
    };
    let without_compat = MetadataRecord {
        backward_compatible: None,
        ..base.clone()
    };
    for variant in [without_failures, without_breaking, without_compat] {
        let result = score(&variant);
        assert!(result.reasons.is_empty());
        assert!(result.total_score <= baseline);
    }
}

#[test]
fn unmeasured_stability_emits_nothing() {
    let result = score(&MetadataRecord::default());
    let stability = result
        .dimension(DimensionKey::Stability)
        .expect("stability should be scored");
    assert!(!stability.measured);
    assert_eq!(stability.points_awarded, 0);
    assert!(result
        .reasons
        .iter()
        .all(|reason| reason.dimension_key != DimensionKey::Stability));
    assert!(result
        .actions
        .iter()
        .all(|action| action.dimension_key != DimensionKey::Stability));
}

#[test]
fn every_reason_has_a_matching_action() {
    let metadata = MetadataRecord {
        owner_name: text("Team"),
        columns: vec![
            ColumnMetadata::named("Bad_Name").with_nullable(true),
            ColumnMetadata::named("value_old").with_nullable(true),
        ],
        unresolved_failures_30d: Some(4),
        breaking_changes_30d: Some(1),
        backward_compatible: Some(false),
        ..MetadataRecord::default()
    };
    let result = score(&metadata);
    assert_eq!(result.reasons.len(), result.actions.len());
    for (reason, action) in result.reasons.iter().zip(&result.actions) {
        assert_eq!(reason.dimension_key, action.dimension_key);
        assert_eq!(reason.reason_code.remedy(), action.action_key);
        assert_eq!(reason.points_lost, action.points_gain);
        assert!(result.has_action(reason.reason_code.remedy()));
    }
    let lost: u32 = result.reasons.iter().map(|reason| reason.points_lost).sum();
    assert_eq!(result.points_available(), lost);
    assert!(!result.has_action(ActionKey::AssignOwner));
}

#[test]
fn dimension_points_stay_within_bounds() {
    let samples = [MetadataRecord::default(), complete()];
    for metadata in &samples {
        let result = score(metadata);
        let sum: u32 = result
            .dimension_scores
            .iter()
            .map(|dimension| dimension.points_awarded)
            .sum();
        assert_eq!(result.total_score, sum);
        assert!(result.total_score <= 100);
        for dimension in &result.dimension_scores {
            assert!(dimension.points_awarded <= dimension.max_points);
            assert_eq!(dimension.max_points, dimension.dimension_key.max_points());
        }
        assert_eq!(result.status, ReadinessStatus::from_score(result.total_score));
    }
}
