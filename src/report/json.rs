use crate::report::ScoredDataset;
use crate::types::dataset::{DatasetEntity, HistoryEntry, StoredDataset};
use crate::types::metadata::ColumnMetadata;
use crate::types::scoring::{Action, DimensionScore, Reason};
use serde::Serialize;

pub fn to_json(datasets: &[ScoredDataset]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(datasets)
}

#[derive(Serialize)]
struct DetailView<'a> {
    #[serde(flatten)]
    entity: &'a DatasetEntity,
    dimension_scores: &'a [DimensionScore],
    reasons: Vec<&'a Reason>,
    actions: Vec<&'a Action>,
    columns: &'a [ColumnMetadata],
    history: &'a [HistoryEntry],
}

pub fn detail_to_json(
    stored: &StoredDataset,
    history: &[HistoryEntry],
) -> Result<String, serde_json::Error> {
    let view = DetailView {
        entity: &stored.entity,
        dimension_scores: &stored.dimension_scores,
        reasons: stored.visible_reasons(),
        actions: stored.visible_actions(),
        columns: &stored.columns,
        history,
    };
    serde_json::to_string_pretty(&view)
}
