pub mod json;
pub mod md;
pub mod sarif;

use crate::error::Result;
use crate::types::dataset::{HistoryEntry, StoredDataset};
use crate::types::scoring::{ReadinessStatus, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

impl OutputFormat {
    /// Parses a configured format name; unknown names fall back to Markdown.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            "sarif" => Self::Sarif,
            _ => Self::Md,
        }
    }
}

/// One dataset together with its freshly computed result.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDataset {
    pub full_name: String,
    pub display_name: String,
    pub result: ScoreResult,
}

/// Renders scoring results. `gate` decides the SARIF level: datasets below
/// it report errors, the rest warnings.
pub fn render(
    datasets: &[ScoredDataset],
    format: OutputFormat,
    gate: ReadinessStatus,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::to_json(datasets)?),
        OutputFormat::Md => Ok(md::to_markdown(datasets)),
        OutputFormat::Sarif => Ok(sarif::to_sarif(datasets, gate)?),
    }
}

/// Renders a stored dataset with its recent history. SARIF is not offered
/// for stored detail; it renders as Markdown.
pub fn render_detail(
    stored: &StoredDataset,
    history: &[HistoryEntry],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::detail_to_json(stored, history)?),
        OutputFormat::Md | OutputFormat::Sarif => Ok(md::detail_to_markdown(stored, history)),
    }
}
