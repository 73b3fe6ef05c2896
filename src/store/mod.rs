//! File-backed dataset store.
//!
//! Layout under the store root:
//!
//! - `datasets/<slug>.json`: the latest [`StoredDataset`] for one dataset
//! - `history/<slug>.jsonl`: append-only score history, one row per line
//!
//! Names that map to the same slug cannot both be stored; the second is
//! rejected. The store assumes a single writer. Two processes rescoring the
//! same dataset at once can interleave their document writes.

use crate::catalog::{build_metadata, EntityUpdate};
use crate::error::{ReadinessError, Result};
use crate::scoring;
use crate::scoring::constants::SCORING_VERSION;
use crate::types::dataset::{DatasetEntity, DatasetFile, HistoryEntry, StoredDataset};
use crate::types::metadata::MetadataRecord;
use crate::types::scoring::{ReadinessStatus, ScoreResult};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DATASETS_DIR: &str = "datasets";
const HISTORY_DIR: &str = "history";

#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Empty means every status.
    pub statuses: Vec<ReadinessStatus>,
    /// Case-insensitive substring of the owner name.
    pub owner: Option<String>,
    /// Case-insensitive substring of the full or display name.
    pub query: Option<String>,
}

impl ListFilter {
    pub fn matches(&self, entity: &DatasetEntity) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&entity.readiness_status) {
            return false;
        }
        if let Some(owner) = &self.owner {
            let owner_name = entity.owner_name.as_deref().unwrap_or_default();
            if !contains_ignore_case(owner_name, owner) {
                return false;
            }
        }
        if let Some(query) = &self.query {
            if !contains_ignore_case(&entity.full_name, query)
                && !contains_ignore_case(&entity.display_name, query)
            {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Maps a dataset name to its file stem.
pub fn slug(full_name: &str) -> String {
    full_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// SHA-256 of the canonical JSON form of `metadata`.
pub fn metadata_fingerprint(metadata: &MetadataRecord) -> Result<String> {
    let bytes = serde_json::to_vec(metadata)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{digest:x}"))
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dataset_path(&self, full_name: &str) -> PathBuf {
        self.root
            .join(DATASETS_DIR)
            .join(format!("{}.json", slug(full_name)))
    }

    fn history_path(&self, full_name: &str) -> PathBuf {
        self.root
            .join(HISTORY_DIR)
            .join(format!("{}.jsonl", slug(full_name)))
    }

    pub fn load(&self, full_name: &str) -> Result<Option<StoredDataset>> {
        let path = self.dataset_path(full_name);
        if !path.exists() {
            return Ok(None);
        }
        let stored = read_document(&path)?;
        if stored.entity.full_name != full_name {
            debug!(requested = full_name, found = %stored.entity.full_name, "slug collision");
            return Ok(None);
        }
        Ok(Some(stored))
    }

    pub fn get(&self, full_name: &str) -> Result<StoredDataset> {
        self.load(full_name)?
            .ok_or_else(|| ReadinessError::DatasetNotFound(full_name.to_string()))
    }

    /// Fails when `full_name` maps to a file already owned by another dataset.
    fn ensure_slug_owner(&self, full_name: &str) -> Result<()> {
        let path = self.dataset_path(full_name);
        if !path.exists() {
            return Ok(());
        }
        let existing = read_document(&path)?.entity.full_name;
        if existing == full_name {
            Ok(())
        } else {
            Err(ReadinessError::SlugCollision {
                full_name: full_name.to_string(),
                existing,
            })
        }
    }

    /// Stores the outcome of one scoring run.
    ///
    /// Replaces the dimension, reason, action and column rows, refreshes the
    /// cached score on the entity and appends exactly one history row. Nothing
    /// is written when the name collides with another stored dataset.
    pub fn persist(
        &self,
        mut entity: DatasetEntity,
        metadata: &MetadataRecord,
        result: &ScoreResult,
        now: DateTime<Utc>,
    ) -> Result<StoredDataset> {
        self.ensure_slug_owner(&entity.full_name)?;
        entity.readiness_score = result.total_score;
        entity.readiness_status = result.status;
        entity.last_scored_at = Some(now);

        let stored = StoredDataset {
            entity,
            dimension_scores: result.dimension_scores.clone(),
            reasons: result.reasons.clone(),
            actions: result.actions.clone(),
            columns: metadata.columns.clone(),
        };
        let full_name = stored.entity.full_name.clone();
        write_document(&self.dataset_path(&full_name), &stored)?;

        let entry = HistoryEntry {
            score: result.total_score,
            status: result.status,
            recorded_at: now,
            scoring_version: SCORING_VERSION.to_string(),
            metadata_sha256: metadata_fingerprint(metadata)?,
        };
        self.append_history(&full_name, &entry)?;

        info!(
            full_name = %full_name,
            score = result.total_score,
            status = %result.status,
            "dataset scored"
        );
        Ok(stored)
    }

    fn append_history(&self, full_name: &str, entry: &HistoryEntry) -> Result<()> {
        let path = self.history_path(full_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// Upserts the dataset described by `file`, scores it and persists the
    /// result.
    pub fn ingest(&self, file: &DatasetFile, now: DateTime<Utc>) -> Result<StoredDataset> {
        let entity = match self.load(&file.full_name)? {
            Some(existing) => {
                let mut entity = existing.entity;
                entity.apply_file(file, now);
                entity
            }
            None => DatasetEntity::from_file(file, now),
        };
        let metadata = build_metadata(&entity, Some(file.metadata.columns.as_slice()));
        let result = scoring::score(&metadata);
        self.persist(entity, &metadata, &result, now)
    }

    /// Applies `update` to a stored dataset and rescores it from stored state.
    pub fn update(
        &self,
        full_name: &str,
        update: EntityUpdate,
        now: DateTime<Utc>,
    ) -> Result<StoredDataset> {
        let stored = self.get(full_name)?;
        let mut entity = stored.entity;
        update.apply(&mut entity);
        let metadata = build_metadata(&entity, Some(stored.columns.as_slice()));
        let result = scoring::score(&metadata);
        self.persist(entity, &metadata, &result, now)
    }

    /// Stored entities matching `filter`, highest score first.
    pub fn list(&self, filter: &ListFilter) -> Result<Vec<DatasetEntity>> {
        let dir = self.root.join(DATASETS_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entities = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let stored = read_document(&path)?;
            if filter.matches(&stored.entity) {
                entities.push(stored.entity);
            }
        }
        entities.sort_by(|a, b| {
            b.readiness_score
                .cmp(&a.readiness_score)
                .then_with(|| a.full_name.cmp(&b.full_name))
        });
        Ok(entities)
    }

    /// Up to `limit` history rows, most recent first.
    pub fn history(&self, full_name: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        let path = self.history_path(full_name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let mut rows = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry: HistoryEntry = serde_json::from_str(line).map_err(|err| {
                ReadinessError::StoreCorrupt(format!(
                    "{} line {}: {}",
                    path.display(),
                    index + 1,
                    err
                ))
            })?;
            rows.push(entry);
        }
        rows.reverse();
        rows.truncate(limit);
        Ok(rows)
    }
}

fn read_document(path: &Path) -> Result<StoredDataset> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|err| ReadinessError::StoreCorrupt(format!("{}: {}", path.display(), err)))
}

fn write_document(path: &Path, stored: &StoredDataset) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(stored)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
