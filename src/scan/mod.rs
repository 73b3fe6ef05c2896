//! Discovery and loading of dataset description files.

pub mod filesystem;

use crate::error::{ReadinessError, Result};
use crate::types::config::ScanSettings;
use crate::types::dataset::DatasetFile;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct DiscoveredDataset {
    pub path: PathBuf,
    pub file: DatasetFile,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// One entry per `full_name`, sorted by name.
    pub datasets: Vec<DiscoveredDataset>,
    /// Files that failed to parse, with the parse error.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Loads a single description file or every matching file below a directory.
///
/// A named file that fails to parse is an error. Inside a directory walk such
/// files are skipped and listed in [`ScanOutcome::skipped`].
pub fn discover(path: &Path, settings: &ScanSettings) -> Result<ScanOutcome> {
    if !path.exists() {
        return Err(ReadinessError::PathNotFound(path.display().to_string()));
    }

    if path.is_file() {
        let file = parse_file(path)?;
        return Ok(ScanOutcome {
            datasets: vec![DiscoveredDataset {
                path: path.to_path_buf(),
                file,
            }],
            skipped: Vec::new(),
        });
    }

    let mut by_name: BTreeMap<String, DiscoveredDataset> = BTreeMap::new();
    let mut skipped = Vec::new();
    for candidate in filesystem::list_files(path, settings) {
        match parse_file(&candidate) {
            Ok(file) => {
                debug!(path = %candidate.display(), full_name = %file.full_name, "dataset file loaded");
                let name = file.full_name.clone();
                let discovered = DiscoveredDataset {
                    path: candidate,
                    file,
                };
                if let Some(previous) = by_name.insert(name.clone(), discovered) {
                    warn!(
                        full_name = %name,
                        replaced = %previous.path.display(),
                        "duplicate dataset; later file wins"
                    );
                }
            }
            Err(err) => {
                warn!(path = %candidate.display(), error = %err, "skipping unreadable dataset file");
                skipped.push((candidate, err.to_string()));
            }
        }
    }

    Ok(ScanOutcome {
        datasets: by_name.into_values().collect(),
        skipped,
    })
}

/// Parses one description file, choosing the format by extension.
pub fn parse_file(path: &Path) -> Result<DatasetFile> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str::<DatasetFile>(&content).map_err(|err| err.to_string())
    } else {
        toml::from_str::<DatasetFile>(&content).map_err(|err| err.to_string())
    };
    let file = parsed
        .map_err(|msg| ReadinessError::DatasetParse(format!("{}: {}", path.display(), msg)))?;

    if file.full_name.trim().is_empty() {
        return Err(ReadinessError::DatasetParse(format!(
            "{}: full_name must not be empty",
            path.display()
        )));
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ORDERS: &str = r#"
full_name = "warehouse.orders"
owner_name = "Commerce"
"#;

    #[test]
    fn discover_single_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("orders.toml");
        fs::write(&path, ORDERS).expect("file should write");

        let outcome = discover(&path, &ScanSettings::default()).expect("scan should succeed");
        assert_eq!(outcome.datasets.len(), 1);
        assert_eq!(outcome.datasets[0].file.full_name, "warehouse.orders");
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn discover_named_file_with_bad_content_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "owner_name = 3").expect("file should write");

        let err = discover(&path, &ScanSettings::default()).expect_err("scan should fail");
        assert!(matches!(err, ReadinessError::DatasetParse(_)));
    }

    #[test]
    fn discover_directory_skips_bad_files_and_keeps_later_duplicate() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("a.toml"), ORDERS).expect("file should write");
        fs::write(
            dir.path().join("b.json"),
            r#"{"full_name": "warehouse.orders", "owner_name": "Finance"}"#,
        )
        .expect("file should write");
        fs::write(dir.path().join("c.toml"), "not = [valid").expect("file should write");

        let outcome =
            discover(dir.path(), &ScanSettings::default()).expect("scan should succeed");
        assert_eq!(outcome.datasets.len(), 1);
        assert_eq!(
            outcome.datasets[0].file.metadata.owner_name.as_deref(),
            Some("Finance")
        );
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.skipped[0].0.ends_with("c.toml"));
    }

    #[test]
    fn discover_missing_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = discover(&dir.path().join("nope"), &ScanSettings::default())
            .expect_err("scan should fail");
        assert!(matches!(err, ReadinessError::PathNotFound(_)));
    }

    #[test]
    fn parse_file_rejects_blank_full_name() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("blank.toml");
        fs::write(&path, "full_name = \"  \"").expect("file should write");
        let err = parse_file(&path).expect_err("parse should fail");
        assert!(err.to_string().contains("full_name must not be empty"));
    }
}
