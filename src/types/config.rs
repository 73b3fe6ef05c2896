use crate::error::ReadinessError;
use crate::types::scoring::ReadinessStatus;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = ".readiness/store";
pub const DEFAULT_HISTORY_LIMIT: usize = 30;
pub const DEFAULT_REPORT_FORMAT: &str = "md";
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["toml", "json"];
pub const DEFAULT_EXCLUDES: [&str; 3] = ["target", ".git", ".readiness"];

const REPORT_FORMATS: [&str; 3] = ["md", "json", "sarif"];

#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessConfig {
    pub project: ProjectConfig,
    pub store: Option<StoreConfig>,
    pub report: Option<ReportConfig>,
    pub gate: Option<GateConfig>,
    pub log: Option<LogConfig>,
    pub scan: Option<ScanConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub history_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    pub min_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

/// Resolved scan settings; also used when no config file exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            exclude: DEFAULT_EXCLUDES.iter().map(|dir| dir.to_string()).collect(),
        }
    }
}

impl ReadinessConfig {
    pub fn store_path(&self) -> PathBuf {
        self.store
            .as_ref()
            .and_then(|store| store.path.as_deref())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from)
    }

    pub fn history_limit(&self) -> usize {
        self.store
            .as_ref()
            .and_then(|store| store.history_limit)
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    pub fn report_format(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
            .unwrap_or(DEFAULT_REPORT_FORMAT)
    }

    pub fn min_status(&self) -> Result<ReadinessStatus, ReadinessError> {
        match self.gate.as_ref().and_then(|gate| gate.min_status.as_deref()) {
            Some(value) => value.parse(),
            None => Ok(ReadinessStatus::ProductionReady),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log.as_ref().and_then(|log| log.level.as_deref())
    }

    pub fn scan_settings(&self) -> ScanSettings {
        let defaults = ScanSettings::default();
        match &self.scan {
            Some(scan) => ScanSettings {
                extensions: scan.extensions.clone().unwrap_or(defaults.extensions),
                exclude: scan.exclude.clone().unwrap_or(defaults.exclude),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), ReadinessError> {
        if self.project.name.trim().is_empty() {
            return Err(ReadinessError::ConfigParse(
                "project.name must not be empty".to_string(),
            ));
        }

        if let Some(store) = &self.store {
            if store.history_limit == Some(0) {
                return Err(ReadinessError::ConfigParse(
                    "store.history_limit must be greater than 0".to_string(),
                ));
            }
            if store.path.as_deref().is_some_and(|path| path.trim().is_empty()) {
                return Err(ReadinessError::ConfigParse(
                    "store.path must not be empty".to_string(),
                ));
            }
        }

        let format = self.report_format();
        if !REPORT_FORMATS.contains(&format) {
            return Err(ReadinessError::ConfigParse(format!(
                "unsupported report.format: {format} (expected one of {})",
                REPORT_FORMATS.join(", ")
            )));
        }

        self.min_status().map_err(|err| {
            ReadinessError::ConfigParse(format!("gate.min_status: {err}"))
        })?;

        if let Some(scan) = &self.scan {
            if scan
                .extensions
                .as_ref()
                .is_some_and(|extensions| extensions.is_empty())
            {
                return Err(ReadinessError::ConfigParse(
                    "scan.extensions cannot be empty".to_string(),
                ));
            }
            if let Some(exclude) = &scan.exclude {
                if exclude.iter().any(|entry| entry.trim().is_empty()) {
                    return Err(ReadinessError::ConfigParse(
                        "scan.exclude entries must be non-empty directory names".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}
