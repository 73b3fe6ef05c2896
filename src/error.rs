use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("dataset parse error: {0}")]
    DatasetParse(String),

    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("dbt parse error: {0}")]
    DbtParse(String),

    #[error("invalid readiness status: {0}")]
    InvalidStatus(String),

    #[error("dataset {full_name} shares a store file with {existing}")]
    SlugCollision { full_name: String, existing: String },

    #[error("store is corrupt: {0}")]
    StoreCorrupt(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
