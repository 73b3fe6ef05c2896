//! Deterministic dataset readiness scoring.
//!
//! The engine in [`scoring`] turns a [`MetadataRecord`] into a [`ScoreResult`]
//! across six dimensions. The remaining modules load dataset descriptions,
//! persist results and render reports around it.

pub mod catalog;
pub mod config;
pub mod dbt;
pub mod error;
pub mod report;
pub mod scan;
pub mod scoring;
pub mod store;
pub mod telemetry;
pub mod types;

pub use error::{ReadinessError, Result};
pub use scoring::constants::{ActionKey, DimensionKey, ReasonCode, SCORING_VERSION};
pub use scoring::score;
pub use types::metadata::{ColumnMetadata, MetadataRecord};
pub use types::scoring::{Action, DimensionScore, ReadinessStatus, Reason, ScoreResult};
