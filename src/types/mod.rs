pub mod config;
pub mod dataset;
pub mod metadata;
pub mod scoring;
