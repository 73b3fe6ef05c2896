mod cli;

use chrono::Utc;
use clap::Parser;
use readiness::catalog::{build_metadata, EntityUpdate};
use readiness::config;
use readiness::dbt;
use readiness::report::{self, OutputFormat, ScoredDataset};
use readiness::scan::{self, ScanOutcome};
use readiness::scoring::{self, constants::ReasonCode};
use readiness::store::{FileStore, ListFilter};
use readiness::telemetry;
use readiness::types::config::{ReadinessConfig, ScanSettings};
use readiness::types::dataset::{DatasetEntity, DatasetFile};
use readiness::{ReadinessError, ReadinessStatus};
use std::path::Path;
use tracing::warn;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ReadinessError> {
    let cli = cli::Cli::parse();
    let loaded = config::load_config(&cli.config_dir)?;
    let level = telemetry::resolve_level(
        cli.verbose,
        cli.quiet,
        loaded.as_ref().and_then(ReadinessConfig::log_level),
    );
    telemetry::init(&level)?;

    let cfg = loaded.as_ref();
    match cli.command {
        cli::Commands::Score(cmd) => {
            let outcome = scan::discover(&cmd.path, &scan_settings(cfg))?;
            let format = cmd.format.map_or_else(
                || OutputFormat::from_name(cfg.map_or("md", ReadinessConfig::report_format)),
                OutputFormat::from,
            );
            let gate = gate_status(cfg, None)?;
            let rendered = report::render(&score_outcome(&outcome), format, gate)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let outcome = scan::discover(&cmd.path, &scan_settings(cfg))?;
            let gate = gate_status(cfg, cmd.min_status.as_deref())?;
            let scored = score_outcome(&outcome);

            let mut blocking = false;
            for dataset in &scored {
                let passed = dataset.result.status >= gate;
                blocking |= !passed;
                println!(
                    "[{}] {} {} ({})",
                    if passed { "PASS" } else { "FAIL" },
                    dataset.full_name,
                    dataset.result.total_score,
                    dataset.result.status
                );
            }
            println!("gate: {gate}, {} dataset(s) checked", scored.len());

            if loaded.is_none() {
                warn!(dir = %cli.config_dir.display(), "no readiness.toml found");
            }

            if blocking {
                Ok(exit_code::BLOCKING)
            } else if loaded.is_none() || !outcome.skipped.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Ingest(cmd) => {
            let outcome = scan::discover(&cmd.path, &scan_settings(cfg))?;
            let store = open_store(cmd.store.store.as_deref(), cfg, &cli.config_dir);
            let files = outcome
                .datasets
                .into_iter()
                .map(|dataset| dataset.file)
                .collect::<Vec<_>>();
            ingest_all(&store, &files)?;
            if outcome.skipped.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                println!("skipped {} unreadable file(s)", outcome.skipped.len());
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::IngestDbt(cmd) => {
            let files = dbt::load(&cmd.manifest, cmd.catalog.as_deref())?;
            let store = open_store(cmd.store.store.as_deref(), cfg, &cli.config_dir);
            ingest_all(&store, &files)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(cmd) => {
            let store = open_store(cmd.store.store.as_deref(), cfg, &cli.config_dir);
            let statuses = cmd
                .status
                .iter()
                .filter(|status| !status.trim().is_empty())
                .map(|status| status.parse::<ReadinessStatus>())
                .collect::<Result<Vec<_>, _>>()?;
            let filter = ListFilter {
                statuses,
                owner: cmd.owner,
                query: cmd.query,
            };
            let entities = store.list(&filter)?;
            if entities.is_empty() {
                println!("list: no datasets");
                return Ok(exit_code::SUCCESS);
            }
            for entity in &entities {
                println!(
                    "{:>3}  {:<16}  {}  {}",
                    entity.readiness_score,
                    entity.readiness_status.as_str(),
                    entity.full_name,
                    entity.owner_name.as_deref().unwrap_or("-")
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Show(cmd) => {
            let store = open_store(cmd.store.store.as_deref(), cfg, &cli.config_dir);
            let stored = store.get(&cmd.full_name)?;
            let limit = cfg.map_or(
                readiness::types::config::DEFAULT_HISTORY_LIMIT,
                ReadinessConfig::history_limit,
            );
            let history = store.history(&cmd.full_name, limit)?;
            let rendered = report::render_detail(&stored, &history, cmd.format.into())?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Update(cmd) => {
            let store = open_store(cmd.store.store.as_deref(), cfg, &cli.config_dir);
            let update = EntityUpdate {
                display_name: cmd.display_name,
                description: cmd.description,
                owner_name: cmd.owner,
                owner_contact: cmd.contact,
                intended_use: cmd.intended_use,
                limitations: cmd.limitations,
            };
            if update.is_empty() {
                println!("update: nothing to change");
                return Ok(exit_code::WARNINGS);
            }
            let previous = store.get(&cmd.full_name)?.entity.readiness_score;
            let stored = store.update(&cmd.full_name, update, Utc::now())?;
            println!(
                "updated {}: {} -> {} ({})",
                stored.entity.full_name,
                previous,
                stored.entity.readiness_score,
                stored.entity.readiness_status
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Codes => {
            for code in ReasonCode::ALL {
                println!("{}\t{}\t{}", code, code.dimension(), code.remedy());
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn scan_settings(cfg: Option<&ReadinessConfig>) -> ScanSettings {
    cfg.map(ReadinessConfig::scan_settings).unwrap_or_default()
}

fn gate_status(
    cfg: Option<&ReadinessConfig>,
    requested: Option<&str>,
) -> Result<ReadinessStatus, ReadinessError> {
    match (requested, cfg) {
        (Some(status), _) => status.parse(),
        (None, Some(cfg)) => cfg.min_status(),
        (None, None) => Ok(ReadinessStatus::ProductionReady),
    }
}

fn open_store(requested: Option<&Path>, cfg: Option<&ReadinessConfig>, root: &Path) -> FileStore {
    match requested {
        Some(path) => FileStore::open(path),
        None => {
            let configured = cfg.map_or_else(
                || Path::new(readiness::types::config::DEFAULT_STORE_PATH).to_path_buf(),
                ReadinessConfig::store_path,
            );
            if configured.is_absolute() {
                FileStore::open(configured)
            } else {
                FileStore::open(root.join(configured))
            }
        }
    }
}

fn score_outcome(outcome: &ScanOutcome) -> Vec<ScoredDataset> {
    let now = Utc::now();
    outcome
        .datasets
        .iter()
        .map(|dataset| score_file(&dataset.file, now))
        .collect()
}

fn score_file(file: &DatasetFile, now: chrono::DateTime<Utc>) -> ScoredDataset {
    let entity = DatasetEntity::from_file(file, now);
    let metadata = build_metadata(&entity, Some(file.metadata.columns.as_slice()));
    ScoredDataset {
        full_name: entity.full_name,
        display_name: entity.display_name,
        result: scoring::score(&metadata),
    }
}

fn ingest_all(store: &FileStore, files: &[DatasetFile]) -> Result<(), ReadinessError> {
    let now = Utc::now();
    for file in files {
        let stored = store.ingest(file, now)?;
        println!(
            "ingested {}: {} ({})",
            stored.entity.full_name, stored.entity.readiness_score, stored.entity.readiness_status
        );
    }
    println!(
        "{} dataset(s) stored in {}",
        files.len(),
        store.root().display()
    );
    Ok(())
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
