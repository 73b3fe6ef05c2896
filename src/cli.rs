use clap::{Args, Parser, Subcommand, ValueEnum};
use readiness::report::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Deterministic dataset readiness scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding readiness.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score dataset description files without storing results
    Score(ScoreCommand),
    /// Fail when any dataset is below the readiness gate
    Check(CheckCommand),
    /// Score dataset description files and store the results
    Ingest(IngestCommand),
    /// Score models from dbt artifacts and store the results
    IngestDbt(IngestDbtCommand),
    /// List stored datasets
    List(ListCommand),
    /// Show one stored dataset with its recent history
    Show(ShowCommand),
    /// Edit a stored dataset and rescore it
    Update(UpdateCommand),
    /// Print the reason codes and action keys
    Codes,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Sarif => OutputFormat::Sarif,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DetailFormat {
    Json,
    Md,
}

impl From<DetailFormat> for OutputFormat {
    fn from(format: DetailFormat) -> Self {
        match format {
            DetailFormat::Json => OutputFormat::Json,
            DetailFormat::Md => OutputFormat::Md,
        }
    }
}

#[derive(Args)]
pub struct StoreArgs {
    /// Store directory (defaults to [store] path)
    #[arg(long)]
    pub store: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    /// Lowest acceptable status (defaults to [gate] min_status)
    #[arg(long)]
    pub min_status: Option<String>,
}

#[derive(Args)]
pub struct IngestCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct IngestDbtCommand {
    #[arg(long)]
    pub manifest: PathBuf,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct ListCommand {
    /// Comma-separated statuses
    #[arg(long, value_delimiter = ',')]
    pub status: Vec<String>,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long)]
    pub query: Option<String>,
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct ShowCommand {
    pub full_name: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: DetailFormat,
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct UpdateCommand {
    pub full_name: String,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub intended_use: Option<String>,
    #[arg(long)]
    pub limitations: Option<String>,
    #[arg(long)]
    pub display_name: Option<String>,
    #[command(flatten)]
    pub store: StoreArgs,
}
