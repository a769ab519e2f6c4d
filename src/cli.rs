use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search-score")]
#[command(about = "Rank JSON records against search keywords", long_about = None)]
pub struct Cli {
    /// Free-text search input; whitespace-separated terms become keywords.
    pub query: String,

    /// Path to a JSON array of candidate records.
    #[arg(short, long)]
    pub records: PathBuf,

    /// Condition table (.toml or .json). Defaults to a built-in
    /// package-metadata table.
    #[arg(short, long)]
    pub conditions: Option<PathBuf>,

    /// Maximum number of ranked records to print.
    #[arg(short = 'n', long, default_value = "25")]
    pub limit: usize,
}
