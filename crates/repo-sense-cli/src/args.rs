use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "repo-sense")]
#[command(about = "Heuristic repository-type classifier for analysis note sets")]
#[command(version)]
pub struct Cli {
    /// Directory of per-module analysis notes (.md files)
    pub notes_dir: PathBuf,

    /// Path to write the classification record (JSON)
    pub output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
