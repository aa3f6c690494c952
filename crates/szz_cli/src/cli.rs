use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "szz-data", author, version, about = "Inspect SZZ mining datasets", long_about = None)]
pub struct Args {
    /// Path to the SQLite dataset
    #[arg(long, env = "SZZ_DATA_DB")]
    pub db: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults by build mode.
    /// Only meaningful together with `--log-dir`
    #[arg(long, env = "SZZ_DATA_LOG_LEVEL", requires = "log_dir")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "SZZ_DATA_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every row of the `commits` table
    Commits {
        /// Emit a JSON array instead of one line per commit
        #[arg(long)]
        json: bool,
    },
    /// Print every row of the `commitmap` table
    CommitMap {
        /// Print a JSON object keyed by the chosen id instead of rows
        #[arg(long, value_enum)]
        index: Option<IndexKey>,

        /// Emit a JSON array instead of one line per mapping
        #[arg(long, conflicts_with = "index")]
        json: bool,
    },
    /// Print row counts for both tables
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum IndexKey {
    /// Key by current commit id
    Cid,
    /// Key by commit id before remapping
    OriginalCid,
}
