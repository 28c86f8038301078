use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "reviewkit",
    about = "Prepare git diffs for AI code review",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify configuration file path
    #[arg(long, env = "REVIEWKIT_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log level
    #[arg(long, env = "REVIEWKIT_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Produce one review diff, trimmed to the largest files when over the cap
    Process {
        /// Maximum number of files to keep (0 = unbounded)
        #[arg(long)]
        max_files: Option<usize>,

        /// Additional glob pattern to ignore (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,

        /// Emit the full result record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Partition the diff into bounded batches for incremental review
    Batch {
        /// Files per batch (0 = single batch)
        #[arg(long)]
        batch_size: Option<usize>,

        /// Additional glob pattern to ignore (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,

        /// Emit the full result record as JSON
        #[arg(long)]
        json: bool,
    },
}
