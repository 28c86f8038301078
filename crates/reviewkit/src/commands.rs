use crate::cli::{Cli, Command};
use anyhow::{Context, Result};
use reviewkit_core::{Config, ReviewConfig};
use reviewkit_diff::{create_diff_batches, process_diff_for_review, DiffOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};

pub fn execute(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    reviewkit_core::logging::init(level);

    let review = config.review.unwrap_or_default();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read diff from stdin")?;

    match cli.command {
        Command::Process {
            max_files,
            ignore,
            json,
        } => run_process(&input, &review, max_files, ignore, json),
        Command::Batch {
            batch_size,
            ignore,
            json,
        } => run_batch(&input, &review, batch_size, ignore, json),
    }
}

fn run_process(
    input: &str,
    review: &ReviewConfig,
    max_files: Option<usize>,
    extra_ignores: Vec<String>,
    json: bool,
) -> Result<()> {
    let options = build_options(review, max_files, extra_ignores);
    let result = process_diff_for_review(input, &options);

    if result.file_count == 0 {
        warn!("no files left to review after filtering; adjust ignore patterns if unexpected");
    }
    info!(
        files = result.file_count,
        ignored = result.ignored_file_count,
        trimmed = result.trimmed_file_count,
        insertions = result.insertions,
        deletions = result.deletions,
        "processed diff"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.diff);
    }

    Ok(())
}

fn run_batch(
    input: &str,
    review: &ReviewConfig,
    batch_size: Option<usize>,
    extra_ignores: Vec<String>,
    json: bool,
) -> Result<()> {
    let options = build_options(review, batch_size, extra_ignores);
    let result = create_diff_batches(input, &options);

    if result.total_file_count == 0 {
        warn!("no files left to review after filtering; adjust ignore patterns if unexpected");
    }
    info!(
        batches = result.batches.len(),
        files = result.total_file_count,
        ignored = result.ignored_file_count,
        insertions = result.insertions,
        deletions = result.deletions,
        "partitioned diff"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let total = result.batches.len();
        for (index, batch) in result.batches.iter().enumerate() {
            println!(
                "==== batch {}/{} (files={}) ====",
                index + 1,
                total,
                batch.file_count
            );
            println!("{}", batch.diff);
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(&PathBuf::from(path))
            .with_context(|| format!("failed to load config from {}", path)),
        None => Ok(Config::load()),
    }
}

/// Config supplies the defaults; per-invocation flags extend the
/// ignore list and override the bound.
fn build_options(
    review: &ReviewConfig,
    bound: Option<usize>,
    extra_ignores: Vec<String>,
) -> DiffOptions {
    let mut ignore_patterns = review.ignore_patterns.clone();
    ignore_patterns.extend(extra_ignores);

    DiffOptions {
        ignore_patterns,
        max_files: bound.or(Some(review.max_files)),
    }
}
