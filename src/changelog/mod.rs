//! Changelog parsing: raw log text → structured commit records.
//!
//! The input is a pre-transformed repository log: each commit is a
//! header line bounded by `==` markers (`==name;email;date +HHMM==`)
//! followed by the filenames it touched. Parsing is a single in-memory
//! pass; per-block failures are counted, not thrown, unless strict
//! validation is requested.

pub mod blocks;
pub mod header;

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::affiliation;
use crate::config::PipelineConfig;
use crate::stats::{self, ProcessingStatistics};

/// One parsed commit. Immutable once created; serde round-trips the
/// sequence exactly for the `--save`/`--commits` intermediate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub timestamp: String,
    pub author_name: String,
    pub author_email: String,
    pub affiliation: String,
    pub changed_files: Vec<String>,
}

/// Extract the ordered file list from a block body. An empty line ends
/// the list; a whitespace-only line is skipped without ending it; names
/// in the exclusion set are dropped. The files-changed counter goes up
/// once per accepted filename (legacy occurrence count).
pub fn extract_files(
    lines: &[String],
    exclude: Option<&HashSet<String>>,
    stats: &mut ProcessingStatistics,
) -> Vec<String> {
    let mut files = Vec::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if let Some(exclude) = exclude
            && exclude.contains(name)
        {
            continue;
        }
        files.push(name.to_string());
        stats.files_changed += 1;
    }
    files
}

/// Parse a whole changelog into commit records, accumulating statistics.
/// In strict mode the first unparseable header aborts with an error;
/// otherwise it is counted and the block skipped.
pub fn parse_changelog(
    text: &str,
    config: &PipelineConfig,
    stats: &mut ProcessingStatistics,
) -> Result<Vec<CommitRecord>, Box<dyn Error>> {
    let mut commits = Vec::new();
    let mut blocks = blocks::Blocks::new(text);

    while let Some(block) = blocks.next() {
        stats.blocks_found += 1;
        match header::parse_header(&block.header) {
            Some(parsed) => {
                let affiliation = affiliation::resolve(
                    &parsed.email,
                    &config.aggregation,
                    config.email_filter.as_ref(),
                );
                stats.observe_timestamp(&parsed.timestamp);
                let changed_files =
                    extract_files(&block.lines, config.file_filter.as_ref(), stats);
                commits.push(CommitRecord {
                    timestamp: parsed.timestamp,
                    author_name: parsed.name,
                    author_email: parsed.email,
                    affiliation,
                    changed_files,
                });
            }
            None => {
                stats.validation_errors += 1;
                stats.blocks_skipped += 1;
                if config.strict {
                    return Err(format!(
                        "line {}: unparseable commit header: {}",
                        block.line_number, block.header
                    )
                    .into());
                }
            }
        }
    }

    stats.lines_processed = blocks.lines_processed;
    stats.unexpected_lines = blocks.unexpected_lines;
    Ok(commits)
}

/// Read and parse a changelog file.
pub fn parse_file(
    path: &Path,
    config: &PipelineConfig,
    stats: &mut ProcessingStatistics,
) -> Result<Vec<CommitRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read changelog {}: {e}", path.display()))?;
    parse_changelog(&text, config, stats)
}

/// Persist parsed commit records as JSON.
pub fn save_commits(path: &Path, commits: &[CommitRecord]) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(commits)?;
    fs::write(path, json)
        .map_err(|e| format!("cannot write commit records {}: {e}", path.display()))?;
    Ok(())
}

/// Load commit records previously written by [`save_commits`].
pub fn load_commits(path: &Path) -> Result<Vec<CommitRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read commit records {}: {e}", path.display()))?;
    let commits: Vec<CommitRecord> = serde_json::from_str(&text)
        .map_err(|e| format!("invalid commit records in {}: {e}", path.display()))?;
    Ok(commits)
}

/// Resolve the pipeline input: saved commit records win over a changelog.
pub fn load_input(
    changelog: Option<&Path>,
    saved: Option<&Path>,
    config: &PipelineConfig,
    stats: &mut ProcessingStatistics,
) -> Result<Vec<CommitRecord>, Box<dyn Error>> {
    match (saved, changelog) {
        (Some(path), _) => {
            let commits = load_commits(path)?;
            for commit in &commits {
                stats.observe_timestamp(&commit.timestamp);
            }
            Ok(commits)
        }
        (None, Some(path)) => parse_file(path, config, stats),
        (None, None) => Err("no input: pass a changelog file or --commits".into()),
    }
}

/// Entry point for `tw parse`.
pub fn run(
    changelog: &Path,
    config: &PipelineConfig,
    save: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut statistics = ProcessingStatistics::default();
    let commits = parse_file(changelog, config, &mut statistics)?;

    if let Some(out) = save {
        save_commits(out, &commits)?;
    }

    if json {
        stats::print_json_stdout(&statistics)?;
    } else {
        statistics.print_summary();
        println!(" parsed commits: {}", commits.len());
        println!(
            " distinct files: {}",
            crate::connect::aggregate(&commits).file_count()
        );
        if let Some(out) = save {
            println!(" commit records saved to {}", out.display());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
