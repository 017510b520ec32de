use std::error::Error;

use chrono::DateTime;
use serde::Serialize;

/// Timestamp format used by changelog headers: `Mon Jan  1 12:00:00 2024 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";

/// Counters accumulated over one pipeline run, reported in the final summary.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProcessingStatistics {
    pub lines_processed: usize,
    pub blocks_found: usize,
    pub blocks_skipped: usize,
    pub unexpected_lines: usize,
    /// Incremented once per accepted filename, so multi-file commits count
    /// once per file (legacy occurrence count, not a per-block count).
    pub files_changed: usize,
    pub validation_errors: usize,
    pub first_commit: Option<String>,
    pub last_commit: Option<String>,
    #[serde(skip)]
    first_epoch: Option<i64>,
    #[serde(skip)]
    last_epoch: Option<i64>,
}

impl ProcessingStatistics {
    /// Track the commit date range. Timestamps that chrono cannot parse are
    /// ignored; the raw string stays authoritative in the commit record.
    pub fn observe_timestamp(&mut self, raw: &str) {
        let Ok(when) = DateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT) else {
            return;
        };
        let epoch = when.timestamp();
        if self.first_epoch.is_none_or(|e| epoch < e) {
            self.first_epoch = Some(epoch);
            self.first_commit = Some(raw.trim().to_string());
        }
        if self.last_epoch.is_none_or(|e| epoch > e) {
            self.last_epoch = Some(epoch);
            self.last_commit = Some(raw.trim().to_string());
        }
    }

    pub fn print_summary(&self) {
        let separator = "\u{2500}".repeat(46);
        println!("Changelog Processing Summary");
        println!("{separator}");
        println!(" {:<28} {:>15}", "Lines processed", self.lines_processed);
        println!(" {:<28} {:>15}", "Blocks found", self.blocks_found);
        println!(" {:<28} {:>15}", "Blocks skipped", self.blocks_skipped);
        println!(" {:<28} {:>15}", "Unexpected lines", self.unexpected_lines);
        println!(" {:<28} {:>15}", "Files changed", self.files_changed);
        println!(" {:<28} {:>15}", "Validation errors", self.validation_errors);
        println!("{separator}");
        if let (Some(first), Some(last)) = (&self.first_commit, &self.last_commit) {
            println!(" first commit: {first}");
            println!(" last commit:  {last}");
        }
    }
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
