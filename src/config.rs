//! Pipeline configuration loaded from the command line.
//!
//! The legacy scripts this tool replaces kept filter sets and the
//! aggregation table in module-level globals; here everything the
//! pipeline needs travels in one `PipelineConfig` passed by reference.

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

/// All knobs the extraction pipeline consults.
#[derive(Debug)]
pub struct PipelineConfig {
    /// Ordered (domain prefix, consolidated affiliation) pairs. Order is
    /// the JSON object order of the aggregation file; the resolver walks
    /// the whole table and the last matching entry wins.
    pub aggregation: Vec<(String, String)>,
    /// Email filtering mode: addresses to exclude from graphs.
    pub email_filter: Option<HashSet<String>>,
    /// File filtering mode: filenames to drop from commit file lists.
    pub file_filter: Option<HashSet<String>>,
    /// Abort on the first validation error instead of counting it.
    pub strict: bool,
}

impl PipelineConfig {
    pub fn load(
        aggregation: Option<&Path>,
        email_filter: Option<&Path>,
        file_filter: Option<&Path>,
        strict: bool,
    ) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            aggregation: match aggregation {
                Some(path) => load_aggregation_table(path)?,
                None => Vec::new(),
            },
            email_filter: email_filter.map(load_filter_list).transpose()?,
            file_filter: file_filter.map(load_filter_list).transpose()?,
            strict,
        })
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            aggregation: Vec::new(),
            email_filter: None,
            file_filter: None,
            strict: false,
        }
    }
}

/// Load the JSON aggregation table, preserving object order.
fn load_aggregation_table(path: &Path) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read aggregation table {}: {e}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| format!("invalid aggregation JSON in {}: {e}", path.display()))?;

    let serde_json::Value::Object(map) = value else {
        return Err(format!(
            "aggregation table {} must be a JSON object of prefix → name",
            path.display()
        )
        .into());
    };

    let mut table = Vec::with_capacity(map.len());
    for (prefix, name) in map {
        let serde_json::Value::String(name) = name else {
            return Err(format!(
                "aggregation table {}: value for {prefix:?} must be a string",
                path.display()
            )
            .into());
        };
        table.push((prefix, name));
    }
    Ok(table)
}

/// Load a newline-delimited filter list, skipping blank lines.
fn load_filter_list(path: &Path) -> Result<HashSet<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read filter list {}: {e}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
