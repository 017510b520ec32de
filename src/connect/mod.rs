//! Collaboration extraction: commits → file contributors → author pairs.
//!
//! Two developers are connected when they both touched at least one
//! common file. Pair multiplicity is intentionally discarded: the
//! developer graph is unweighted, so N shared files still make one edge.

use std::collections::{BTreeSet, HashMap};

use crate::changelog::CommitRecord;

/// Filename → ordered-insertion list of distinct contributor emails.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileContributorIndex {
    map: HashMap<String, Vec<String>>,
}

impl FileContributorIndex {
    /// Number of distinct files seen.
    pub fn file_count(&self) -> usize {
        self.map.len()
    }

    pub fn contributors(&self, file: &str) -> Option<&[String]> {
        self.map.get(file).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.map.iter()
    }
}

/// Build the inverted index. A developer editing the same file in many
/// commits is recorded once for that file.
pub fn aggregate(commits: &[CommitRecord]) -> FileContributorIndex {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for commit in commits {
        for file in &commit.changed_files {
            let contributors = map.entry(file.clone()).or_default();
            if !contributors.contains(&commit.author_email) {
                contributors.push(commit.author_email.clone());
            }
        }
    }
    FileContributorIndex { map }
}

/// One co-edit observation: an author pair plus the file that links
/// them. Ephemeral; reduced to [`UniqueConnection`]s before graphing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionWithFile {
    pub first: String,
    pub second: String,
    pub file: String,
}

/// Emit every 2-combination of each file's contributor list, for files
/// with at least two contributors. No self-pairs: the index stores
/// distinct emails per file.
pub fn connections(index: &FileContributorIndex) -> Vec<ConnectionWithFile> {
    let mut result = Vec::new();
    for (file, contributors) in index.iter() {
        if contributors.len() < 2 {
            continue;
        }
        for i in 0..contributors.len() {
            for j in i + 1..contributors.len() {
                result.push(ConnectionWithFile {
                    first: contributors[i].clone(),
                    second: contributors[j].clone(),
                    file: file.clone(),
                });
            }
        }
    }
    result
}

/// An unordered, deduplicated author pair. The two emails are stored in
/// lexicographic order so `(a,b)` and `(b,a)` collapse to one value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueConnection {
    pub a: String,
    pub b: String,
}

impl UniqueConnection {
    pub fn new(x: &str, y: &str) -> Self {
        if x <= y {
            Self {
                a: x.to_string(),
                b: y.to_string(),
            }
        } else {
            Self {
                a: y.to_string(),
                b: x.to_string(),
            }
        }
    }
}

/// Reduce co-edit observations to the unique edge set, dropping file
/// provenance and multiplicity.
pub fn dedupe(observed: &[ConnectionWithFile]) -> BTreeSet<UniqueConnection> {
    observed
        .iter()
        .map(|c| UniqueConnection::new(&c.first, &c.second))
        .collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
