//! Changelog generation from a live git repository.
//!
//! Emits the `==name;email;date +HHMM==` block format that `tw parse`,
//! `tw graph` and `tw orgs` consume: one header per non-merge commit,
//! followed by the files it changed, newest first.

use std::error::Error;
use std::fs;
use std::path::Path;

use chrono::FixedOffset;
use git2::{DiffOptions, Repository, Sort};

use crate::stats::TIMESTAMP_FORMAT;

/// Entry point for `tw log`.
pub fn run(path: &Path, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let text = changelog_from_repo(path)?;
    match output {
        Some(out) => fs::write(out, &text)
            .map_err(|e| format!("cannot write changelog {}: {e}", out.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

/// Walk the repository history and render it as changelog text.
pub fn changelog_from_repo(path: &Path) -> Result<String, Box<dyn Error>> {
    let repo = Repository::discover(path)
        .map_err(|e| format!("not a git repository (or any parent): {e}"))?;

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TIME)?;

    let mut out = String::new();
    for oid in revwalk {
        let oid = oid?;
        let commit = repo.find_commit(oid)?;

        // Merge commits carry no file list of their own
        if commit.parent_count() > 1 {
            continue;
        }

        let author = commit.author();
        let name = author.name().unwrap_or("unknown");
        let email = author.email().unwrap_or("unknown");

        let time = commit.time();
        let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
            .ok_or("commit timezone offset out of range")?;
        let when = chrono::DateTime::from_timestamp(time.seconds(), 0)
            .ok_or("commit time out of range")?
            .with_timezone(&offset);
        let date = when.format(TIMESTAMP_FORMAT);

        out.push_str(&format!("=={name};{email};{date}==\n"));
        for file in changed_files(&repo, &commit)? {
            out.push_str(&file);
            out.push('\n');
        }
        out.push('\n');
    }
    Ok(out)
}

/// Files touched by a commit, via tree diff against the first parent
/// (or the empty tree for a root commit).
fn changed_files(repo: &Repository, commit: &git2::Commit) -> Result<Vec<String>, Box<dyn Error>> {
    let tree = commit.tree()?;
    let parent_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };

    let mut opts = DiffOptions::new();
    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;

    let mut files = Vec::new();
    for delta in diff.deltas() {
        if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path())
            && let Some(name) = path.to_str()
        {
            files.push(name.to_string());
        }
    }
    Ok(files)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
