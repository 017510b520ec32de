use super::*;

const SAMPLE: &str = "\
==Alice;alice@example.com;Mon Jan  1 12:00:00 2024 +0000==
file1.txt
file2.py

==Bob;bob@nokia.com;Tue Jan  2 09:00:00 2024 +0100==
file1.txt
==garbage header line==
==carol@apple.com;;Wed Jan  3 10:00:00 2024 +0000==
shared.py
";

fn parse(text: &str) -> (Vec<CommitRecord>, ProcessingStatistics) {
    let config = PipelineConfig::empty();
    let mut stats = ProcessingStatistics::default();
    let commits = parse_changelog(text, &config, &mut stats).unwrap();
    (commits, stats)
}

#[test]
fn single_block_produces_one_record() {
    let (commits, _) = parse(
        "==Alice;alice@example.com;Mon Jan  1 12:00:00 2024 +0000==\nfile1.txt\nfile2.py\n\n",
    );
    assert_eq!(commits.len(), 1);
    let c = &commits[0];
    assert_eq!(c.author_name, "Alice");
    assert_eq!(c.author_email, "alice@example.com");
    assert_eq!(c.affiliation, "example");
    assert_eq!(c.changed_files, vec!["file1.txt", "file2.py"]);
}

#[test]
fn sample_accumulates_statistics() {
    let (commits, stats) = parse(SAMPLE);
    assert_eq!(commits.len(), 3);
    assert_eq!(stats.blocks_found, 4);
    assert_eq!(stats.blocks_skipped, 1);
    assert_eq!(stats.validation_errors, 1);
    assert_eq!(stats.files_changed, 4);
    assert_eq!(
        stats.first_commit.as_deref(),
        Some("Mon Jan  1 12:00:00 2024 +0000")
    );
    assert_eq!(
        stats.last_commit.as_deref(),
        Some("Wed Jan  3 10:00:00 2024 +0000")
    );
}

#[test]
fn bare_email_block_synthesizes_name() {
    let (commits, _) = parse(SAMPLE);
    assert_eq!(commits[2].author_name, "carol");
    assert_eq!(commits[2].affiliation, "apple");
}

#[test]
fn strict_mode_aborts_on_bad_header() {
    let mut config = PipelineConfig::empty();
    config.strict = true;
    let mut stats = ProcessingStatistics::default();
    let err = parse_changelog(SAMPLE, &config, &mut stats).unwrap_err();
    assert!(
        err.to_string().contains("unparseable commit header"),
        "got: {err}"
    );
}

#[test]
fn non_strict_keeps_going_after_bad_header() {
    let (commits, stats) = parse(SAMPLE);
    // The block after the garbage header is still parsed.
    assert_eq!(commits[2].author_email, "carol@apple.com");
    assert_eq!(stats.blocks_found, 4);
}

#[test]
fn file_filter_drops_listed_names() {
    let mut config = PipelineConfig::empty();
    config.file_filter = Some(["file1.txt".to_string()].into());
    let mut stats = ProcessingStatistics::default();
    let commits = parse_changelog(SAMPLE, &config, &mut stats).unwrap();
    assert_eq!(commits[0].changed_files, vec!["file2.py"]);
    assert_eq!(commits[1].changed_files, Vec::<String>::new());
    assert_eq!(stats.files_changed, 2);
}

#[test]
fn email_filter_marks_affiliation() {
    let mut config = PipelineConfig::empty();
    config.email_filter = Some(["alice@example.com".to_string()].into());
    let mut stats = ProcessingStatistics::default();
    let commits = parse_changelog(SAMPLE, &config, &mut stats).unwrap();
    assert_eq!(commits[0].affiliation, crate::affiliation::FILTERED);
    assert_eq!(commits[1].affiliation, "nokia");
}

#[test]
fn extract_files_stops_at_empty_line() {
    let lines: Vec<String> = vec!["a.txt".into(), "".into(), "b.txt".into()];
    let mut stats = ProcessingStatistics::default();
    let files = extract_files(&lines, None, &mut stats);
    assert_eq!(files, vec!["a.txt"]);
    assert_eq!(stats.files_changed, 1);
}

#[test]
fn extract_files_skips_whitespace_only_lines() {
    let lines: Vec<String> = vec!["a.txt".into(), "   ".into(), "b.txt".into()];
    let mut stats = ProcessingStatistics::default();
    let files = extract_files(&lines, None, &mut stats);
    assert_eq!(files, vec!["a.txt", "b.txt"]);
}

#[test]
fn aggregation_table_applies_during_parse() {
    let mut config = PipelineConfig::empty();
    config.aggregation = vec![("nok".to_string(), "Nokia".to_string())];
    let mut stats = ProcessingStatistics::default();
    let commits = parse_changelog(SAMPLE, &config, &mut stats).unwrap();
    assert_eq!(commits[1].affiliation, "Nokia");
}

#[test]
fn aggregation_is_idempotent_across_runs() {
    let (first, _) = parse(SAMPLE);
    let (second, _) = parse(SAMPLE);
    assert_eq!(first, second);
}

#[test]
fn save_and_load_round_trip() {
    let (commits, _) = parse(SAMPLE);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commits.json");
    save_commits(&path, &commits).unwrap();
    let loaded = load_commits(&path).unwrap();
    assert_eq!(loaded, commits);
}

#[test]
fn load_input_prefers_saved_commits() {
    let (commits, _) = parse(SAMPLE);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commits.json");
    save_commits(&path, &commits).unwrap();

    let config = PipelineConfig::empty();
    let mut stats = ProcessingStatistics::default();
    let loaded = load_input(None, Some(&path), &config, &mut stats).unwrap();
    assert_eq!(loaded, commits);
    assert!(stats.first_commit.is_some());
}

#[test]
fn load_input_without_any_source_fails() {
    let config = PipelineConfig::empty();
    let mut stats = ProcessingStatistics::default();
    let err = load_input(None, None, &config, &mut stats).unwrap_err();
    assert!(err.to_string().contains("no input"), "got: {err}");
}

#[test]
fn parse_file_missing_input_is_fatal() {
    let config = PipelineConfig::empty();
    let mut stats = ProcessingStatistics::default();
    let err = parse_file(Path::new("/nonexistent/changelog.log"), &config, &mut stats)
        .unwrap_err();
    assert!(err.to_string().contains("cannot read changelog"), "got: {err}");
}
