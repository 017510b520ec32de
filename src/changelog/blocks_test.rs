use super::*;

fn split(text: &str) -> (Vec<Block>, usize, usize) {
    let mut blocks = Blocks::new(text);
    let mut out = Vec::new();
    while let Some(b) = blocks.next() {
        out.push(b);
    }
    (out, blocks.lines_processed, blocks.unexpected_lines)
}

#[test]
fn single_block_with_files() {
    let (blocks, lines, unexpected) =
        split("==Alice;alice@example.com;Mon Jan  1 12:00:00 2024 +0000==\nfile1.txt\nfile2.py\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].header,
        "Alice;alice@example.com;Mon Jan  1 12:00:00 2024 +0000"
    );
    assert_eq!(blocks[0].lines, vec!["file1.txt", "file2.py"]);
    assert_eq!(blocks[0].line_number, 1);
    assert_eq!(lines, 3);
    assert_eq!(unexpected, 0);
}

#[test]
fn header_terminates_previous_block() {
    let (blocks, _, _) = split("==h1==\na.txt\n==h2==\nb.txt\n");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].header, "h1");
    assert_eq!(blocks[0].lines, vec!["a.txt"]);
    assert_eq!(blocks[1].header, "h2");
    assert_eq!(blocks[1].lines, vec!["b.txt"]);
    assert_eq!(blocks[1].line_number, 3);
}

#[test]
fn trailing_block_without_terminator_is_emitted() {
    let (blocks, _, _) = split("==only==\nlast.txt");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].lines, vec!["last.txt"]);
}

#[test]
fn blank_lines_do_not_terminate_blocks() {
    let (blocks, lines, _) = split("==h==\na.txt\n\n\nb.txt\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].lines, vec!["a.txt", "b.txt"]);
    assert_eq!(lines, 5);
}

#[test]
fn short_opaque_lines_are_dropped() {
    // "ab" has no separator, no dot, and under 3 non-whitespace chars.
    let (blocks, _, unexpected) = split("==h==\nab\nsrc/x.rs\n");
    assert_eq!(blocks[0].lines, vec!["src/x.rs"]);
    assert_eq!(unexpected, 1);
}

#[test]
fn filename_candidate_rules() {
    assert!(is_filename_candidate("a/b"));
    assert!(is_filename_candidate("x.c"));
    assert!(is_filename_candidate("Makefile"));
    assert!(is_filename_candidate("abc"));
    assert!(!is_filename_candidate("ab"));
    assert!(!is_filename_candidate("-"));
}

#[test]
fn content_before_first_header_is_dropped() {
    let (blocks, _, unexpected) = split("stray.txt\n==h==\nreal.txt\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].lines, vec!["real.txt"]);
    assert_eq!(unexpected, 1);
}

#[test]
fn empty_input_yields_no_blocks() {
    let (blocks, lines, _) = split("");
    assert!(blocks.is_empty());
    assert_eq!(lines, 0);
}

#[test]
fn header_markers_are_stripped_and_trimmed() {
    let (blocks, _, _) = split("==  spaced  ==\n");
    assert_eq!(blocks[0].header, "spaced");
}

#[test]
fn empty_header_content_still_forms_a_block() {
    let (blocks, _, _) = split("====\nf.txt\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].header, "");
}
