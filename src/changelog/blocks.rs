//! Block splitting: cut a raw changelog into header + filename blocks.

/// One changelog block: a header line's content plus the candidate
/// filename lines that follow it, up to the next header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Header text with the `==` markers stripped.
    pub header: String,
    /// Candidate filename lines, trimmed.
    pub lines: Vec<String>,
    /// 1-based line number of the header in the input.
    pub line_number: usize,
}

/// Lazy iterator over the blocks of a changelog. Also counts lines
/// processed and unexpected (dropped) lines; read the counters after
/// exhausting the iterator.
pub struct Blocks<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<Block>,
    pub lines_processed: usize,
    pub unexpected_lines: usize,
}

impl<'a> Blocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            current: None,
            lines_processed: 0,
            unexpected_lines: 0,
        }
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        for (idx, raw) in self.lines.by_ref() {
            self.lines_processed += 1;
            let line = raw.trim();
            // Blank lines neither start nor terminate a block.
            if line.is_empty() {
                continue;
            }
            if let Some(header) = header_content(line) {
                let finished = self.current.take();
                self.current = Some(Block {
                    header: header.to_string(),
                    lines: Vec::new(),
                    line_number: idx + 1,
                });
                if finished.is_some() {
                    return finished;
                }
            } else if let Some(block) = &mut self.current {
                if is_filename_candidate(line) {
                    block.lines.push(line.to_string());
                } else {
                    self.unexpected_lines += 1;
                    eprintln!("warning: line {}: unexpected line dropped: {line}", idx + 1);
                }
            } else {
                // Content before the first header has no block to join.
                self.unexpected_lines += 1;
                eprintln!("warning: line {}: content before first header dropped", idx + 1);
            }
        }
        // Trailing block with no terminating header.
        self.current.take()
    }
}

/// A header is a line bounded by the `==` marker pair. Returns the text
/// between the markers, which may be empty (that is a header whose parse
/// will fail, not a plain line).
fn header_content(line: &str) -> Option<&str> {
    if line.len() >= 4 && line.starts_with("==") && line.ends_with("==") {
        Some(line[2..line.len() - 2].trim())
    } else {
        None
    }
}

/// A filename candidate contains a path separator or a dot, or is at
/// least 3 non-whitespace characters long.
fn is_filename_candidate(line: &str) -> bool {
    line.contains('/')
        || line.contains('.')
        || line.chars().filter(|c| !c.is_whitespace()).count() >= 3
}

#[cfg(test)]
#[path = "blocks_test.rs"]
mod tests;
