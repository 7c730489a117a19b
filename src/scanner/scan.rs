//! Line-oriented comment scanner
//!
//! Feeds lines through a small state machine that tracks whether we are
//! inside a `/* ... */` block and collects the markers of every comment it
//! sees.
//!
//! Block comments are attributed to the line *before* the one that closes
//! them. A comment on lines 5-8 reports line 7; a two-line comment reports its
//! opening line.

use crate::core::model::Task;
use crate::scanner::markers::extract_markers;
use crate::scanner::styles::{closes_block, match_comment, BLOCK_CLOSE};

/// Transient per-file scan state
#[derive(Debug, Default)]
pub struct ScanState {
    pub inside_block_comment: bool,
    pub block_comment_buffer: String,
    pub current_line_number: u32,
}

/// Incremental scanner over the lines of one file
#[derive(Debug, Default)]
pub struct Scanner {
    state: ScanState,
    tasks: Vec<Task>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the next line of the file
    pub fn process_line(&mut self, line: &str) {
        self.state.current_line_number += 1;
        let line_number = self.state.current_line_number;

        if self.state.inside_block_comment {
            self.state.block_comment_buffer.push_str(line);
            self.state.block_comment_buffer.push('\n');

            if closes_block(line) {
                let buffer = std::mem::take(&mut self.state.block_comment_buffer);
                let body = buffer.trim_end();
                let body = body.strip_suffix(BLOCK_CLOSE).unwrap_or(body);
                tracing::trace!(line = line_number, "block comment closed");

                self.tasks.extend(extract_markers(body, line_number - 1));
                self.state.inside_block_comment = false;
            }
            return;
        }

        let Some(comment) = match_comment(line) else {
            return;
        };

        if comment.opens_block() {
            tracing::trace!(line = line_number, "block comment opened");
            self.state.inside_block_comment = true;
            self.state.block_comment_buffer.push_str(comment.text);
            self.state.block_comment_buffer.push('\n');
        } else {
            tracing::trace!(line = line_number, style = comment.style.name, "comment");
            self.tasks.extend(extract_markers(comment.body(), line_number));
        }
    }

    /// Whether the scanner is currently inside a block comment
    #[cfg(test)]
    pub fn is_in_block_comment(&self) -> bool {
        self.state.inside_block_comment
    }

    /// Finish the scan and return the collected tasks
    ///
    /// A block comment still open at end of input is dropped.
    pub fn finish(self) -> Vec<Task> {
        if self.state.inside_block_comment {
            tracing::debug!(
                line = self.state.current_line_number,
                "unterminated block comment at end of input; its markers are discarded"
            );
        }
        self.tasks
    }
}

/// Scan a sequence of lines and return their tasks in encounter order
pub fn scan<I, S>(lines: I) -> Vec<Task>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new();
    for line in lines {
        scanner.process_line(line.as_ref());
    }
    scanner.finish()
}
