//! Interactive flow
//!
//! Asks how many files to process, then prompts for each path until it names
//! an existing file with a supported extension. Every accepted file is scanned
//! and gets its report before the next prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::backends::discover::validate_path;
use crate::backends::extract::process_file;
use crate::core::config::ExtractorConfig;
use crate::core::error::ExtractError;
use crate::core::model::{Kind, ResultSet};
use crate::flows::write_item_errors;

pub const COUNT_PROMPT: &str = "How many files do you want to process?";
pub const RETRY_PROMPT: &str = "Invalid file path or unsupported file type. Please try again:";

/// Read one line without its terminator; None at end of input
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Parse the file count; negative counts process nothing
pub fn parse_count(input: &str) -> Result<usize, ExtractError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map(|n| usize::try_from(n).unwrap_or(0))
        .map_err(|_| {
            tracing::debug!(input = trimmed, "file count is not an integer");
            ExtractError::InvalidCount
        })
}

/// Prompt until the user enters a valid path
fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &ExtractorConfig,
) -> anyhow::Result<PathBuf> {
    loop {
        let line = read_line(input)?.ok_or(ExtractError::InputClosed)?;
        let path = PathBuf::from(line.trim());
        match validate_path(&path, config) {
            Ok(()) => return Ok(path),
            Err(err) => {
                tracing::debug!(code = err.code(), "rejected path: {}", err);
                writeln!(out, "{}", RETRY_PROMPT)?;
                out.flush()?;
            }
        }
    }
}

/// Run the interactive flow over the given streams
///
/// Returns one item per processed file. An invalid count aborts before any
/// file is touched; per-file read/write failures are reported on `err` and
/// the loop moves on.
pub fn run_interactive<R: BufRead, W: Write, E: Write>(
    input: &mut R,
    out: &mut W,
    err: &mut E,
    config: &ExtractorConfig,
) -> anyhow::Result<ResultSet> {
    writeln!(out, "{}", COUNT_PROMPT)?;
    out.flush()?;

    let count_line = read_line(input)?.ok_or(ExtractError::InputClosed)?;
    let count = parse_count(&count_line)?;

    let mut results = ResultSet::new();
    for index in 1..=count {
        writeln!(out, "Enter the path to file {}:", index)?;
        out.flush()?;

        let path = prompt_path(input, out, config)?;
        let item = process_file(&path, config, true);

        if item.kind == Kind::Report {
            if let Some(report) = &item.report {
                writeln!(out, "Output written to: {}", report)?;
            }
        }
        write_item_errors(err, &item)?;

        results.push(item);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    struct Session {
        result: anyhow::Result<ResultSet>,
        out: String,
        err: String,
    }

    fn run_with_input(input: &str) -> Session {
        colored::control::set_override(false);
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_interactive(&mut input, &mut out, &mut err, &ExtractorConfig::default());
        Session {
            result,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3").unwrap(), 3);
        assert_eq!(parse_count(" 2 \n").unwrap(), 2);
        assert_eq!(parse_count("-1").unwrap(), 0);
        assert_eq!(parse_count("two").unwrap_err().code(), "INVALID_COUNT");
        assert_eq!(parse_count("").unwrap_err().code(), "INVALID_COUNT");
        assert!(parse_count("1.5").is_err());
    }

    #[test]
    fn test_processes_each_file() {
        let temp = tempdir().unwrap();
        let a = temp.path().join("a.py");
        let b = temp.path().join("b.js");
        fs::write(&a, "# TODO: first\n").unwrap();
        fs::write(&b, "x();\n// FIXME: second\n").unwrap();

        let session = run_with_input(&format!("2\n{}\n{}\n", a.display(), b.display()));
        let results = session.result.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results.items[0].tasks[0].description, "first");
        assert_eq!(results.items[1].tasks[0].line_number, 2);
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "first - line 1\n"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("b.txt")).unwrap(),
            "second - line 2\n"
        );
        assert!(session.out.starts_with(COUNT_PROMPT));
        assert!(session.out.contains("Enter the path to file 1:"));
        assert!(session.out.contains("Enter the path to file 2:"));
        assert!(session.out.contains("Output written to:"));
        assert!(session.err.is_empty());
    }

    #[test]
    fn test_reprompts_until_valid() {
        let temp = tempdir().unwrap();
        let notes = temp.path().join("notes.md");
        let good = temp.path().join("Main.java");
        fs::write(&notes, "// TODO: no\n").unwrap();
        fs::write(&good, "// TODO: yes\n").unwrap();

        let input = format!(
            "1\n{}\n{}\n{}\n",
            temp.path().join("missing.py").display(),
            notes.display(),
            good.display()
        );
        let session = run_with_input(&input);
        let results = session.result.unwrap();

        assert_eq!(session.out.matches(RETRY_PROMPT).count(), 2);
        assert_eq!(results.len(), 1);
        assert_eq!(results.items[0].tasks[0].description, "yes");
        assert!(!temp.path().join("notes.txt").exists());
    }

    #[test]
    fn test_invalid_count_aborts() {
        let session = run_with_input("many\n");
        let err = session.result.unwrap_err();
        let err = err.downcast_ref::<ExtractError>().unwrap();
        assert_eq!(err.code(), "INVALID_COUNT");
        assert_eq!(err.to_string(), "Invalid input. Please enter an integer number.");
        assert!(!session.out.contains("Enter the path"));
    }

    #[test]
    fn test_input_closed_while_prompting() {
        let session = run_with_input("1\n");
        let err = session.result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExtractError>().unwrap().code(),
            "INPUT_CLOSED"
        );
    }

    #[test]
    fn test_read_failure_continues_with_next_file() {
        let temp = tempdir().unwrap();
        let bad = temp.path().join("bad.py");
        let good = temp.path().join("good.py");
        fs::write(&bad, b"# TODO: \xff\n").unwrap();
        fs::write(&good, "# TODO: fine\n").unwrap();

        let session = run_with_input(&format!("2\n{}\n{}\n", bad.display(), good.display()));
        let results = session.result.unwrap();

        assert_eq!(results.error_count(), 1);
        assert_eq!(results.items[1].tasks[0].description, "fine");
        assert!(session.err.contains("error:"));
        assert!(session.err.contains("bad.py"));
        assert!(!temp.path().join("bad.txt").exists());
        assert!(temp.path().join("good.txt").exists());
    }

    #[test]
    fn test_zero_files() {
        let session = run_with_input("0\n");
        assert!(session.result.unwrap().is_empty());
    }
}
