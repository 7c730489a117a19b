//! Flows module - User-facing workflows
//!
//! - interactive: prompt for a file count and paths on stdin
//! - batch: process paths given on the command line

pub mod batch;
pub mod interactive;

use colored::Colorize;
use std::io::Write;

use crate::core::model::{Kind, ResultItem};

/// Print a per-file failure with a colored prefix
pub(crate) fn write_error<W: Write>(err: &mut W, message: &str) -> std::io::Result<()> {
    writeln!(err, "{} {}", "error:".red().bold(), message)
}

/// Print the errors attached to an Error item
pub(crate) fn write_item_errors<W: Write>(err: &mut W, item: &ResultItem) -> std::io::Result<()> {
    if item.kind != Kind::Error {
        return Ok(());
    }
    for error in &item.errors {
        write_error(err, &error.message)?;
    }
    Ok(())
}
