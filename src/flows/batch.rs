//! Batch flow
//!
//! Processes the paths given on the command line in one shot. Bad arguments
//! are skipped with a message instead of being re-prompted.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

use crate::backends::discover::{collect_files, WalkOptions};
use crate::backends::extract::process_file;
use crate::core::config::ExtractorConfig;
use crate::core::model::{Kind, ResultItem, ResultSet};
use crate::core::paths::normalize_path;
use crate::core::render::{RenderConfig, Renderer};
use crate::flows::write_item_errors;

/// Options for a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub walk: WalkOptions,
    /// Print tasks without writing report files
    pub no_write: bool,
    /// Suppress per-file status lines (errors are still shown)
    pub quiet: bool,
}

/// Reason shown in the skip message
fn skip_reason(item: &ResultItem) -> &'static str {
    match item.errors.first().map(|e| e.code.as_str()) {
        Some("UNSUPPORTED_TYPE") => "Unsupported file type",
        Some("NOT_FOUND") => "File not found",
        _ => "Skipped",
    }
}

/// Process all paths, writing status lines to `status`
pub fn process_paths<S: Write>(
    paths: &[PathBuf],
    config: &ExtractorConfig,
    options: &BatchOptions,
    status: &mut S,
) -> Result<ResultSet> {
    let mut results = ResultSet::new();

    for selection in collect_files(paths, config, options.walk) {
        let item = match selection {
            Ok(path) => process_file(&path, config, !options.no_write),
            Err(err) => {
                let path = err.path().map(normalize_path).unwrap_or_default();
                ResultItem::skipped(path, err.to_report_error())
            }
        };

        match item.kind {
            Kind::Report if !options.quiet => {
                if let Some(report) = &item.report {
                    writeln!(status, "Output written to: {}", report)?;
                }
            }
            Kind::Skipped if !options.quiet => {
                writeln!(status, "Skipping file: {} ({})", item.path, skip_reason(&item))?;
            }
            _ => {}
        }
        write_item_errors(status, &item)?;

        results.push(item);
    }

    Ok(results)
}

/// Run the scan command: process paths and print the rendered summary
pub fn run_batch(
    paths: &[PathBuf],
    config: &ExtractorConfig,
    options: &BatchOptions,
    render_config: RenderConfig,
) -> Result<()> {
    let mut stderr = std::io::stderr().lock();
    let results = process_paths(paths, config, options, &mut stderr)?;

    if results.is_empty() && !options.quiet {
        writeln!(stderr, "No supported files found.")?;
    }
    tracing::info!(
        files = results.len(),
        tasks = results.task_count(),
        errors = results.error_count(),
        "batch finished"
    );

    let renderer = Renderer::with_config(render_config);
    renderer.render_to(&results, std::io::stdout().lock())?;

    Ok(())
}
