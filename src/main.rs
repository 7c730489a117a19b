//! codetasks - Collect TODO/FIXME comments into sidecar task reports
//!
//! codetasks provides:
//! - A line-oriented comment scanner for `//`, `#` and `/* */` comments
//! - TODO:/FIXME: marker extraction with source line numbers
//! - One plain-text report per source file
//! - Interactive and single-shot (batch) flows

use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod flows;
mod scanner;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Fatal errors share the colored prefix used for per-file failures.
            let _ = flows::write_error(&mut std::io::stderr(), &format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
