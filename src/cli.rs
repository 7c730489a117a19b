//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backends::discover::WalkOptions;
use crate::core::config::ExtractorConfig;
use crate::core::file_reader::EncodingStrategy;
use crate::core::logging::init_logging;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::batch::{run_batch, BatchOptions};
use crate::flows::interactive::run_interactive;

/// codetasks - collect TODO/FIXME comments into sidecar task reports.
#[derive(Parser, Debug)]
#[command(name = "codetasks")]
#[command(
    author,
    version,
    about,
    long_about = r#"codetasks scans source comments (//, # and /* */) for TODO: and FIXME:
markers and writes one report per source file, next to it, with one line per task:

    <description> - line <n>

Run without a subcommand to be prompted for files interactively.

Examples:
    codetasks
    codetasks scan src/Main.java tools/build.py
    codetasks scan src --format jsonl
    codetasks --extensions rs,go scan crates
"#
)]
pub struct Cli {
    /// Summary output format for `scan` (text/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the format of the summary printed to stdout by `scan`.\n\n\
Supported values:\n\
- text (default)\n\
- jsonl\n\
- json\n\
- md (markdown)\n\n\
Report files are always plain text."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (only errors on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG, when set, takes precedence."
    )]
    pub verbose: bool,

    /// Supported source extensions (comma-separated).
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        env = "CODETASKS_EXTENSIONS",
        value_name = "EXTS",
        long_help = "Comma-separated list of source file extensions to scan, compared\n\
case-insensitively. Defaults to java,py,js.\n\n\
Example: --extensions java,py,js,ts"
    )]
    pub extensions: Vec<String>,

    /// Extension used for report files.
    #[arg(
        long = "report-ext",
        global = true,
        env = "CODETASKS_REPORT_EXT",
        value_name = "EXT",
        long_help = "Extension that replaces the source extension to form the report path.\n\
Defaults to txt, so src/App.java is reported in src/App.txt."
    )]
    pub report_ext: Option<String>,

    /// Decode non-UTF-8 files lossily instead of failing them.
    #[arg(long, global = true)]
    pub lossy: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for a number of files and their paths (the default).
    #[command(
        long_about = "Ask how many files to process, then prompt for each path until it\n\
names an existing file with a supported extension. Each file is scanned and its\n\
report written before the next prompt."
    )]
    Interactive,

    /// Scan the given files and directories in one shot.
    #[command(
        long_about = "Scan files (and supported files below directories) and write a report\n\
next to each. Unsupported or missing files are skipped with a message.\n\n\
Examples:\n\
  codetasks scan src/Main.java\n\
  codetasks scan src tests --no-write --format md\n"
    )]
    Scan {
        /// Files or directories to scan.
        #[arg(value_name = "PATH", required = true, num_args = 1..)]
        paths: Vec<PathBuf>,

        /// Include hidden files/directories when walking directories.
        #[arg(long)]
        hidden: bool,

        /// Disable .gitignore and other ignore rules when walking directories.
        #[arg(long)]
        no_ignore: bool,

        /// Print the summary without writing report files.
        #[arg(long)]
        no_write: bool,
    },

    /// List the supported extensions and the report extension.
    Extensions,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.quiet, !cli.no_color);

    let format: OutputFormat = cli.format.parse().unwrap_or_else(|e: String| {
        tracing::warn!("{}; falling back to text", e);
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let encoding = if cli.lossy {
        EncodingStrategy::Lossy
    } else {
        EncodingStrategy::Strict
    };
    let config = ExtractorConfig::new(&cli.extensions, cli.report_ext.as_deref(), encoding);
    tracing::debug!(?config, "configuration");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut out = std::io::stdout().lock();
            let mut err = std::io::stderr();
            run_interactive(&mut input, &mut out, &mut err, &config)?;
            Ok(())
        }

        Commands::Scan {
            paths,
            hidden,
            no_ignore,
            no_write,
        } => {
            let options = BatchOptions {
                walk: WalkOptions { hidden, no_ignore },
                no_write,
                quiet: cli.quiet,
            };
            run_batch(&paths, &config, &options, render_config)
        }

        Commands::Extensions => {
            for ext in &config.extensions {
                println!("{}", ext);
            }
            println!("report: {}", config.report_extension);
            Ok(())
        }
    }
}
