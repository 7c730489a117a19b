//! Renderer module
//!
//! Renders the per-file ResultSet to different output formats: text, jsonl, json, md

use crate::core::model::{Kind, ResultItem, ResultSet};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
        }
    }

    /// Render to a writer, followed by a newline when there is any output
    pub fn render_to<W: Write>(&self, result_set: &ResultSet, mut writer: W) -> std::io::Result<()> {
        let output = self.render(result_set);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn render_text(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Report => {
                    let noun = if item.tasks.len() == 1 { "task" } else { "tasks" };
                    output.push_str(&format!("{}: {} {}", item.path, item.tasks.len(), noun));
                    if let Some(report) = &item.report {
                        output.push_str(&format!(" -> {}", report));
                    }
                    output.push('\n');
                    for task in &item.tasks {
                        output.push_str(&format!("  {}\n", task));
                    }
                }
                Kind::Skipped | Kind::Error => {
                    let label = if item.kind == Kind::Skipped {
                        "skipped"
                    } else {
                        "error"
                    };
                    for error in &item.errors {
                        output.push_str(&format!("{}: {}: {}\n", item.path, label, error.message));
                    }
                }
            }
        }

        output
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut reports = Vec::new();
        let mut skipped = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Report => reports.push(item),
                Kind::Skipped => skipped.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!(
                        "- `{}` **{}**: {}\n",
                        item.path, error.code, error.message
                    ));
                }
            }
            output.push('\n');
        }

        if !reports.is_empty() {
            output.push_str("## Tasks\n\n");
            for item in reports {
                self.render_item_md(&mut output, item);
            }
        }

        if !skipped.is_empty() {
            output.push_str("## Skipped\n\n");
            for item in skipped {
                output.push_str(&format!("- `{}`\n", item.path));
            }
            output.push('\n');
        }

        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        output.push_str(&format!("### `{}`", item.path));
        if let Some(report) = &item.report {
            output.push_str(&format!(" (report: `{}`)", report));
        }
        output.push_str("\n\n");

        if item.tasks.is_empty() {
            output.push_str("_No tasks found._\n");
        }
        for task in &item.tasks {
            // Multi-line block comment descriptions stay inside one list item.
            let description = task.description.replace('\n', "\n  ");
            output.push_str(&format!("- {} (line {})\n", description, task.line_number));
        }

        output.push('\n');
    }
}
