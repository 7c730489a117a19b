//! Extractor configuration
//!
//! Built from CLI flags (which also read `CODETASKS_*` environment variables).

use std::path::Path;

use crate::core::file_reader::EncodingStrategy;

/// Extensions scanned when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["java", "py", "js"];

/// Extension given to sidecar reports
pub const DEFAULT_REPORT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Lowercase allow-list, without leading dots
    pub extensions: Vec<String>,

    /// Extension that replaces the source extension for reports
    pub report_extension: String,

    pub encoding: EncodingStrategy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            report_extension: DEFAULT_REPORT_EXTENSION.to_string(),
            encoding: EncodingStrategy::default(),
        }
    }
}

impl ExtractorConfig {
    /// Create a config, normalizing user-supplied extensions
    ///
    /// An empty (or all-blank) extension list falls back to the defaults.
    pub fn new(
        extensions: &[String],
        report_extension: Option<&str>,
        encoding: EncodingStrategy,
    ) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions.iter().filter_map(|e| normalize_extension(e)) {
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        let mut config = Self {
            encoding,
            ..Self::default()
        };
        if !normalized.is_empty() {
            config.extensions = normalized;
        }
        if let Some(ext) = report_extension.and_then(normalize_extension) {
            config.report_extension = ext;
        }
        config
    }

    /// Whether the path's extension is in the allow-list (case-insensitive)
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|s| s.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().trim_start_matches('.').to_ascii_lowercase();
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = ExtractorConfig::default();
        assert!(config.is_supported(Path::new("Main.java")));
        assert!(config.is_supported(Path::new("tool.py")));
        assert!(config.is_supported(Path::new("app.js")));
        assert!(!config.is_supported(Path::new("README.md")));
        assert!(!config.is_supported(Path::new("Makefile")));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let config = ExtractorConfig::default();
        assert!(config.is_supported(Path::new("LEGACY.JAVA")));
        assert!(config.is_supported(Path::new("script.Py")));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let config = ExtractorConfig::default();
        assert!(!config.is_supported(Path::new(".py")));
        assert!(!config.is_supported(Path::new("dir/.js")));
    }

    #[test]
    fn test_custom_extensions_are_normalized() {
        let config = ExtractorConfig::new(
            &[".RS".to_string(), " go ".to_string(), "rs".to_string()],
            Some(".TODO"),
            EncodingStrategy::Lossy,
        );
        assert_eq!(config.extensions, vec!["rs", "go"]);
        assert_eq!(config.report_extension, "todo");
        assert_eq!(config.encoding, EncodingStrategy::Lossy);
        assert!(config.is_supported(Path::new("lib.rs")));
        assert!(!config.is_supported(Path::new("Main.java")));
    }

    #[test]
    fn test_blank_extensions_fall_back_to_defaults() {
        let config = ExtractorConfig::new(
            &["".to_string(), " . ".to_string()],
            Some(""),
            EncodingStrategy::Strict,
        );
        assert_eq!(config, ExtractorConfig::default());
    }
}
