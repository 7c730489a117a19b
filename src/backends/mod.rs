//! Backends module - File-level operations around the scanner
//!
//! This module contains:
//! - discover: Path validation and directory expansion
//! - extract: Per-file read/scan/report pipeline
//! - report: Sidecar report writing

pub mod discover;
pub mod extract;
pub mod report;
