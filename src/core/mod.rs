//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - Result model (Task, ResultItem, ResultSet)
//! - Error types
//! - Extractor configuration
//! - Rendering of result sets in different output formats
//! - Report path helpers and source file reading
//! - Logging setup

pub mod config;
pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
