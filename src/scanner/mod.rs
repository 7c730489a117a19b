//! Scanner module - Find TODO/FIXME markers in source comments
//!
//! Comment styles: `// ...`, `# ...`, `/* ... */` (possibly multi-line).
//! Marker format: `TODO: description` or `FIXME: description` (any case).

pub mod markers;
pub mod scan;
pub mod styles;

pub use scan::scan;
