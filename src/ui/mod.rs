//! User interface module - output formats and diagnostics.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, render, OutputFormat, VersionReport,
};
