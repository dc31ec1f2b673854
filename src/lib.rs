pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod version;

pub use cli::{derive, derive_detailed, Derivation, DeriveOptions};
pub use domain::{MajorMinorPatch, SemVer};
pub use error::{GverError, Result};
