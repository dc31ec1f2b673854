use crate::error::{GverError, Result};
use crate::ui::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Conventional commit with a `!` marker, or a `BREAKING CHANGE:` footer.
pub const DEFAULT_MAJOR_PATTERN: &str = r"^[\w-]+(\([\w\s-]*\))?!:\s|(?m:^BREAKING[ -]CHANGE:\s)";
/// Conventional `feat` commit, with or without scope.
pub const DEFAULT_MINOR_PATTERN: &str = r"^feat(\([\w\s-]*\))?:\s";
pub const DEFAULT_MAIN_BRANCH_PATTERN: &str = "^main$";

const LOCAL_CONFIG: &str = "gver.toml";
const USER_CONFIG: &str = ".gver.toml";

/// Represents the complete configuration for gver.
///
/// Every section is optional in the file; missing values fall back to defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub triggers: TriggersConfig,

    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_major() -> String {
    DEFAULT_MAJOR_PATTERN.to_string()
}

fn default_minor() -> String {
    DEFAULT_MINOR_PATTERN.to_string()
}

fn default_main_branch() -> String {
    DEFAULT_MAIN_BRANCH_PATTERN.to_string()
}

fn default_include_branch() -> bool {
    true
}

/// Regular expressions that drive commit classification and branch decoration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TriggersConfig {
    /// A commit message matching this bumps the major version
    #[serde(default = "default_major")]
    pub major: String,

    /// A commit message matching this (and not `major`) bumps the minor version
    #[serde(default = "default_minor")]
    pub minor: String,

    /// Branch names matching this get no prerelease label
    #[serde(default = "default_main_branch")]
    pub main_branch: String,
}

impl Default for TriggersConfig {
    fn default() -> Self {
        TriggersConfig {
            major: default_major(),
            minor: default_minor(),
            main_branch: default_main_branch(),
        }
    }
}

/// Decoration applied to the derived version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_include_branch")]
    pub include_branch: bool,

    /// Build metadata appended after `+`; empty for none
    #[serde(default)]
    pub build: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            include_branch: default_include_branch(),
            build: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Loads configuration from file or returns defaults.
///
/// Same as [load_config_from] with the current directory as search directory.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    load_config_from(config_path, Path::new("."))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gver.toml` in `search_dir` (the repository working tree for the CLI)
/// 3. `.gver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error.
pub fn load_config_from(config_path: Option<&str>, search_dir: &Path) -> Result<Config> {
    let local_path = search_dir.join(LOCAL_CONFIG);
    let (path, config_str) = if let Some(path) = config_path {
        (path.to_string(), read(Path::new(path))?)
    } else if local_path.exists() {
        (local_path.display().to_string(), read(&local_path)?)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG);
        if user_path.exists() {
            (user_path.display().to_string(), read(&user_path)?)
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path, "Loading configuration");
    toml::from_str(&config_str)
        .map_err(|e| GverError::config(format!("invalid config file '{}': {}", path, e)))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        GverError::config(format!("cannot read config file '{}': {}", path.display(), e))
    })
}
