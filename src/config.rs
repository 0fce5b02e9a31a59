//! Policy configuration loading
//!
//! The effective policy comes from the first source found:
//!
//! 1. an explicit `--config <path>` (`.json` files are parsed as JSON, anything else as TOML)
//! 2. `.branchlint.toml` at the project root
//! 3. `<config_dir>/branchlint/config.toml`
//! 4. the built-in defaults
//!
//! Keys present in the file replace the defaults one by one.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::core::models::{Policy, PolicyError, PolicyOverrides};
use crate::paths;

/// Errors raised while loading the policy configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// TOML config file could not be parsed
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// JSON config file could not be parsed
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// The merged policy is invalid
    #[error("invalid policy: {0}")]
    Policy(#[from] PolicyError),
}

/// Config file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (default)
    Toml,
    /// JSON
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Where the effective policy came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from a file
    File(PathBuf),
    /// No file found; built-in defaults
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// The effective policy and its origin
#[derive(Debug, Clone)]
pub struct LoadedPolicy {
    /// Policy to evaluate with
    pub policy: Policy,
    /// Where it came from
    pub source: ConfigSource,
}

/// Parse overrides from config file content
///
/// # Errors
///
/// Returns an error if `content` is not valid for `format`. `path` is only
/// used in the error message.
pub fn parse_overrides(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<PolicyOverrides, ConfigError> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load overrides from a config file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<PolicyOverrides, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_overrides(&content, ConfigFormat::from_path(path), path)
}

/// Find the config file to use, if any
///
/// An explicit path is returned as-is, even if it does not exist, so that a
/// typo surfaces as a read error instead of silently falling back.
#[must_use]
pub fn discover(explicit: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = paths::project_config(project_root);
    if project.is_file() {
        return Some(project);
    }

    paths::global_config().filter(|global| global.is_file())
}

/// Load the effective policy
///
/// # Errors
///
/// Returns an error if the chosen config file cannot be read or parsed, or if
/// the merged policy is invalid.
pub fn load_policy(explicit: Option<&Path>, project_root: &Path) -> Result<LoadedPolicy, ConfigError> {
    let Some(path) = discover(explicit, project_root) else {
        debug!("No config file found, using built-in defaults");
        return Ok(LoadedPolicy {
            policy: Policy::default(),
            source: ConfigSource::Defaults,
        });
    };

    debug!("Loading config from {}", path.display());
    let overrides = load_file(&path)?;
    let policy = Policy::from_overrides(overrides)?;

    Ok(LoadedPolicy {
        policy,
        source: ConfigSource::File(path),
    })
}

/// Render `policy` as a complete, commented TOML config file
///
/// # Errors
///
/// Returns an error if TOML serialization fails.
pub fn render_toml(policy: &Policy) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(&PolicyOverrides::from(policy))?;
    Ok(format!(
        "# branchlint policy\n\
         #\n\
         # Every key is optional; a key present here replaces the built-in default.\n\
         # Templates use %s placeholders, filled in order.\n\
         \n\
         {body}"
    ))
}
