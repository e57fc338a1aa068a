use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Registry and blocklist constants
// =============================================================================

/// Default PyPI base URL
pub const DEFAULT_PYPI_REGISTRY: &str = "https://pypi.org";

/// Timeout for registry fetches in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Releases known to be broken; never attempted
pub const DEFAULT_BLOCKLIST: &[&str] = &["6.2.2", "6.2.4"];

const APP_NAME: &str = "version-fallback";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid blocklist entry: {0}")]
    InvalidBlocklist(#[from] crate::version::error::VersionError),
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub registry: RegistryConfig,
    pub installer: InstallerConfig,
    pub resolver: ResolverConfig,
}

/// Package registry configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PYPI_REGISTRY.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

/// How pip is invoked for installs and probes
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InstallerConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["-m".to_string(), "pip".to_string()],
        }
    }
}

/// Resolver policy
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    pub blocklist: Vec<String>,
    pub skip_prereleases: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            blocklist: DEFAULT_BLOCKLIST.iter().map(|s| s.to_string()).collect(),
            skip_prereleases: false,
        }
    }
}

impl Config {
    /// Read a JSON config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else the default config file if present, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = config_path();
                if path.is_file() {
                    Self::from_path(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Returns the path to the data directory for version-fallback.
/// Uses $XDG_DATA_HOME/version-fallback if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-fallback,
/// or ./version-fallback if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(format!("{APP_NAME}.log"))
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    app_dir(xdg_data_home, home_dir, ".local/share")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    app_dir(xdg_config_home, home_dir, ".config")
}

fn app_dir(xdg_dir: Option<String>, home_dir: Option<PathBuf>, home_relative: &str) -> PathBuf {
    let base = xdg_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
