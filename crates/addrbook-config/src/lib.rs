use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use addrbook_core::rules::{validate_window_days, DEFAULT_WINDOW_DAYS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "addrbook";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub upcoming_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid upcoming_days value: {0}")]
    InvalidUpcomingDays(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    upcoming_days: Option<i64>,
}

/// Loads the config file. An explicit path must exist; the default location
/// falls back to built-in defaults when absent or unresolvable.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    match config_path {
        Some(path) => {
            let path = non_empty(path)?;
            if !path.exists() {
                return Err(ConfigError::MissingConfigFile(path));
            }
            read_config(&path)
        }
        None => match default_config_path() {
            Ok(path) if path.exists() => read_config(&path),
            Ok(_) | Err(ConfigError::MissingHomeDir | ConfigError::InvalidConfigPath(_)) => {
                Ok(AppConfig::default())
            }
            Err(err) => Err(err),
        },
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => non_empty(path),
        None => default_config_path(),
    }
}

fn default_config_path() -> Result<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => non_empty(PathBuf::from(dir))?,
        None => dirs::home_dir()
            .ok_or(ConfigError::MissingHomeDir)?
            .join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

fn non_empty(path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidConfigPath(path));
    }
    Ok(path)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let read_error = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };
    check_permissions(path, fs::metadata(path).map_err(read_error)?)?;
    let contents = fs::read_to_string(path).map_err(read_error)?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let upcoming_days = match parsed.upcoming_days {
        Some(days) => {
            validate_window_days(days).map_err(|_| ConfigError::InvalidUpcomingDays(days))?
        }
        None => DEFAULT_WINDOW_DAYS,
    };
    Ok(AppConfig { upcoming_days })
}

/// Group or other access bits on the file are refused.
#[cfg(unix)]
fn check_permissions(path: &Path, metadata: fs::Metadata) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if metadata.permissions().mode() & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path, _metadata: fs::Metadata) -> Result<()> {
    Ok(())
}
