//! Runtime settings for the server binary.

use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Default configuration directory.
pub const DEFAULT_CONFIG_DIR: &str = "./config/default";
/// Default location of the persisted store document.
pub const DEFAULT_STORE_PATH: &str = "./data/config.json";
/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Where to find configuration, where to persist data, and where to listen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `shifts.yaml` and `calendar.yaml`.
    pub config_dir: PathBuf,
    /// Path of the JSON store document.
    pub store_path: PathBuf,
    /// Socket address the HTTP API binds to.
    pub addr: SocketAddr,
}

impl Settings {
    /// Reads settings from `WORK_HOURS_CONFIG_DIR`, `WORK_HOURS_STORE` and
    /// `WORK_HOURS_ADDR`, falling back to defaults for unset variables.
    ///
    /// A `.env` file in the working directory, if present, supplies values
    /// for variables the process environment leaves unset.
    pub fn from_env() -> EngineResult<Self> {
        let dotenv = Path::new(".env");
        if dotenv.is_file() {
            Self::from_env_file(dotenv)
        } else {
            Self::from_lookup(|key| env::var(key).ok())
        }
    }

    /// Like [`Settings::from_env`], reading fallback values from the
    /// `.env`-format file at `path`. The process environment takes precedence
    /// and is never modified.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::from_file_and_lookup(path.as_ref(), |key| env::var(key).ok())
    }

    fn from_file_and_lookup<F>(path: &Path, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut file_vars = HashMap::new();
        for entry in dotenvy::from_path_iter(path).map_err(|e| dotenv_error(path, e))? {
            let (key, value) = entry.map_err(|e| dotenv_error(path, e))?;
            file_vars.insert(key, value);
        }
        debug!(path = %path.display(), variables = file_vars.len(), "Loaded env file");

        Self::from_lookup(|key| lookup(key).or_else(|| file_vars.get(key).cloned()))
    }

    fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_dir = lookup("WORK_HOURS_CONFIG_DIR")
            .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
        let store_path =
            lookup("WORK_HOURS_STORE").unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
        let addr = lookup("WORK_HOURS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());

        let addr = addr.parse().map_err(|_| EngineError::ConfigParseError {
            path: "WORK_HOURS_ADDR".to_string(),
            message: format!("invalid socket address: {}", addr),
        })?;

        Ok(Self {
            config_dir: PathBuf::from(config_dir),
            store_path: PathBuf::from(store_path),
            addr,
        })
    }
}

fn dotenv_error(path: &Path, error: dotenvy::Error) -> EngineError {
    if error.not_found() {
        EngineError::ConfigNotFound {
            path: path.display().to_string(),
        }
    } else {
        EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}
