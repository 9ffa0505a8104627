//! Two-level durable key-value store.
//!
//! The store holds a fixed set of categories. A category value is either a
//! scalar or an object whose keys can be addressed individually. Categories
//! are never created implicitly: writes to unknown categories or keys are
//! ignored with a warning, which keeps the stored document's schema fixed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};

/// Category holding application settings.
pub const SYSTEM_CATEGORY: &str = "System";

/// Category holding the work hours ledger.
pub const WORK_HOURS_CATEGORY: &str = "WorkHours";

/// The categories a fresh store starts with.
pub fn default_categories() -> BTreeMap<String, Value> {
    let mut categories = BTreeMap::new();
    categories.insert(
        SYSTEM_CATEGORY.to_string(),
        json!({
            "Theme": "auto",
            "MicaEnabled": true,
        }),
    );
    categories.insert(WORK_HOURS_CATEGORY.to_string(), json!({}));
    categories
}

/// A category → key → value store, optionally persisted to a JSON file.
///
/// # Example
///
/// ```
/// use work_hours_engine::store::ConfigStore;
/// use serde_json::json;
///
/// let mut store = ConfigStore::in_memory();
/// store.set("System", json!("dark"), Some("Theme")).unwrap();
/// assert_eq!(store.get("System", Some("Theme")).unwrap(), &json!("dark"));
///
/// // Unknown categories are never created.
/// store.set("Plugins", json!([]), None).unwrap();
/// assert!(store.get("Plugins", None).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    data: BTreeMap<String, Value>,
}

impl ConfigStore {
    /// A store seeded with the default categories that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: default_categories(),
        }
    }

    /// Opens the store document at `path`.
    ///
    /// A missing document is created from the default categories. Default
    /// categories absent from an existing document are added.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            info!(path = %path.display(), "Store not found, seeding default categories");
            let data = default_categories();
            persist(&path, &data)?;
            return Ok(Self {
                path: Some(path),
                data,
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
        let mut data: BTreeMap<String, Value> =
            serde_json::from_str(&content).map_err(|e| EngineError::StoreFormat {
                message: format!("{}: {}", path.display(), e),
            })?;

        let mut seeded = false;
        for (category, value) in default_categories() {
            if !data.contains_key(&category) {
                debug!(category = %category, "Seeding missing default category");
                data.insert(category, value);
                seeded = true;
            }
        }

        if seeded {
            persist(&path, &data)?;
        }
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// The backing file, if the store is persisted.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads a whole category, or one key within it.
    ///
    /// Returns `MissingConfig` when the category is absent, or when `key` is
    /// given and the category has no such key.
    pub fn get(&self, category: &str, key: Option<&str>) -> EngineResult<&Value> {
        let configs = self.data.get(category).ok_or_else(|| {
            warn!(category, "Unknown config category");
            EngineError::MissingConfig {
                category: category.to_string(),
                key: None,
            }
        })?;

        match key {
            None => Ok(configs),
            Some(key) => configs.get(key).ok_or_else(|| {
                warn!(category, key, "Unknown config key");
                EngineError::MissingConfig {
                    category: category.to_string(),
                    key: Some(key.to_string()),
                }
            }),
        }
    }

    /// Replaces a whole category, or one existing key within it, and persists.
    ///
    /// Unknown categories and keys are left alone and logged; only I/O
    /// failures are reported as errors. A failed write leaves the in-memory
    /// document unchanged, so memory and disk never disagree.
    pub fn set(&mut self, category: &str, value: Value, key: Option<&str>) -> EngineResult<()> {
        let mut candidate = self.data.clone();
        let Some(configs) = candidate.get_mut(category) else {
            warn!(category, "Ignoring write to unknown config category");
            return Ok(());
        };

        match key {
            None => *configs = value,
            Some(key) => match configs.get_mut(key) {
                Some(slot) => *slot = value,
                None => {
                    warn!(category, key, "Ignoring write to unknown config key");
                    return Ok(());
                }
            },
        }

        if let Some(path) = &self.path {
            persist(path, &candidate)?;
        }
        self.data = candidate;
        Ok(())
    }
}

/// Writes the whole document to disk through a temporary file.
fn persist(path: &Path, data: &BTreeMap<String, Value>) -> EngineResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let content = serde_json::to_string_pretty(data).map_err(|e| EngineError::StoreFormat {
        message: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content).map_err(|e| io_error(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| io_error(path, e))?;

    debug!(path = %path.display(), "Store persisted");
    Ok(())
}

fn io_error(path: &Path, error: std::io::Error) -> EngineError {
    EngineError::StoreIo {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
