//! Plugin preference storage

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for preference operations
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors that can occur while reading or writing preferences.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON-backed plugin preferences.
///
/// Preferences live in a single JSON object persisted at
/// `<config-dir>/plugins/<PluginName>.json`. Reads are served from the
/// in-memory copy; [`Prefs::save`] writes the object back to disk.
///
/// Besides the generic [`get`](Prefs::get)/[`set`](Prefs::set) accessors,
/// typed helpers cover the keys the plugin actually stores: the debug flag,
/// the selected sync service, and the registered name -> path service map.
#[derive(Debug)]
pub struct Prefs {
    path: PathBuf,
    data: serde_json::Value,
}

impl Prefs {
    /// Open the preferences file for a plugin, creating an empty preference
    /// set when no file exists yet.
    pub fn open(config_dir: &Path, plugin_name: &str) -> PrefsResult<Self> {
        let path = config_dir
            .join("plugins")
            .join(format!("{plugin_name}.json"));

        let data = if path.exists() {
            serde_json::from_slice(&fs::read(&path)?)?
        } else {
            serde_json::json!({})
        };

        Ok(Self { path, data })
    }

    /// Path of the backing preferences file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a typed value from the preference data
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Set a value in the preference data
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> PrefsResult<()> {
        // Ensure data is an object
        if !self.data.is_object() {
            self.data = serde_json::json!({});
        }
        // Now we can safely get the object
        #[allow(clippy::unwrap_used)] // Safe: we just set data to an empty object above
        let obj = self.data.as_object_mut().unwrap();
        obj.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Write the preferences back to disk, creating parent directories as
    /// needed.
    pub fn save(&self) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&self.data)?)?;
        Ok(())
    }

    /// Whether verbose plugin diagnostics are enabled.
    #[must_use]
    pub fn debug_plugin(&self) -> bool {
        self.get("debug_plugin").unwrap_or(false)
    }

    /// Enable or disable verbose plugin diagnostics.
    pub fn set_debug_plugin(&mut self, enabled: bool) -> PrefsResult<()> {
        self.set("debug_plugin", enabled)
    }

    /// Name of the currently selected sync service, if any.
    #[must_use]
    pub fn selected_sync_app(&self) -> Option<String> {
        self.get::<String>("sync_app").filter(|name| !name.is_empty())
    }

    /// Select a sync service by name.
    pub fn set_selected_sync_app(&mut self, name: &str) -> PrefsResult<()> {
        self.set("sync_app", name)
    }

    /// The registered sync services as a name -> filesystem path map.
    #[must_use]
    pub fn sync_apps(&self) -> BTreeMap<String, String> {
        self.get("sync_apps").unwrap_or_default()
    }

    /// Register a sync service under `name`, replacing any previous entry.
    pub fn add_sync_app(&mut self, name: &str, path: &str) -> PrefsResult<()> {
        let mut apps = self.sync_apps();
        apps.insert(name.to_string(), path.to_string());
        self.set("sync_apps", apps)
    }

    /// Remove a registered sync service. Returns `true` when an entry was
    /// actually removed.
    pub fn forget_sync_app(&mut self, name: &str) -> PrefsResult<bool> {
        let mut apps = self.sync_apps();
        let removed = apps.remove(name).is_some();
        self.set("sync_apps", apps)?;
        Ok(removed)
    }

    /// Registered service names, sorted case-insensitively for display.
    #[must_use]
    pub fn sync_app_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sync_apps().into_keys().collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }
}
