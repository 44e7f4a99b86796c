//! Well-known filesystem locations for a plugin's resources.

use crate::WIZARD_MODULE;
use std::io;
use std::path::{Path, PathBuf};

/// Per-plugin filesystem layout under the host's configuration directory.
///
/// All extracted and compiled artifacts land in a single resource directory,
/// `<config-dir>/plugins/<PluginName>_resources`, next to the packaged
/// archive `<config-dir>/plugins/<PluginName>.zip`. Spaces in the plugin
/// name are replaced with underscores in the resource directory name.
#[derive(Debug, Clone)]
pub struct ResourceLayout {
    config_dir: PathBuf,
    plugin_name: String,
}

impl ResourceLayout {
    /// Create a layout rooted at an explicit configuration directory.
    pub fn new(config_dir: impl Into<PathBuf>, plugin_name: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
            plugin_name: plugin_name.into(),
        }
    }

    /// Create a layout rooted at the host's configuration directory.
    ///
    /// Returns `None` when the platform has no configuration directory.
    #[must_use]
    pub fn discover(plugin_name: impl Into<String>) -> Option<Self> {
        dirs::config_dir().map(|config_dir| Self::new(config_dir, plugin_name))
    }

    /// Name of the plugin this layout belongs to.
    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// The host configuration directory this layout is rooted at.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the packaged plugin archive.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.config_dir
            .join("plugins")
            .join(format!("{}.zip", self.plugin_name))
    }

    /// The per-plugin resource directory.
    #[must_use]
    pub fn resources_dir(&self) -> PathBuf {
        self.config_dir
            .join("plugins")
            .join(format!("{}_resources", self.plugin_name.replace(' ', "_")))
    }

    /// Directory holding extracted icon resources.
    #[must_use]
    pub fn icons_dir(&self) -> PathBuf {
        self.resources_dir().join("icons")
    }

    /// Directory holding extracted help content.
    #[must_use]
    pub fn help_dir(&self) -> PathBuf {
        self.resources_dir().join("help")
    }

    /// Path of the extracted wizard library at the resource directory root.
    #[must_use]
    pub fn wizard_library(&self) -> PathBuf {
        self.resources_dir().join(wizard_library_name())
    }

    /// Create the resource directory if it does not exist yet and return it.
    ///
    /// The directory is never torn down by this crate.
    pub fn ensure_resources_dir(&self) -> io::Result<PathBuf> {
        let dir = self.resources_dir();
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

/// Platform file name of the wizard library, e.g. `libsync_app_wizard.so`.
#[must_use]
pub fn wizard_library_name() -> String {
    format!(
        "{}{}{}",
        std::env::consts::DLL_PREFIX,
        WIZARD_MODULE,
        std::env::consts::DLL_SUFFIX
    )
}

/// Whether an archive member holds help content.
///
/// Help pages are `.html` files under `help/`; anything under `help/images/`
/// is carried along with them.
#[must_use]
pub fn is_help_resource(name: &str) -> bool {
    name.starts_with("help/") && name.ends_with(".html") || name.starts_with("help/images/")
}

/// Whether an archive member holds an icon resource.
#[must_use]
pub fn is_icon_resource(name: &str) -> bool {
    name.starts_with("icons/")
}

/// Member name of a widget's form definition, e.g. `syncman.ui`.
#[must_use]
pub fn form_member_name(widget: &str) -> String {
    format!("{widget}.{}", crate::FORM_EXTENSION)
}
