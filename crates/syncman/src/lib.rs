//! # syncman
//!
//! Plugin runtime for registering an external synchronization application
//! with a desktop e-book manager.
//!
//! The plugin ships as a zip archive containing Qt Designer form
//! definitions, icons, help content, and the sync-app wizard library. On
//! activation the runtime extracts what is missing or stale into the
//! per-plugin resource directory, compiles the form definitions into the
//! modules the host loads by name, and publishes icon resources for the
//! dialogs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use syncman::{APP_NAME, PLUGIN_NAME};
//! use syncman::{IconRegistry, PluginSetup, Prefs, ResourceLayout, UicProcess, init_logging};
//!
//! let layout = ResourceLayout::discover(PLUGIN_NAME).expect("no config directory");
//! let prefs = Prefs::open(layout.config_dir(), PLUGIN_NAME).expect("unreadable preferences");
//! init_logging(prefs.debug_plugin());
//!
//! let registry = IconRegistry::new();
//! let setup = PluginSetup::new(layout, registry.clone(), UicProcess::new("pyuic4"), APP_NAME);
//! let compiled_forms = setup.initialize()?;
//!
//! // Dialogs later resolve their compiled form module by window title.
//! assert!(compiled_forms.contains_key("SyncMan"));
//! # Ok::<(), syncman::SetupError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`syncman_core`] - Preferences and the shared icon registry
//! - [`syncman_resources`] - Archive extraction and resource layout
//! - [`syncman_forms`] - Runtime form compilation
//! - [`syncman_logging`] - Diagnostic logging
//! - [`syncman_wizard`] - Sync-app wizard loading

mod setup;

pub use setup::{PluginSetup, SetupError, SetupResult};

// Re-export core types
pub use syncman_core::{IconRegistry, Prefs, PrefsError, PrefsResult};

// Re-export resource extraction
pub use syncman_resources::{
    Extraction, OverwritePolicy, ResourceError, ResourceExtractor, ResourceLayout, ResourceResult,
};

// Re-export form compilation
pub use syncman_forms::{FnCodegen, FormCompiler, FormError, FormResult, UiCodegen, UicProcess};

// Re-export logging
pub use syncman_logging::{LogSink, Logger, init_logging};

// Re-export wizard loading
pub use syncman_wizard::{
    LoadedWizard, SyncAppWizard, WizardError, WizardOutcome, WizardResult, load_wizard,
    suggest_app_name, validate_sync_app,
};

/// Name the plugin registers under in the host application.
pub const PLUGIN_NAME: &str = "SyncMan";

/// Literal name of the host application, substituted for the generator's
/// application-name placeholder.
pub const APP_NAME: &str = "calibre";

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        APP_NAME, IconRegistry, Logger, PLUGIN_NAME, PluginSetup, Prefs, ResourceLayout,
        SetupError, SetupResult, UicProcess, init_logging,
    };
}
