//! Plugin archive extraction for SyncMan
//!
//! This crate materializes resources bundled in the plugin's zip archive into
//! the per-plugin resource directory, extracting only what is missing or out
//! of date.
//!
//! # Resource Directory Structure
//!
//! ```text
//! <config-dir>/plugins/
//! ├── SyncMan.zip                    # the packaged plugin archive
//! └── SyncMan_resources/
//!     ├── syncman_ui.ui              # compiled form modules
//!     ├── sync_app_wizard_ui.ui
//!     ├── libsync_app_wizard.so      # wizard library (platform naming)
//!     ├── icons/
//!     │   └── *.png
//!     └── help/
//!         ├── *.html
//!         └── images/
//! ```
//!
//! # Example
//!
//! ```no_run
//! use syncman_resources::{OverwritePolicy, ResourceExtractor, ResourceLayout, is_help_resource};
//!
//! let layout = ResourceLayout::discover("SyncMan").expect("no config directory");
//! let resources_dir = layout.ensure_resources_dir()?;
//!
//! let mut extractor = ResourceExtractor::open(layout.archive_path())?;
//! extractor.extract_matching(is_help_resource, &resources_dir, OverwritePolicy::Always)?;
//! # Ok::<(), syncman_resources::ResourceError>(())
//! ```

mod error;
mod extractor;
mod layout;

pub use error::ResourceError;
pub use extractor::{Extraction, OverwritePolicy, ResourceExtractor};
pub use layout::{
    ResourceLayout, form_member_name, is_help_resource, is_icon_resource, wizard_library_name,
};

/// Result type for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// File extension of form definition files inside the archive.
pub const FORM_EXTENSION: &str = "ui";

/// Module base name of the sync-app wizard library.
pub const WIZARD_MODULE: &str = "sync_app_wizard";
