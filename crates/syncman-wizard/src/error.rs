//! Error types for wizard loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the wizard library.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The extracted wizard library is not on disk.
    #[error("Wizard library not found: {0}")]
    MissingLibrary(PathBuf),

    /// The library could not be loaded.
    #[error("Failed to load wizard library: {0}")]
    LibraryLoad(String),

    /// The library does not export the required entry point.
    #[error("Wizard entry point not found: {0}")]
    EntryPointNotFound(String),
}
