//! syncman-wizard - Sync-app wizard loading for SyncMan
//!
//! The wizard dialog that registers a new synchronization application ships
//! inside the plugin archive as a dynamic library and is extracted into the
//! resource directory during initialization. This crate loads that library
//! from its well-known path and resolves the entry point producing the
//! wizard implementation, plus the pure helpers the wizard uses to suggest
//! and validate a service registration.

mod error;
mod loader;

pub use error::WizardError;
pub use loader::{
    LoadedWizard, SyncAppWizard, WizardOutcome, load_wizard, suggest_app_name, validate_sync_app,
};

/// Result type for wizard operations.
pub type WizardResult<T> = Result<T, WizardError>;
