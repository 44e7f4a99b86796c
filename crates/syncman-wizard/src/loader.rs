//! Dynamic loading of the sync-app wizard.

use crate::{WizardError, WizardResult};
use libloading::{Library, Symbol};
use std::path::{Path, PathBuf};

/// Result produced by a completed wizard dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOutcome {
    /// Filesystem path of the selected sync application.
    pub sync_app_path: PathBuf,
    /// Display name the service is registered under.
    pub app_name: String,
}

/// Interface a wizard implementation provides to the host dialog.
pub trait SyncAppWizard {
    /// Run the wizard. Returns `None` when the user cancels.
    fn run(&self) -> Option<WizardOutcome>;
}

/// Entry-point symbol a wizard library must export.
const ENTRY_POINT: &[u8] = b"sync_app_wizard_create\0";

type WizardCreateFn = extern "C" fn() -> *mut dyn SyncAppWizard;

/// A loaded wizard, keeping the library alive while the wizard is in use.
pub struct LoadedWizard {
    // Declared before the library so it drops first; its vtable lives in
    // the loaded library.
    wizard: Box<dyn SyncAppWizard>,

    /// The loaded library (must outlive the wizard instance).
    _library: Library,
}

impl std::fmt::Debug for LoadedWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedWizard").finish_non_exhaustive()
    }
}

impl LoadedWizard {
    /// Run the loaded wizard.
    pub fn run(&self) -> Option<WizardOutcome> {
        self.wizard.run()
    }
}

/// Load the wizard implementation from its extracted library.
///
/// Resolves the `sync_app_wizard_create` entry point and takes ownership of
/// the wizard instance it returns.
pub fn load_wizard(library_path: &Path) -> WizardResult<LoadedWizard> {
    if !library_path.exists() {
        return Err(WizardError::MissingLibrary(library_path.to_path_buf()));
    }

    tracing::debug!(path = %library_path.display(), "loading sync-app wizard");

    // SAFETY: We're loading the library the plugin itself extracted into its
    // resource directory. The caller is responsible for the integrity of
    // that directory.
    let library = unsafe { Library::new(library_path) }
        .map_err(|e| WizardError::LibraryLoad(format!("{}: {e}", library_path.display())))?;

    let wizard = {
        // SAFETY: The entry point contract requires this exact signature.
        let create: Symbol<WizardCreateFn> = unsafe { library.get(ENTRY_POINT) }
            .map_err(|e| WizardError::EntryPointNotFound(format!("sync_app_wizard_create: {e}")))?;

        // SAFETY: The entry point returns an owned, non-null trait object.
        unsafe { Box::from_raw(create()) }
    };

    Ok(LoadedWizard {
        _library: library,
        wizard,
    })
}

/// Suggest a service name from the selected application path: the file name
/// up to its first dot, so `Dropbox.app` suggests `Dropbox`.
#[must_use]
pub fn suggest_app_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .filter(|root| !root.is_empty())
        .map(str::to_string)
}

/// Whether a wizard selection is complete: the application exists on disk
/// and a non-empty name was provided.
#[must_use]
pub fn validate_sync_app(path: &Path, app_name: &str) -> bool {
    path.exists() && !app_name.is_empty()
}
