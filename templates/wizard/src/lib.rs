//! my-sync-app-wizard - A sync-app wizard template
//!
//! This template implements a wizard that registers a fixed application
//! path. Modify it to drive your own selection flow.

use std::path::PathBuf;
use syncman_wizard::{SyncAppWizard, WizardOutcome, suggest_app_name, validate_sync_app};

// ============================================================================
// Wizard Implementation
// ============================================================================

/// Wizard implementation
#[derive(Default)]
pub struct MyWizard;

impl SyncAppWizard for MyWizard {
    fn run(&self) -> Option<WizardOutcome> {
        // Replace this with your own selection flow: prompt the user, walk a
        // directory, talk to a picker dialog, and so on.
        let sync_app_path = PathBuf::from("/Applications/MySyncApp.app");
        let app_name = suggest_app_name(&sync_app_path)?;

        if !validate_sync_app(&sync_app_path, &app_name) {
            tracing::debug!("wizard selection incomplete, cancelling");
            return None;
        }

        Some(WizardOutcome {
            sync_app_path,
            app_name,
        })
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Entry point resolved by the plugin's wizard loader.
///
/// Ownership of the returned instance transfers to the loader.
#[unsafe(no_mangle)]
pub extern "C" fn sync_app_wizard_create() -> *mut dyn SyncAppWizard {
    Box::into_raw(Box::new(MyWizard))
}

// ============================================================================
// Tests
// ============================================================================
