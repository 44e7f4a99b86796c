//! Plugin initialization.
//!
//! Runs once when the host activates the plugin: bundled resources are
//! pulled out of the plugin archive into the per-plugin resource directory,
//! the icon resources are published for later dialog use, and any extracted
//! form definitions are compiled into the modules dialogs load by name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use syncman_core::IconRegistry;
use syncman_forms::{COMPILED_STEM_SUFFIX, FORM_EXTENSION, FormCompiler, FormError, UiCodegen};
use syncman_resources::{
    OverwritePolicy, ResourceError, ResourceExtractor, ResourceLayout, form_member_name,
    is_help_resource, is_icon_resource, wizard_library_name,
};
use thiserror::Error;

/// Widgets whose form definitions ship in the plugin archive.
const WIDGETS: [&str; 2] = ["syncman", "sync_app_wizard"];

/// Icon members published to the shared registry. The first icon is the
/// plugin icon, referenced by position; the rest are referenced by name.
const PLUGIN_ICONS: [&str; 2] = ["images/disabled.png", "images/enabled.png"];

/// Result type alias for plugin initialization.
pub type SetupResult<T> = Result<T, SetupError>;

/// Errors that abort plugin initialization.
#[derive(Debug, Error)]
pub enum SetupError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive could not be read or a required member is missing.
    #[error("Resource extraction failed: {0}")]
    Resource(#[from] ResourceError),

    /// Form compilation failed.
    #[error("Form compilation failed: {0}")]
    Form(#[from] FormError),
}

/// One-shot initialization of the plugin's on-disk resources.
///
/// The host constructs this with the resource layout, a handle to the shared
/// icon registry, and the form code generator, then calls
/// [`initialize`](PluginSetup::initialize) exactly once during startup on
/// the GUI thread.
pub struct PluginSetup<C> {
    layout: ResourceLayout,
    registry: IconRegistry,
    compiler: FormCompiler<C>,
}

impl<C: UiCodegen> PluginSetup<C> {
    /// Create the setup pipeline.
    pub fn new(
        layout: ResourceLayout,
        registry: IconRegistry,
        codegen: C,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            layout,
            registry,
            compiler: FormCompiler::new(codegen, app_name),
        }
    }

    /// Materialize every bundled resource and compile the extracted forms.
    ///
    /// Returns the window-title -> compiled-module map dialogs use to find
    /// their form implementations. Any failure aborts plugin setup; the
    /// error is logged with its full chain before being returned.
    pub fn initialize(&self) -> SetupResult<HashMap<String, String>> {
        let resources_dir = self.layout.ensure_resources_dir()?;
        let mut extractor = ResourceExtractor::open(self.layout.archive_path())?;

        self.inflate_help_resources(&mut extractor, &resources_dir)?;
        self.inflate_icon_resources(&mut extractor, &resources_dir)?;
        self.publish_plugin_icons(&mut extractor)?;
        self.inflate_wizard_resources(&mut extractor, &resources_dir)?;
        self.inflate_widget_forms(&mut extractor, &resources_dir)?;

        let compiled_forms = self.compiler.compile_all(&resources_dir)?;
        tracing::info!(
            plugin = self.layout.plugin_name(),
            forms = compiled_forms.len(),
            "plugin resources initialized"
        );
        Ok(compiled_forms)
    }

    /// Extract the help resources from the plugin.
    ///
    /// Help content is always rewritten so a plugin upgrade refreshes it.
    fn inflate_help_resources(
        &self,
        extractor: &mut ResourceExtractor,
        resources_dir: &Path,
    ) -> SetupResult<()> {
        extractor.extract_matching(is_help_resource, resources_dir, OverwritePolicy::Always)?;
        Ok(())
    }

    /// Extract the icon resources from the plugin.
    ///
    /// Icons are only written when absent, leaving user-replaced icons alone.
    fn inflate_icon_resources(
        &self,
        extractor: &mut ResourceExtractor,
        resources_dir: &Path,
    ) -> SetupResult<()> {
        extractor.extract_matching(is_icon_resource, resources_dir, OverwritePolicy::IfAbsent)?;
        Ok(())
    }

    /// Read the plugin icons and publish them for sharing with the dialogs.
    fn publish_plugin_icons(&self, extractor: &mut ResourceExtractor) -> SetupResult<()> {
        let mut icons = HashMap::new();
        for member in PLUGIN_ICONS {
            if !extractor.has_member(member) {
                continue;
            }
            icons.insert(member.to_string(), extractor.read_member(member)?);
        }
        self.registry.publish(self.layout.plugin_name(), icons);
        Ok(())
    }

    /// Extract the wizard library, replacing any existing copy.
    ///
    /// The plugin cannot offer service registration without its wizard, so
    /// failure here is fatal to initialization.
    fn inflate_wizard_resources(
        &self,
        extractor: &mut ResourceExtractor,
        resources_dir: &Path,
    ) -> SetupResult<()> {
        let member = wizard_library_name();
        let target = resources_dir.join(&member);
        if target.exists() {
            fs::remove_file(&target)?;
        }

        let contents = extractor.read_member(&member).map_err(|e| {
            tracing::error!(member = %member, error = %e, "unable to extract wizard resources");
            e
        })?;
        fs::write(&target, contents)?;
        Ok(())
    }

    /// Extract the widget form definitions that need (re)compilation.
    ///
    /// A packaged definition is skipped while its compiled module is at
    /// least as new as the archive timestamp; the definition itself was
    /// deleted by the previous compilation pass.
    fn inflate_widget_forms(
        &self,
        extractor: &mut ResourceExtractor,
        resources_dir: &Path,
    ) -> SetupResult<()> {
        for widget in WIDGETS {
            let member = form_member_name(widget);
            let compiled =
                resources_dir.join(format!("{widget}{COMPILED_STEM_SUFFIX}.{FORM_EXTENSION}"));

            if extractor.member_newer_than(&member, &compiled)? {
                let contents = extractor.read_member(&member).map_err(|e| {
                    tracing::error!(member = %member, error = %e, "unable to extract widget form");
                    e
                })?;
                fs::write(resources_dir.join(&member), contents)?;
            }
        }
        Ok(())
    }
}
