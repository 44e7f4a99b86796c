//! Runtime compilation of extracted form definitions.

use crate::codegen::UiCodegen;
use crate::{COMPILED_STEM_SUFFIX, FORM_EXTENSION, FormError, FormResult, rewrite};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// First windowTitle property in document order; the title string is used as
// the lookup key for the compiled module.
#[allow(clippy::unwrap_used)] // Safe: pattern is a compile-time constant
static WINDOW_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<property\s+name="windowTitle"\s*>.*?<string\s*>(.*?)</string>"#).unwrap()
});

/// Compiles form definitions found in a resource directory.
///
/// Each `.ui` definition is compiled through the configured [`UiCodegen`],
/// the generated text is normalized for the host runtime, and the compiled
/// module is written next to the definition before the definition itself is
/// deleted. Compilation is skipped for forms whose compiled module is
/// already at least as new as the definition.
pub struct FormCompiler<C> {
    codegen: C,
    app_name: String,
}

impl<C: UiCodegen> FormCompiler<C> {
    /// Create a compiler using `codegen`, substituting `app_name` for the
    /// generator's application-name placeholder.
    pub fn new(codegen: C, app_name: impl Into<String>) -> Self {
        Self {
            codegen,
            app_name: app_name.into(),
        }
    }

    /// Compile every form definition under `resources_dir`.
    ///
    /// Returns a map from each form's window title to the base name of its
    /// compiled module, covering every definition processed in this call
    /// whether freshly compiled or already up to date. A definition without
    /// a windowTitle property aborts the whole pass; generator failures
    /// propagate unmodified.
    pub fn compile_all(&self, resources_dir: &Path) -> FormResult<HashMap<String, String>> {
        let mut compiled_forms = HashMap::new();

        for form in find_forms(resources_dir)? {
            let markup = fs::read_to_string(&form)?;
            let title =
                window_title(&markup).ok_or_else(|| FormError::MissingWindowTitle(form.clone()))?;

            let compiled = compiled_form_path(&form);
            if needs_compilation(&form, &compiled)? {
                if compiled.exists() {
                    tracing::debug!(form = %form.display(), "recompiling");
                } else {
                    tracing::debug!(form = %form.display(), "compiling");
                }

                let generated = self.codegen.generate(&form)?;
                let patched = rewrite::apply_all(&generated, &self.app_name);
                fs::write(&compiled, patched.as_bytes())?;
            }

            compiled_forms.insert(title, module_base_name(&compiled));

            // The compiled module is the sole artifact from here on.
            fs::remove_file(&form)?;
        }

        Ok(compiled_forms)
    }
}

/// Extract the window title from form markup.
///
/// Returns the literal string of the first `windowTitle` property, or `None`
/// when the markup carries no such property.
#[must_use]
pub fn window_title(markup: &str) -> Option<String> {
    WINDOW_TITLE_RE
        .captures(markup)
        .map(|caps| caps[1].to_string())
}

/// Recursively collect form definitions, leaving compiled modules alone.
fn find_forms(resources_dir: &Path) -> FormResult<Vec<PathBuf>> {
    let mut forms = Vec::new();
    for entry in WalkDir::new(resources_dir) {
        let entry = entry.map_err(|e| FormError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(FORM_EXTENSION) {
            continue;
        }
        let is_compiled = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(COMPILED_STEM_SUFFIX));
        if is_compiled {
            continue;
        }

        forms.push(path.to_path_buf());
    }
    Ok(forms)
}

/// Path of the compiled module for a form definition: same directory, stem
/// suffixed with `_ui`, extension preserved.
fn compiled_form_path(form: &Path) -> PathBuf {
    let stem = form
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = form
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or(FORM_EXTENSION);
    form.with_file_name(format!("{stem}{COMPILED_STEM_SUFFIX}.{ext}"))
}

/// Module base name callers use to look the compiled form up: the file name
/// stripped of directory and everything from the first dot.
fn module_base_name(compiled: &Path) -> String {
    compiled
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}

/// Whether a compiled module must be (re)generated.
fn needs_compilation(form: &Path, compiled: &Path) -> FormResult<bool> {
    if !compiled.exists() {
        return Ok(true);
    }
    let form_mtime = fs::metadata(form)?.modified()?;
    let compiled_mtime = fs::metadata(compiled)?.modified()?;
    Ok(form_mtime > compiled_mtime)
}
