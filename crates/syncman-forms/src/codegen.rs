//! External form-to-code generation.

use crate::{FormError, FormResult};
use std::path::Path;
use std::process::Command;

/// Collaborator that turns a form definition file into generated source text.
///
/// Implementations are expected to behave as pure functions of their input
/// file: the same form yields the same generated text across calls.
pub trait UiCodegen {
    /// Generate source text for the form definition at `form`.
    fn generate(&self, form: &Path) -> FormResult<String>;
}

/// Adapter implementing [`UiCodegen`] for a plain function or closure.
///
/// Handy for embedding and for tests that stub the generator out.
#[derive(Debug, Clone)]
pub struct FnCodegen<F>(pub F);

impl<F> UiCodegen for FnCodegen<F>
where
    F: Fn(&Path) -> FormResult<String>,
{
    fn generate(&self, form: &Path) -> FormResult<String> {
        (self.0)(form)
    }
}

/// [`UiCodegen`] backed by an external generator process.
///
/// The program is invoked with any configured arguments followed by the form
/// path; generated source is captured from stdout. A non-zero exit status or
/// non-UTF-8 output is reported as [`FormError::Codegen`].
#[derive(Debug, Clone)]
pub struct UicProcess {
    program: String,
    args: Vec<String>,
}

impl UicProcess {
    /// Create a generator invoking `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument passed before the form path.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl UiCodegen for UicProcess {
    fn generate(&self, form: &Path) -> FormResult<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(form)
            .output()
            .map_err(|e| FormError::Codegen {
                form: form.to_path_buf(),
                message: format!("failed to run {}: {e}", self.program),
            })?;

        if !output.status.success() {
            return Err(FormError::Codegen {
                form: form.to_path_buf(),
                message: format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| FormError::Codegen {
            form: form.to_path_buf(),
            message: format!("generated text is not UTF-8: {e}"),
        })
    }
}

#[cfg(test)]
#[path = "codegen/codegen_tests.rs"]
mod codegen_tests;
