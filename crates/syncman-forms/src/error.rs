//! Error types for form compilation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling form definitions.
#[derive(Debug, Error)]
pub enum FormError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The form markup carries no windowTitle property.
    #[error("No windowTitle property in form: {0}")]
    MissingWindowTitle(PathBuf),

    /// The external code generator failed.
    #[error("Form code generator failed for {form}: {message}")]
    Codegen { form: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn FormError___missing_window_title___displays_path() {
        let err = FormError::MissingWindowTitle(PathBuf::from("/res/syncman.ui"));

        assert_eq!(
            err.to_string(),
            "No windowTitle property in form: /res/syncman.ui"
        );
    }

    #[test]
    fn FormError___codegen___displays_form_and_message() {
        let err = FormError::Codegen {
            form: PathBuf::from("/res/syncman.ui"),
            message: "exit status 1".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("/res/syncman.ui"));
        assert!(msg.contains("exit status 1"));
    }

    #[test]
    fn FormError___from_io_error___converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FormError = io_err.into();

        assert!(matches!(err, FormError::Io(_)));
    }
}
