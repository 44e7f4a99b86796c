//! Error types for resource extraction.

use thiserror::Error;

/// Errors that can occur while extracting plugin resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Named member does not exist in the archive.
    #[error("Missing archive member: {0}")]
    MissingMember(String),
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn ResourceError___io___displays_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ResourceError = io_err.into();

        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn ResourceError___missing_member___displays_name() {
        let err = ResourceError::MissingMember("sync_app_wizard.ui".to_string());

        assert_eq!(
            err.to_string(),
            "Missing archive member: sync_app_wizard.ui"
        );
    }

    #[test]
    fn ResourceError___from_io_error___converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: ResourceError = io_err.into();

        assert!(matches!(err, ResourceError::Io(_)));
    }
}
