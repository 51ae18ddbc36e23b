//! Error types for day scaffolding.

use std::io;
use std::path::{Path, PathBuf};

/// Scaffolding errors.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The day value could not be parsed as a non-negative integer.
    #[error("invalid day '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    /// A filesystem operation failed.
    #[error("failed to {action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub fn invalid_argument(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn filesystem(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Filesystem { .. } => 1,
            Self::InvalidArgument { .. } => 2,
        }
    }

    /// Path involved in the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Filesystem { path, .. } => Some(path),
            Self::InvalidArgument { .. } => None,
        }
    }
}

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn exit_codes_are_stable() {
        let invalid = ScaffoldError::invalid_argument("abc", "not a number");
        assert_eq!(invalid.exit_code(), 2);

        let fs = ScaffoldError::filesystem(
            "read template",
            "templates/dayn.rs",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(fs.exit_code(), 1);
    }

    #[test]
    fn filesystem_error_keeps_source_and_path() {
        let err = ScaffoldError::filesystem(
            "create directory",
            "puzzles/7",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "failed to create directory puzzles/7");
        assert_eq!(err.path(), Some(Path::new("puzzles/7")));
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<io::Error>())
            .expect("io source");
        assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    }
}
