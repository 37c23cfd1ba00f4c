//! Error conversion helpers for dataset I/O
//!
//! Provides an extension trait for attaching the offending path to I/O errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&path)
    ///     .with_path_context("read dataset", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: format!("{}: {}", action, path.display()),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_message_names_path_and_reason() {
        let res: io::Result<()> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = res
            .with_path_context("read dataset", Path::new("/tmp/masvs.json"))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Io { .. }));
        assert_eq!(err.to_string(), "read dataset: /tmp/masvs.json: denied");
    }
}
