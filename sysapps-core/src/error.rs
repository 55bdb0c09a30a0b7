//! Unified error type definition

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Filesystem read failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Manual file is not a valid section → step mapping
    #[error("Invalid document {}: {message}", .path.display())]
    InvalidDocument { path: PathBuf, message: String },

    /// Service script does not exist
    #[error("Script not found: {}", .0.display())]
    ScriptMissing(PathBuf),

    /// Service script exited unsuccessfully (`None` when killed by a signal)
    #[error("Script {script} failed with exit code {}", exit_code_label(.code))]
    ScriptFailed { script: String, code: Option<i32> },

    /// External command could not be spawned or produced unusable output
    #[error("Command {program} failed: {message}")]
    Command { program: String, message: String },
}

impl CoreError {
    /// Build an [`CoreError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether it is expected behavior (missing file, hand-edited manual, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ScriptMissing(_) | Self::InvalidDocument { .. } => true,
            Self::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            Self::ScriptFailed { .. } | Self::Command { .. } => false,
        }
    }
}

#[allow(clippy::ref_option)]
fn exit_code_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_expected() {
        let err = CoreError::io("/nope", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_expected());

        let err = CoreError::io("/nope", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!err.is_expected());
    }

    #[test]
    fn test_script_failed_display() {
        let err = CoreError::ScriptFailed {
            script: "EnableSSH.sh".to_string(),
            code: Some(3),
        };
        assert_eq!(err.to_string(), "Script EnableSSH.sh failed with exit code 3");
        assert!(!err.is_expected());

        let err = CoreError::ScriptFailed {
            script: "EnableSSH.sh".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "Script EnableSSH.sh failed with exit code none");
    }

    #[test]
    fn test_script_missing_is_expected() {
        let err = CoreError::ScriptMissing(PathBuf::from("/scripts/EnableSCP.sh"));
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "Script not found: /scripts/EnableSCP.sh");
    }
}
