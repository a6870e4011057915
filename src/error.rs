//! Error types for subx operations

use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for subx operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file does not exist
    #[error("Failed to open file '{}'", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but could not be read
    #[error("Failed to read file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file contents are not valid JSON
    #[error("Failed to parse contents of '{}' as JSON: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration is structurally malformed; carries every violation found
    #[error("Invalid configuration:\n{}", format_lines(.errors))]
    Validation { errors: Vec<String> },

    /// Working directory does not exist
    #[error("Directory '{}' does not exist", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Glob pattern could not be compiled or expanded
    #[error("Failed to expand glob '{pattern}': {message}")]
    Glob { pattern: String, message: String },

    /// A regex-mode transform pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A file in the batch could not be read
    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file in the batch could not be written back
    #[error("Failed to write file '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker pool could not be constructed
    #[error("Failed to build worker pool: {message}")]
    WorkerPool { message: String },

    /// One or more files in the batch failed; carries every failure, not
    /// just the first (fail-complete)
    #[error("{} file(s) failed:\n{}", .failures.len(), format_failures(.failures))]
    Batch { failures: Vec<FileFailure> },
}

/// A per-file failure from a batch run, tagged with the offending path
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

fn format_lines(errors: &[String]) -> String {
    let mut out = String::new();
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "  - {error}");
    }
    out
}

fn format_failures(failures: &[FileFailure]) -> String {
    let mut out = String::new();
    for (i, failure) in failures.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "  {}: {}", failure.path.display(), failure.error);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_not_found_references_path() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_validation_lists_every_error() {
        let err = Error::Validation {
            errors: vec![
                "\"files\" property missing".to_string(),
                "\"transforms\" property missing".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"files\" property missing"));
        assert!(msg.contains("\"transforms\" property missing"));
    }

    #[test]
    fn test_batch_lists_every_failing_path() {
        let failure = |name: &str| FileFailure {
            path: Path::new(name).to_path_buf(),
            error: Error::FileWrite {
                path: Path::new(name).to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        };
        let err = Error::Batch {
            failures: vec![failure("a.txt"), failure("b.txt")],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("2 file(s) failed"));
        assert!(msg.contains("a.txt"));
        assert!(msg.contains("b.txt"));
    }
}
