/// Configuration loading for subx
///
/// A configuration file is a JSON object with two properties:
/// `files` (globs to match) and `transforms` (find/replace rules to apply).
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// User configuration: which files to touch and which transforms to apply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Globs for files to match, expanded in declared order
    pub files: Vec<String>,

    /// Transforms to apply to each file, in declared order
    pub transforms: Vec<Transform>,
}

/// One find/replace rule
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transform {
    /// String or pattern to search for
    pub from: String,

    /// Replacement text; in regex mode, capture references ($1, ...) pass
    /// through to the regex engine
    pub to: String,

    /// Interpret `from` as a regular expression (default: false)
    #[serde(default)]
    pub regex: bool,

    /// In regex mode, replace all matches rather than just the first
    /// (default: true). Literal mode always replaces all occurrences.
    #[serde(default = "default_global")]
    pub global: bool,
}

fn default_global() -> bool {
    true
}

/// Load a configuration file as raw JSON
///
/// Returns the untyped JSON value so the validator can inspect its shape
/// before typed deserialization. A missing file and malformed JSON are
/// reported as distinct errors, both referencing `path`; any other read
/// failure propagates as a read error.
pub fn load_config(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            Error::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::ConfigRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|err| Error::ConfigParse {
        path: path.to_path_buf(),
        source: err,
    })
}

impl Config {
    /// Deserialize a validated JSON value into a typed configuration
    ///
    /// Expects `validate::validate` to have passed; element-level problems
    /// (a transform missing `from`, say) still surface here as a validation
    /// error with a single descriptive message.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(|err| Error::Validation {
            errors: vec![format!("invalid configuration: {err}")],
        })
    }
}
