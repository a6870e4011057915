//! Structural validation of a loaded configuration
//!
//! Both top-level properties are always checked, and every violation is
//! collected so the caller can report all problems in one pass instead of
//! fixing them one at a time.

use serde_json::Value;

use crate::error::{Error, Result};

/// Validate the shape of a configuration value
///
/// Checks that `files` and `transforms` are both present and are arrays.
/// Per-element validation of individual globs and transforms is not
/// performed here.
pub fn validate(config: &Value) -> Result<()> {
    let mut errors = Vec::new();

    check_array_property(config, "files", &mut errors);
    check_array_property(config, "transforms", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation { errors })
    }
}

fn check_array_property(config: &Value, name: &str, errors: &mut Vec<String>) {
    match config.get(name) {
        None => errors.push(format!("\"{name}\" property missing")),
        Some(value) if !value.is_array() => {
            errors.push(format!("\"{name}\" property should be an array"));
        }
        Some(_) => {}
    }
}
