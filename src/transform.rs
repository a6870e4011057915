//! The transform engine: pure string rewriting
//!
//! Transforms are applied strictly in declared order, each one consuming
//! the previous transform's output. No I/O happens here, so the engine is
//! safe to invoke concurrently across different buffers.

use regex::Regex;

use crate::config::Transform;
use crate::error::{Error, Result};

/// Apply a single transform to the contents
///
/// Regex mode compiles `from` and replaces all non-overlapping matches, or
/// only the first when `global` is explicitly false. Replacement text is
/// handed to the regex engine verbatim, so capture references ($1, ${name})
/// work. Literal mode replaces every occurrence of `from`; the `global`
/// flag has no effect there, an asymmetry kept as documented behavior.
pub fn apply(contents: &str, transform: &Transform) -> Result<String> {
    if transform.regex {
        let pattern = Regex::new(&transform.from).map_err(|err| Error::InvalidPattern {
            pattern: transform.from.clone(),
            source: err,
        })?;

        let replaced = if transform.global {
            pattern.replace_all(contents, transform.to.as_str())
        } else {
            pattern.replace(contents, transform.to.as_str())
        };

        return Ok(replaced.into_owned());
    }

    Ok(contents.replace(&transform.from, &transform.to))
}

/// Apply a chain of transforms in declared order
pub fn apply_all(contents: &str, transforms: &[Transform]) -> Result<String> {
    let mut contents = contents.to_string();

    for transform in transforms {
        contents = apply(&contents, transform)?;
    }

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(from: &str, to: &str) -> Transform {
        Transform {
            from: from.to_string(),
            to: to.to_string(),
            regex: false,
            global: true,
        }
    }

    fn pattern(from: &str, to: &str, global: bool) -> Transform {
        Transform {
            from: from.to_string(),
            to: to.to_string(),
            regex: true,
            global,
        }
    }

    #[test]
    fn test_literal_replaces_all_occurrences() {
        let result = apply("aXbXc", &literal("X", "Y")).unwrap();
        assert_eq!(result, "aYbYc");
    }

    #[test]
    fn test_literal_ignores_global_flag() {
        let mut transform = literal("X", "Y");
        transform.global = false;
        let result = apply("aXbXc", &transform).unwrap();
        assert_eq!(result, "aYbYc");
    }

    #[test]
    fn test_literal_no_match_is_identity() {
        let result = apply("abc", &literal("z", "y")).unwrap();
        assert_eq!(result, "abc");
    }

    #[test]
    fn test_regex_global_by_default() {
        let result = apply("a1b2c3", &pattern(r"\d", "#", true)).unwrap();
        assert_eq!(result, "a#b#c#");
    }

    #[test]
    fn test_regex_first_match_only() {
        let result = apply("a1b2c3", &pattern(r"\d", "#", false)).unwrap();
        assert_eq!(result, "a#b2c3");
    }

    #[test]
    fn test_regex_capture_references_pass_through() {
        let result = apply("name: alice", &pattern(r"name: (\w+)", "user=$1", true)).unwrap();
        assert_eq!(result, "user=alice");
    }

    #[test]
    fn test_regex_invalid_pattern() {
        let err = apply("abc", &pattern("[unclosed", "x", true)).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(err.to_string().contains("[unclosed"));
    }

    #[test]
    fn test_apply_all_in_declared_order() {
        let transforms = vec![literal("a", "b"), literal("b", "c")];
        let result = apply_all("abc", &transforms).unwrap();
        assert_eq!(result, "ccc");
    }

    #[test]
    fn test_apply_all_empty_chain_is_identity() {
        let result = apply_all("abc", &[]).unwrap();
        assert_eq!(result, "abc");
    }

    #[test]
    fn test_apply_all_mixed_modes() {
        let transforms = vec![pattern(r"\d+", "N", true), literal("N", "num")];
        let result = apply_all("x12y345", &transforms).unwrap();
        assert_eq!(result, "xnumynum");
    }

    #[test]
    fn test_apply_all_stops_at_invalid_pattern() {
        let transforms = vec![literal("a", "b"), pattern("(", "x", true)];
        assert!(apply_all("abc", &transforms).is_err());
    }
}
