//! File-set resolution from glob patterns
//!
//! Patterns are expanded against the working directory in declared order.
//! A pattern prefixed with `!` excludes: it removes matches collected by
//! the patterns before it. The resolved set is de-duplicated, so a file
//! matched by overlapping globs is transformed exactly once.

use glob::Pattern;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Expand the configuration's globs into a concrete list of file paths
///
/// Returned paths are the working directory joined with each match, in
/// first-seen order. Directories a glob happens to match are skipped.
pub fn resolve(working_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    // The directory is a literal path, not a pattern; escape it so a
    // directory name containing `[`, `?`, or `*` still matches itself.
    let escaped_dir = Pattern::escape(&working_dir.to_string_lossy());

    for raw in patterns {
        if let Some(negated) = raw.strip_prefix('!') {
            let pattern = Pattern::new(negated).map_err(|err| Error::Glob {
                pattern: raw.clone(),
                message: err.to_string(),
            })?;

            paths.retain(|path| {
                let relative = path.strip_prefix(working_dir).unwrap_or(path);
                let keep = !pattern.matches_path(relative);
                if !keep {
                    seen.remove(path);
                }
                keep
            });
            continue;
        }

        let full = format!("{escaped_dir}/{raw}");
        let entries = glob::glob(&full).map_err(|err| Error::Glob {
            pattern: raw.clone(),
            message: err.to_string(),
        })?;

        for entry in entries {
            let path = entry.map_err(|err| Error::Glob {
                pattern: raw.clone(),
                message: err.to_string(),
            })?;

            if path.is_dir() {
                continue;
            }

            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    debug!(files = paths.len(), "resolved file set");
    Ok(paths)
}
