//! Batch orchestration: validate, resolve, then rewrite every file
//!
//! Per-file work is independent and runs on a bounded rayon worker pool.
//! The batch is fail-complete: every file runs to completion and failures
//! are aggregated afterward, so one bad file never stops the others. A
//! partially rewritten batch is an accepted outcome; there is no atomic
//! all-or-nothing guarantee across files.

use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{Config, Transform};
use crate::error::{Error, FileFailure, Result};
use crate::{resolver, transform, validate};

/// Outcome counts from a fully successful batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files whose contents changed
    pub files_changed: usize,

    /// Files the transforms left untouched (still written back)
    pub files_unchanged: usize,
}

/// Transform every file the configuration matches under `working_dir`
///
/// Configuration and resolution errors are fatal and abort before any file
/// is touched. `threads` caps the worker pool; 0 uses rayon's default.
pub fn run(working_dir: &Path, config: &Value, threads: usize) -> Result<BatchSummary> {
    if !working_dir.exists() {
        return Err(Error::DirectoryNotFound {
            path: working_dir.to_path_buf(),
        });
    }

    validate::validate(config)?;
    let config = Config::from_value(config)?;
    let paths = resolver::resolve(working_dir, &config.files)?;

    info!(
        files = paths.len(),
        transforms = config.transforms.len(),
        "starting batch"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("subx-worker-{index}"))
        .build()
        .map_err(|err| Error::WorkerPool {
            message: err.to_string(),
        })?;

    let outcomes: Vec<std::result::Result<bool, FileFailure>> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| process_file(path, &config.transforms))
            .collect()
    });

    let mut summary = BatchSummary::default();
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome {
            Ok(true) => summary.files_changed += 1,
            Ok(false) => summary.files_unchanged += 1,
            Err(failure) => failures.push(failure),
        }
    }

    if !failures.is_empty() {
        return Err(Error::Batch { failures });
    }

    info!(
        changed = summary.files_changed,
        unchanged = summary.files_unchanged,
        "batch complete"
    );

    Ok(summary)
}

/// Read, transform, and write back a single file
///
/// Returns whether the contents changed. Each failure is tagged with the
/// file it belongs to so the aggregate report can name every bad path.
fn process_file(
    path: &Path,
    transforms: &[Transform],
) -> std::result::Result<bool, FileFailure> {
    let fail = |error: Error| FileFailure {
        path: path.to_path_buf(),
        error,
    };

    let original = fs::read_to_string(path).map_err(|err| {
        fail(Error::FileRead {
            path: path.to_path_buf(),
            source: err,
        })
    })?;

    let rewritten = transform::apply_all(&original, transforms).map_err(&fail)?;
    let changed = rewritten != original;

    fs::write(path, &rewritten).map_err(|err| {
        fail(Error::FileWrite {
            path: path.to_path_buf(),
            source: err,
        })
    })?;

    debug!(path = %path.display(), changed, "processed file");
    Ok(changed)
}
