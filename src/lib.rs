//! Subx: apply declarative find/replace transforms to files matched by globs
//!
//! The pipeline is load -> validate -> resolve -> run: a JSON configuration
//! names glob patterns and an ordered list of transforms, and every matched
//! file is rewritten in place on a bounded worker pool. The binary front-end
//! is at src/main.rs.

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod resolver;
pub mod runner;
pub mod transform;
pub mod validate;

// Re-export commonly used types for convenience
pub use config::{load_config, Config, Transform};
pub use error::{Error, FileFailure, Result};
pub use runner::{run, BatchSummary};
