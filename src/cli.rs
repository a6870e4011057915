use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

Copyright (c) 2025 InkyQuill
License: MIT
Source: https://github.com/InkyQuill/subx
Rust Edition: 2024"
);

#[derive(Parser, Debug)]
#[command(name = "subx")]
#[command(about = "Apply find/replace transforms to a set of files all at once")]
#[command(long_about = "Subx applies a declarative set of find/replace transforms across files
selected by glob patterns, driven by a JSON configuration file.

Files are rewritten in place. Transforms run in declared order, each one
consuming the previous transform's output.

CONFIGURATION FORMAT:
  {
    \"files\": [\"src/**/*.txt\", \"!src/skip.txt\"],
    \"transforms\": [
      { \"from\": \"old\", \"to\": \"new\" },
      { \"from\": \"v(\\\\d+)\", \"to\": \"version $1\", \"regex\": true }
    ]
  }

  Patterns prefixed with '!' exclude files matched by earlier patterns.
  Per transform, \"regex\" defaults to false and \"global\" to true;
  \"global\": false replaces only the first regex match.

EXAMPLES:
  subx transforms.json                 Run in the current directory
  subx -C ./site transforms.json       Run against another directory
  subx -j 4 transforms.json            Cap the worker pool at 4 threads
  subx -v transforms.json              Show per-file progress on stderr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Directory to apply transforms within
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    #[arg(help = "Directory to apply transforms within\nDefaults to the current working directory")]
    pub dir: Option<PathBuf>,

    /// Number of worker threads (0 = one per CPU core)
    #[arg(short = 'j', long, value_name = "NUM", default_value_t = 0)]
    #[arg(help = "Number of worker threads for per-file processing\nUse 0 for one thread per CPU core")]
    pub threads: usize,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["subx", "transforms.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("transforms.json"));
        assert_eq!(cli.dir, None);
        assert_eq!(cli.threads, 0);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["subx", "-C", "site", "-j", "4", "-v", "transforms.json"])
                .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("site")));
        assert_eq!(cli.threads, 4);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_config_path() {
        assert!(Cli::try_parse_from(["subx"]).is_err());
    }
}
