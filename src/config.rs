/*!
 * Configuration handling for lstree
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::{ListError, Result};

/// Command-line arguments for lstree
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "lstree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print an indented tree of directory contents with one-character type tags",
    long_about = "Classifies the given path and, for directories, recursively lists every \
                  non-hidden entry, one per line, indented one tab per nesting level and \
                  annotated with a one-character file-type tag."
)]
pub struct Args {
    /// Path to classify and, if it is a directory, list recursively
    #[clap(value_name = "PATH")]
    pub path: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target path to list
    pub target: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target: PathBuf::from(args.path),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.target.as_os_str().is_empty() {
            return Err(ListError::InvalidArgument(
                "target path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
