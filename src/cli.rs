//! CLI argument definitions using clap.
//!
//! The binary has no subcommands; its whole job is one stdin-to-stdout
//! translation. The flags only relocate the search script, adjust the
//! timeout, or point at an alternate config file.

use clap::Parser;
use std::path::PathBuf;

/// PreToolUse hook that reroutes WebSearch through an external search script
#[derive(Parser, Debug)]
#[command(name = "websearch-intercept")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the search script path
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Override the search timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
