// Search seam - external script searcher
// Shells out to the configured search script with a bounded timeout

use crate::error::Result;
use crate::search::traits::{SearchOutcome, Searcher};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Marker substring the script emits on stderr when it served a cache hit
pub const CACHED_MARKER: &str = "[Cached result]";

/// Subcommand token passed as the script's first argument
const SEARCH_SUBCOMMAND: &str = "search";

/// Configuration for the script searcher
#[derive(Debug, Clone)]
pub struct CommandConfig {
    /// Path to the search script
    pub script: PathBuf,
    /// Wall-clock timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl CommandConfig {
    /// Create a config for the given script with the default timeout
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            timeout_secs: 120,
        }
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Searcher that executes the external search script
pub struct CommandSearcher {
    config: CommandConfig,
}

impl CommandSearcher {
    /// Create a new script searcher
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    /// Get the script path
    pub fn script(&self) -> &Path {
        &self.config.script
    }

    /// Run `<script> search <query>` and return the raw output
    async fn execute(&self, query: &str) -> std::io::Result<std::process::Output> {
        let mut cmd = Command::new(&self.config.script);
        cmd.arg(SEARCH_SUBCOMMAND).arg(query);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        // Reap the child if the timeout wins the race below
        cmd.kill_on_drop(true);

        let child = cmd.spawn()?;

        let timeout = tokio::time::Duration::from_secs(self.config.timeout_secs);
        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result,
            Err(_) => Err(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("search timed out after {}s", self.config.timeout_secs),
            )),
        }
    }
}

#[async_trait]
impl Searcher for CommandSearcher {
    async fn search(&self, query: &str) -> Result<SearchOutcome> {
        match self.execute(query).await {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let trimmed = stdout.trim();
                if output.status.success() && !trimmed.is_empty() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    if stderr.contains(CACHED_MARKER) {
                        Ok(SearchOutcome::cached(trimmed))
                    } else {
                        Ok(SearchOutcome::fresh(trimmed))
                    }
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Ok(SearchOutcome::failed(format!("Search failed: {}", stderr)))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(SearchOutcome::failed(
                format!("Search timed out after {} seconds", self.config.timeout_secs),
            )),
            Err(e) => Ok(SearchOutcome::failed(format!("Search error: {}", e))),
        }
    }

    fn description(&self) -> &str {
        "external search script"
    }
}
