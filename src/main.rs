use clap::Parser;
use eyre::{Context, Result};
use log::{error, info};
use std::fs;
use std::path::PathBuf;

use websearch_intercept::cli::Cli;
use websearch_intercept::config::Config;
use websearch_intercept::error::HookError;
use websearch_intercept::hook;
use websearch_intercept::search::{CommandConfig, CommandSearcher};

fn setup_logging(level: &str) -> Result<()> {
    // Stdout belongs to the decision JSON, so logs go to a file
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("websearch-intercept")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("websearch-intercept.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(script) = cli.script.clone() {
        config.search.script = script;
    }
    if let Some(secs) = cli.timeout_secs {
        config.search.timeout_secs = secs;
    }

    // Logging is best-effort: a read-only home must not change the hook's
    // exit-code contract
    let level = config.log_level.clone().unwrap_or_else(|| "info".to_string());
    let _ = setup_logging(&level);

    if cli.is_verbose() {
        eprintln!("search script: {}", config.search.script.display());
        eprintln!("timeout: {}s", config.search.timeout_secs);
    }

    let input = hook::read_event(&mut std::io::stdin().lock())
        .context("Failed to read event from stdin")?;

    let searcher = CommandSearcher::new(
        CommandConfig::new(config.search.script).timeout_secs(config.search.timeout_secs),
    );

    match hook::run(&input, &searcher).await {
        Ok(Some(output)) => {
            println!("{}", output.to_json_line()?);
        }
        Ok(None) => {
            // Not our event; stay silent so the caller proceeds normally
        }
        Err(HookError::MalformedEvent(e)) => {
            error!("malformed tool event on stdin: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("hook failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
