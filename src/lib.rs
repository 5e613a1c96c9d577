//! websearch-intercept - a PreToolUse hook for Claude Code
//!
//! Reads one tool-use event from stdin. When the event is a WebSearch, the
//! hook runs an external search script and answers with a deny decision that
//! carries the script's output as the reason, so the caller receives search
//! results without the built-in tool ever running. Every other event passes
//! through untouched.

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod hook;
pub mod search;

pub use error::{HookError, Result};
