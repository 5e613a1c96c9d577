//! End-to-end intercept flow tests
//!
//! Drives the full hook flow against real shell scripts staged in a
//! temporary directory, covering the success, cached, failure, timeout and
//! pass-through paths.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;
use websearch_intercept::hook;
use websearch_intercept::search::{CommandConfig, CommandSearcher};

fn write_script(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-search.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn searcher(script: PathBuf) -> CommandSearcher {
    CommandSearcher::new(CommandConfig::new(script))
}

fn reason(output: &websearch_intercept::event::HookOutput) -> &str {
    &output.hook_specific_output.permission_decision_reason
}

/// A WebSearch event is denied and the reason carries the script output
#[tokio::test]
async fn test_web_search_denied_with_fresh_results() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, r#"echo "Rust ownership model explained...""#);

    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"rust ownership"}}"#,
        &searcher(script),
    )
    .await
    .unwrap()
    .expect("WebSearch must be intercepted");

    assert_eq!(
        reason(&output),
        "## Web Search Results [Fresh]\n\nRust ownership model explained..."
    );
    assert_eq!(output.hook_specific_output.permission_decision, "deny");
    assert_eq!(output.hook_specific_output.hook_event_name, "PreToolUse");
}

/// The stderr marker flips the freshness tag to [Cached]
#[tokio::test]
async fn test_cached_marker_flips_tag() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo 'stale but useful'\necho '[Cached result]' >&2");

    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"rust"}}"#,
        &searcher(script),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(
        reason(&output),
        "## Web Search Results [Cached]\n\nstale but useful"
    );
}

/// A failing script is reported inside the reason, not as a process error
#[tokio::test]
async fn test_failing_script_reported_in_reason() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo 'quota exceeded' >&2\nexit 2");

    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"rust"}}"#,
        &searcher(script),
    )
    .await
    .unwrap()
    .unwrap();

    assert!(reason(&output).starts_with("## Web Search Results \n\nSearch failed:"));
    assert!(reason(&output).contains("quota exceeded"));
}

/// Empty script output counts as a failure even on exit 0
#[tokio::test]
async fn test_empty_output_is_a_failure() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "exit 0");

    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"rust"}}"#,
        &searcher(script),
    )
    .await
    .unwrap()
    .unwrap();

    assert!(reason(&output).contains("Search failed:"));
}

/// A hung script is killed and reported as a timeout
#[tokio::test]
async fn test_timeout_reported_in_reason() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "sleep 10");
    let searcher = CommandSearcher::new(CommandConfig::new(script).timeout_secs(1));

    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"slow query"}}"#,
        &searcher,
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(
        reason(&output),
        "## Web Search Results \n\nSearch timed out after 1 seconds"
    );
}

/// A script that cannot be launched is reported as a search error
#[tokio::test]
async fn test_missing_script_reported_in_reason() {
    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"rust"}}"#,
        &searcher(PathBuf::from("/nonexistent/search.sh")),
    )
    .await
    .unwrap()
    .unwrap();

    assert!(reason(&output).contains("Search error:"));
}

/// Events for other tools produce no output
#[tokio::test]
async fn test_other_tools_pass_through() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo should-never-run");

    let output = hook::run(
        r#"{"tool_name":"Bash","tool_input":{"command":"ls"}}"#,
        &searcher(script),
    )
    .await
    .unwrap();

    assert!(output.is_none());
}

/// A WebSearch event without a usable query produces no output
#[tokio::test]
async fn test_missing_query_passes_through() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo should-never-run");
    let searcher = searcher(script);

    for input in [
        r#"{"tool_name":"WebSearch","tool_input":{}}"#,
        r#"{"tool_name":"WebSearch","tool_input":{"query":""}}"#,
        r#"{"tool_name":"WebSearch"}"#,
    ] {
        let output = hook::run(input, &searcher).await.unwrap();
        assert!(output.is_none(), "input: {}", input);
    }
}

/// Malformed stdin is the one fatal path
#[tokio::test]
async fn test_malformed_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo should-never-run");
    let searcher = searcher(script);

    for input in ["", "{truncated", "[]", "\"just a string\""] {
        assert!(
            hook::run(input, &searcher).await.is_err(),
            "input: {:?}",
            input
        );
    }
}

/// The emitted decision serializes to the exact wire shape
#[tokio::test]
async fn test_decision_wire_shape() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo results");

    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"rust"}}"#,
        &searcher(script),
    )
    .await
    .unwrap()
    .unwrap();

    let line = output.to_json_line().unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "hookSpecificOutput": {
                "hookEventName": "PreToolUse",
                "permissionDecision": "deny",
                "permissionDecisionReason": "## Web Search Results [Fresh]\n\nresults"
            }
        })
    );
    assert!(!line.contains('\n'));
}

/// Query text with shell metacharacters is passed as one argument
#[tokio::test]
async fn test_query_not_shell_interpreted() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, r#"echo "got: $2""#);

    let output = hook::run(
        r#"{"tool_name":"WebSearch","tool_input":{"query":"a && b; echo pwned"}}"#,
        &searcher(script),
    )
    .await
    .unwrap()
    .unwrap();

    assert!(reason(&output).contains("got: a && b; echo pwned"));
}
