//! The intercept flow.
//!
//! One linear pass: parse the event, filter by tool name, extract the query,
//! run the search, build the decision. `Ok(None)` means the event is not
//! ours and the caller should stay silent.

use log::{debug, info};
use std::io::Read;

use crate::error::Result;
use crate::event::{HookOutput, ToolUseEvent};
use crate::search::{SearchOutcome, Searcher};

/// Read the whole event payload from the caller.
///
/// The event protocol is one JSON document per process invocation, so this
/// drains the stream to EOF.
pub fn read_event(reader: &mut impl Read) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}

/// Build the decision reason from a search outcome.
///
/// The header keeps its trailing space when the freshness tag is empty; the
/// consumer renders the string verbatim.
pub fn format_reason(outcome: &SearchOutcome) -> String {
    format!(
        "## Web Search Results {}\n\n{}",
        outcome.freshness.tag(),
        outcome.text
    )
}

/// Run the intercept flow for one raw stdin payload.
///
/// Returns `Ok(Some(output))` when the event was intercepted, `Ok(None)`
/// when it should pass through untouched, and `Err` only for a malformed
/// payload.
pub async fn run(input: &str, searcher: &dyn Searcher) -> Result<Option<HookOutput>> {
    let event = ToolUseEvent::from_json(input)?;

    if !event.is_web_search() {
        debug!("ignoring tool: {}", event.tool_name);
        return Ok(None);
    }

    let query = match event.query() {
        Some(q) => q,
        None => {
            debug!("WebSearch event without a query, passing through");
            return Ok(None);
        }
    };

    info!("intercepting WebSearch via {}: {}", searcher.description(), query);
    let outcome = searcher.search(query).await?;
    if !outcome.succeeded() {
        info!("search did not produce a result: {}", outcome.text);
    }

    Ok(Some(HookOutput::deny(format_reason(&outcome))))
}
