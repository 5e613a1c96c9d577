//! Wire types for the hook event protocol.
//!
//! The caller hands the hook one tool-use event on stdin and expects at most
//! one permission decision on stdout. Both shapes are fixed by the hook
//! protocol, not by this crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{HookError, Result};

/// Tool name constants
pub mod tool_names {
    pub const WEB_SEARCH: &str = "WebSearch";
}

/// Hook event this binary responds to
pub const HOOK_EVENT_NAME: &str = "PreToolUse";

/// One inbound tool invocation, as delivered on stdin.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolUseEvent {
    /// Name of the tool being invoked (e.g. "WebSearch", "Bash")
    pub tool_name: String,
    /// Tool-specific arguments
    pub tool_input: HashMap<String, Value>,
}

impl ToolUseEvent {
    /// Parse an event from the raw stdin text.
    ///
    /// Anything that is not a JSON object is a malformed event; the caller
    /// maps that to a fatal exit.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(HookError::MalformedEvent)
    }

    /// Check whether this event is a WebSearch invocation
    pub fn is_web_search(&self) -> bool {
        self.tool_name == tool_names::WEB_SEARCH
    }

    /// The search query, if one is present and non-empty.
    ///
    /// A missing key, a non-string value, and an empty string all mean
    /// "nothing to search for".
    pub fn query(&self) -> Option<&str> {
        self.tool_input
            .get("query")
            .and_then(Value::as_str)
            .filter(|q| !q.is_empty())
    }
}

/// The outbound permission decision envelope.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

/// Decision payload nested inside [`HookOutput`]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HookSpecificOutput {
    #[serde(rename = "hookEventName")]
    pub hook_event_name: String,
    #[serde(rename = "permissionDecision")]
    pub permission_decision: String,
    #[serde(rename = "permissionDecisionReason")]
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// Create a deny decision with the given reason text
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME.to_string(),
                permission_decision: "deny".to_string(),
                permission_decision_reason: reason.into(),
            },
        }
    }

    /// Serialize the decision as the single JSON line the caller expects
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
