// Search seam - core interfaces

use crate::error::Result;
use async_trait::async_trait;

/// Cache freshness reported by the external search script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The script performed a live search
    Fresh,
    /// The script served a cached result
    Cached,
    /// The search failed, so freshness is meaningless
    Unknown,
}

impl Freshness {
    /// The tag rendered into the decision reason header
    pub fn tag(&self) -> &'static str {
        match self {
            Freshness::Fresh => "[Fresh]",
            Freshness::Cached => "[Cached]",
            Freshness::Unknown => "",
        }
    }
}

/// Result of one search attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Result text, or a synthesized failure message
    pub text: String,
    /// Whether the result came from a live search or a cache
    pub freshness: Freshness,
}

impl SearchOutcome {
    /// Create an outcome for a live search result
    pub fn fresh(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            freshness: Freshness::Fresh,
        }
    }

    /// Create an outcome for a cached result
    pub fn cached(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            freshness: Freshness::Cached,
        }
    }

    /// Create an outcome for a failed search
    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            freshness: Freshness::Unknown,
        }
    }

    /// Check whether the search produced a usable result
    pub fn succeeded(&self) -> bool {
        self.freshness != Freshness::Unknown
    }
}

/// Trait for search backends
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Run one search for the given query.
    ///
    /// Implementations absorb their own failures: a broken backend returns
    /// `Ok` with a failure outcome so the hook can still emit a decision.
    async fn search(&self, query: &str) -> Result<SearchOutcome>;

    /// Get a description of this search backend
    fn description(&self) -> &str {
        "searcher"
    }
}
