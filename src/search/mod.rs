//! External search seam.
//!
//! The hook never searches by itself; it delegates to a user-provided script
//! behind the [`Searcher`] trait and folds every failure mode of that script
//! into a [`SearchOutcome`] the caller can read.

pub mod command;
pub mod traits;

pub use command::{CommandConfig, CommandSearcher, CACHED_MARKER};
pub use traits::{Freshness, SearchOutcome, Searcher};
