//! Application state.
//!
//! Shared, immutable state for all request handlers.

use folio_config::PlaceholderConfig;

/// Application state shared across all handlers.
#[derive(Debug, Default)]
pub struct AppState {
    /// Placeholder image defaults and caching.
    pub placeholder: PlaceholderConfig,
    /// Enable verbose output (log rejected submissions).
    pub verbose: bool,
}
