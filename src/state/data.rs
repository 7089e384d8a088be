/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the fetch client, the session state machine and the UI layer.

use serde::{Deserialize, Serialize};

/// Shown when the photo payload carries neither description field
pub const NO_DESCRIPTION: &str = "No description available";

/// A successfully fetched random photo
///
/// Replaced wholesale by the next successful search; the previous
/// result is cleared the moment a new search begins.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Direct URL of the regular-size image
    pub image_url: String,
    /// Display name of the photographer
    pub photographer: String,
    /// Photo description (falls back to [`NO_DESCRIPTION`])
    pub description: String,
    /// The search term this photo was fetched for
    pub query: String,
}

/// One recent-search entry, persisted across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Image URL of the fetched photo
    pub url: String,
    /// The query that produced it
    pub query: String,
}

/// One saved favorite (in-memory only, lives for the session)
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteEntry {
    /// Image URL of the saved photo
    pub url: String,
    /// Display name of the photographer
    pub photographer: String,
    /// The query that produced it
    pub query: String,
}
