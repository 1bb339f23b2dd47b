//! Core types for PicSeek: search modes, result entries, dropped-file metadata,
//! the search state struct, and the UI constants shared between the reducer and
//! the renderer.

use serde::Serialize;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Shared constants
// ---------------------------------------------------------------------------

/// Quiet period after the last keystroke before a query is sent.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Number of placeholder tiles shown while a fetch is outstanding.
pub const SKELETON_TILES: usize = 6;

/// Suggested starting queries, surfaced as one-click chips under the input.
pub const TRENDING_TOPICS: [&str; 6] = ["Nature", "Cats", "Travel", "Food", "Technology", "Art"];

// ---------------------------------------------------------------------------
// Search modes
// ---------------------------------------------------------------------------

/// Which of the two mutually exclusive search paths is active.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SearchMode {
    #[default]
    TextSearch,
    ImageUpload,
}

// ---------------------------------------------------------------------------
// Result entries
// ---------------------------------------------------------------------------

/// Photographer credit shown on tile hover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub name: String,
    pub username: String,
}

/// One image in a result set, mapped from the provider response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Provider-assigned ID, unique within a result set.
    pub id: String,
    /// Full-size display URL used for grid tiles.
    pub regular_url: String,
    /// Small preview URL.
    pub thumb_url: String,
    /// Optional caption; doubles as the tile's alt text.
    pub description: Option<String>,
    pub attribution: Attribution,
    pub likes: u64,
}

/// Metadata recorded when a file lands on the upload panel. Recorded and
/// logged only; nothing reads it back beyond that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub size: u64,
}

// ---------------------------------------------------------------------------
// Search state (single source of truth for the view)
// ---------------------------------------------------------------------------

/// Complete view state. All mutation goes through [`crate::machine::update`];
/// the renderer projects this struct and nothing else.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Current input text, verbatim (not trimmed).
    pub query: String,
    /// Last applied result set. Replaced wholesale on settlement, never merged.
    pub results: Vec<SearchResult>,
    /// True exactly while a fetch for the latest request generation is outstanding.
    pub is_loading: bool,
    pub active_mode: SearchMode,
    pub dropped_file: Option<DroppedFile>,
    /// Latest scheduled debounce timer; earlier timers are ignored when they fire.
    pub debounce_generation: u64,
    /// Latest issued fetch; settlements for earlier generations are discarded.
    pub request_generation: u64,
}
