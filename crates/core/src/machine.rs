//! The search state machine: UI events in, commands out.
//!
//! [`update`] is a pure reducer over [`SearchState`]. It owns every transition
//! in the search loop — debounce scheduling, fetch issuance, settlement, mode
//! switches, file drops — and requests its side effects (timer sleeps, provider
//! fetches) as [`Command`] values for the shell to execute. Generation counters
//! make both the debounce and the fetch path race-free: a timer or settlement
//! carrying anything but the latest generation is discarded.

use std::time::Duration;

use tracing::{debug, info};

use crate::types::{DroppedFile, SearchMode, SearchResult, SearchState, DEBOUNCE};

// ---------------------------------------------------------------------------
// Events and commands
// ---------------------------------------------------------------------------

/// Everything that can happen to the search view, from the UI or from a
/// previously executed command feeding its outcome back in.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Input text changed (keystroke, clear, or trending chip click).
    QueryChanged(String),
    /// Search button pressed: fetch the current query now, skipping the quiet period.
    SearchSubmitted,
    /// A scheduled debounce timer fired.
    DebounceElapsed { generation: u64 },
    /// A fetch finished. Failures arrive here too, already mapped to an empty
    /// list by the executor.
    FetchSettled { generation: u64, results: Vec<SearchResult> },
    /// The mode tabs switched.
    ModeSwitched(SearchMode),
    /// A file landed on the upload panel (drop or picker).
    FileDropped { name: String, size: u64 },
}

/// Side effects requested by the reducer. The shell (or a test harness)
/// executes these and feeds the outcome back as an [`Event`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Sleep for `delay`, then deliver [`Event::DebounceElapsed`] with this generation.
    Debounce { generation: u64, delay: Duration },
    /// Run the provider search, then deliver [`Event::FetchSettled`] with this generation.
    Fetch { generation: u64, query: String },
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Apply one event to the state, returning the command to execute, if any.
pub fn update(state: &mut SearchState, event: Event) -> Option<Command> {
    match event {
        Event::QueryChanged(query) => {
            state.query = query;
            state.debounce_generation += 1;
            Some(Command::Debounce { generation: state.debounce_generation, delay: DEBOUNCE })
        }

        Event::SearchSubmitted => start_fetch(state),

        Event::DebounceElapsed { generation } => {
            if generation != state.debounce_generation {
                // A newer keystroke rescheduled the timer; this one is dead.
                return None;
            }
            start_fetch(state)
        }

        Event::FetchSettled { generation, results } => {
            if generation != state.request_generation {
                debug!(generation, latest = state.request_generation, "discarding stale settlement");
                return None;
            }
            state.results = results;
            state.is_loading = false;
            None
        }

        Event::ModeSwitched(mode) => {
            // Results and query persist across switches, even when irrelevant
            // to the new mode.
            state.active_mode = mode;
            None
        }

        Event::FileDropped { name, size } => {
            info!(file = %name, size, "file received on upload panel");
            state.dropped_file = Some(DroppedFile { name, size });
            None
        }
    }
}

/// Issue a fetch for the current query. A blank query issues nothing, but
/// still bumps the request generation so a fetch that was in flight for the
/// previous query can no longer be applied.
fn start_fetch(state: &mut SearchState) -> Option<Command> {
    let trimmed = state.query.trim();
    state.request_generation += 1;

    if trimmed.is_empty() {
        state.is_loading = false;
        return None;
    }

    state.is_loading = true;
    Some(Command::Fetch { generation: state.request_generation, query: trimmed.to_string() })
}
