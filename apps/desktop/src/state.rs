//! Global application state using Dioxus signals.
//!
//! All mutation funnels through [`dispatch`]: an event runs through the pure
//! reducer in `picseek_core::machine`, and whatever command it returns is
//! executed here — timers via `tokio::time::sleep`, fetches via the provider
//! client. Components never touch [`STATE`] directly except to read it.

use dioxus::prelude::*;
use picseek_core::machine::{update, Command, Event};
use picseek_core::provider::ProviderClient;
use picseek_core::types::SearchState;
use tracing::warn;

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// The single reducer-owned state record.
pub static STATE: GlobalSignal<SearchState> = Signal::global(|| SearchState::default());

/// Provider client — built once at startup, consumed on first render.
pub static CLIENT: GlobalSignal<Option<ProviderClient>> = Signal::global(|| None);

/// Whether a drag is currently hovering the dropzone. Presentation-only, so
/// it lives beside the reducer state rather than inside it.
pub static DRAG_ACTIVE: GlobalSignal<bool> = Signal::global(|| false);

// ---------------------------------------------------------------------------
// Event dispatch
// ---------------------------------------------------------------------------

/// Run one event through the reducer and execute whatever it asks for.
pub fn dispatch(event: Event) {
    let command = {
        let mut state = STATE.write();
        update(&mut state, event)
    };

    match command {
        Some(Command::Debounce { generation, delay }) => {
            spawn(async move {
                tokio::time::sleep(delay).await;
                dispatch(Event::DebounceElapsed { generation });
            });
        }
        Some(Command::Fetch { generation, query }) => {
            let client = CLIENT.read().clone();
            spawn(async move {
                let results = match client {
                    Some(client) => match client.search(&query).await {
                        Ok(results) => results,
                        Err(e) => {
                            warn!(query = %query, error = %e, "provider search failed");
                            Vec::new()
                        }
                    },
                    None => Vec::new(),
                };
                dispatch(Event::FetchSettled { generation, results });
            });
        }
        None => {}
    }
}
