//! Test harness for search-flow tests.
//!
//! Drives the reducer directly and plays the role of both the clock and the
//! network: scheduled timers and issued fetches are captured as commands, and
//! each test decides when (and in what order) they fire and settle.

use picseek_core::machine::{update, Command, Event};
use picseek_core::types::{Attribution, SearchResult, SearchState};

pub struct TestHarness {
    pub state: SearchState,
    /// Debounce timers scheduled by the reducer, oldest first.
    pub timers: Vec<u64>,
    /// Fetches issued by the reducer, oldest first: (generation, query).
    pub fetches: Vec<(u64, String)>,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness { state: SearchState::default(), timers: Vec::new(), fetches: Vec::new() }
    }

    /// Run one event through the reducer, capturing any command it emits.
    pub fn dispatch(&mut self, event: Event) {
        match update(&mut self.state, event) {
            Some(Command::Debounce { generation, .. }) => self.timers.push(generation),
            Some(Command::Fetch { generation, query }) => self.fetches.push((generation, query)),
            None => {}
        }
    }

    /// Type a value into the search input.
    pub fn type_query(&mut self, query: &str) {
        self.dispatch(Event::QueryChanged(query.to_string()));
    }

    /// Fire every scheduled timer in schedule order, as a real quiet period
    /// would. Superseded timers still hit the reducer; it ignores them.
    pub fn elapse_timers(&mut self) {
        for generation in std::mem::take(&mut self.timers) {
            self.dispatch(Event::DebounceElapsed { generation });
        }
    }

    /// Settle the oldest outstanding fetch with scripted results.
    pub fn settle_oldest(&mut self, results: Vec<SearchResult>) {
        assert!(!self.fetches.is_empty(), "no fetch outstanding to settle");
        let (generation, _) = self.fetches.remove(0);
        self.dispatch(Event::FetchSettled { generation, results });
    }

    /// Settle the newest outstanding fetch first, simulating replies arriving
    /// out of order.
    pub fn settle_newest(&mut self, results: Vec<SearchResult>) {
        let (generation, _) = self.fetches.pop().expect("no fetch outstanding to settle");
        self.dispatch(Event::FetchSettled { generation, results });
    }

    /// Settle the oldest outstanding fetch as a failure. The shell maps every
    /// provider error to an empty list, so an empty list is what arrives here.
    pub fn fail_oldest(&mut self) {
        self.settle_oldest(Vec::new());
    }
}

/// Scripted provider entry.
pub fn photo(id: &str) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        regular_url: format!("https://images.test/{id}/regular"),
        thumb_url: format!("https://images.test/{id}/thumb"),
        description: Some(format!("photo {id}")),
        attribution: Attribution { name: "Ada Lovelace".into(), username: "ada".into() },
        likes: 7,
    }
}
