//! Pure projection of [`SearchState`] into a render plan.
//!
//! The view layer holds no branching logic of its own: it asks [`project`]
//! what to draw and draws exactly that. Keeping the projection here makes the
//! loading/empty/grid decisions testable without a rendering surface.

use crate::types::{SearchMode, SearchResult, SearchState, SKELETON_TILES};

/// What the results area should show for a given state.
#[derive(Debug, PartialEq)]
pub enum RenderPlan<'a> {
    /// A fixed count of animated placeholder tiles.
    Skeletons(usize),
    /// One tile per result, in response order.
    Grid(&'a [SearchResult]),
    /// No tiles; a single mode-keyed message.
    Empty(&'static str),
}

/// Decide what the results area shows. Loading wins over everything; an empty
/// result list falls back to the mode's empty-state message.
pub fn project(state: &SearchState) -> RenderPlan<'_> {
    if state.is_loading {
        RenderPlan::Skeletons(SKELETON_TILES)
    } else if !state.results.is_empty() {
        RenderPlan::Grid(&state.results)
    } else {
        RenderPlan::Empty(empty_message(state.active_mode))
    }
}

/// Empty-state copy for each mode.
pub fn empty_message(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::TextSearch => "Start typing to search for images",
        SearchMode::ImageUpload => "Upload an image to find similar ones",
    }
}

/// Results-section heading for each mode.
pub fn results_heading(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::TextSearch => "Search Results",
        SearchMode::ImageUpload => "Similar Images",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attribution;

    fn photo(id: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            regular_url: format!("https://images.test/{id}/regular"),
            thumb_url: format!("https://images.test/{id}/thumb"),
            description: None,
            attribution: Attribution { name: "Ada Lovelace".into(), username: "ada".into() },
            likes: 3,
        }
    }

    #[test]
    fn loading_state_shows_six_skeletons() {
        let state = SearchState { is_loading: true, ..Default::default() };
        assert_eq!(project(&state), RenderPlan::Skeletons(6));
    }

    #[test]
    fn loading_wins_even_with_results_present() {
        let state = SearchState {
            is_loading: true,
            results: vec![photo("a")],
            ..Default::default()
        };
        assert_eq!(project(&state), RenderPlan::Skeletons(6), "skeletons replace the old grid");
    }

    #[test]
    fn results_render_as_a_grid() {
        let state = SearchState {
            results: vec![photo("a"), photo("b")],
            ..Default::default()
        };
        match project(&state) {
            RenderPlan::Grid(results) => assert_eq!(results.len(), 2),
            other => panic!("expected a grid, got {other:?}"),
        }
    }

    #[test]
    fn empty_state_message_is_keyed_by_mode() {
        let mut state = SearchState::default();
        assert_eq!(project(&state), RenderPlan::Empty("Start typing to search for images"));

        state.active_mode = SearchMode::ImageUpload;
        assert_eq!(project(&state), RenderPlan::Empty("Upload an image to find similar ones"));
    }

    #[test]
    fn heading_is_keyed_by_mode() {
        assert_eq!(results_heading(SearchMode::TextSearch), "Search Results");
        assert_eq!(results_heading(SearchMode::ImageUpload), "Similar Images");
    }
}
