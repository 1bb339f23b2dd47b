//! Search card — mode tabs plus the panel for whichever mode is active.

mod dropzone;
mod search_input;
mod trending;

use dioxus::prelude::*;
use picseek_core::machine::Event;
use picseek_core::types::SearchMode;

use crate::state::{dispatch, STATE};
use dropzone::Dropzone;
use search_input::SearchInput;
use trending::TrendingTopics;

/// Card holding the mode tabs and the active search panel. Switching tabs
/// only swaps the panel; the query and any fetched results stay put.
#[component]
pub fn SearchCard() -> Element {
    let mode = STATE.read().active_mode;

    rsx! {
        section {
            class: "search-card",

            // Mode tabs
            div {
                class: "mode-tabs",
                button {
                    class: if mode == SearchMode::TextSearch { "mode-tab active" } else { "mode-tab" },
                    onclick: move |_| dispatch(Event::ModeSwitched(SearchMode::TextSearch)),
                    svg {
                        width: "18",
                        height: "18",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        circle { cx: "11", cy: "11", r: "8" }
                        line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    }
                    "Text Search"
                }
                button {
                    class: if mode == SearchMode::ImageUpload { "mode-tab active" } else { "mode-tab" },
                    onclick: move |_| dispatch(Event::ModeSwitched(SearchMode::ImageUpload)),
                    svg {
                        width: "18",
                        height: "18",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
                        circle { cx: "9", cy: "9", r: "2" }
                        path { d: "m21 15-5-5L5 21" }
                    }
                    "Image Search"
                }
            }

            // Active panel
            if mode == SearchMode::TextSearch {
                SearchInput {}
                TrendingTopics {}
            } else {
                Dropzone {}
            }
        }
    }
}
