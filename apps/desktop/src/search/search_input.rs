//! Hero search input with an immediate-search button.

use dioxus::prelude::*;
use picseek_core::machine::Event;

use crate::state::{dispatch, STATE};

#[component]
pub fn SearchInput() -> Element {
    let query = STATE.read().query.clone();

    rsx! {
        div {
            class: "search-input-row",

            // Search icon
            svg {
                class: "search-icon",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            // Input — every keystroke reschedules the debounce timer
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search images...",
                value: "{query}",
                autofocus: true,
                oninput: move |e: FormEvent| dispatch(Event::QueryChanged(e.value())),
            }

            // Fires the fetch immediately, skipping the debounce wait
            button {
                class: "search-submit",
                onclick: move |_| dispatch(Event::SearchSubmitted),
                "Search"
            }
        }
    }
}
