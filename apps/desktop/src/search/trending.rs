//! Trending topic chips under the search input.

use dioxus::prelude::*;
use picseek_core::machine::Event;
use picseek_core::types::TRENDING_TOPICS;

use crate::state::dispatch;

/// One-click canned queries. A chip behaves exactly like typing the topic,
/// debounce and all.
#[component]
pub fn TrendingTopics() -> Element {
    rsx! {
        div {
            class: "trending",
            span { class: "trending-label", "Trending Topics" }
            div {
                class: "trending-chips",
                for topic in TRENDING_TOPICS {
                    button {
                        key: "{topic}",
                        class: "trending-chip",
                        onclick: move |_| dispatch(Event::QueryChanged(topic.to_string())),
                        "{topic}"
                    }
                }
            }
        }
    }
}
