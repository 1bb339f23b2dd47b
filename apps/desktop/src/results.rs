//! Results section — heading, filter affordance, and the image grid.

use dioxus::prelude::*;
use picseek_core::render::{project, results_heading, RenderPlan};
use picseek_core::types::SearchResult;

use crate::state::STATE;

#[component]
pub fn ResultsSection() -> Element {
    let state = STATE.read();
    let heading = results_heading(state.active_mode);

    rsx! {
        section {
            class: "results",

            div {
                class: "results-header",
                h2 { class: "results-heading", "{heading}" }
                // Cosmetic for now; the provider query ignores it
                button {
                    class: "filters-btn",
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        polygon { points: "22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" }
                    }
                    "Filters"
                }
            }

            {match project(&state) {
                RenderPlan::Skeletons(count) => rsx! {
                    div {
                        class: "results-grid",
                        for i in 0..count {
                            div { key: "{i}", class: "tile skeleton" }
                        }
                    }
                },
                RenderPlan::Grid(results) => rsx! {
                    div {
                        class: "results-grid",
                        for result in results {
                            ResultTile { key: "{result.id}", result: result.clone() }
                        }
                    }
                },
                RenderPlan::Empty(message) => rsx! {
                    div {
                        class: "results-empty",
                        p { "{message}" }
                    }
                },
            }}
        }
    }
}

/// One image tile. The overlay shows attribution and the like count on hover.
#[component]
fn ResultTile(result: SearchResult) -> Element {
    let alt = result.description.clone().unwrap_or_default();

    rsx! {
        figure {
            class: "tile",
            img {
                class: "tile-image",
                src: "{result.regular_url}",
                alt: "{alt}",
                loading: "lazy",
            }
            figcaption {
                class: "tile-overlay",
                p { class: "tile-owner", "{result.attribution.name}" }
                div {
                    class: "tile-badges",
                    span { class: "tile-badge", "{result.likes} likes" }
                    span { class: "tile-badge", "@{result.attribution.username}" }
                }
            }
        }
    }
}
