//! Root application component — hero header, search card, results section.

use dioxus::prelude::*;

use crate::results::ResultsSection;
use crate::search::SearchCard;
use crate::state::CLIENT;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Take over the provider client built before launch. Runs exactly once.
    use_hook(|| {
        *CLIENT.write() = crate::INITIAL_CLIENT.lock().unwrap().take();
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Hero header
            header {
                class: "hero",
                h1 {
                    class: "hero-title",
                    svg {
                        class: "hero-spark",
                        width: "30",
                        height: "30",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        path { d: "M9.937 15.5A2 2 0 008.5 14.063l-6.135-1.582a.5.5 0 010-.962L8.5 9.936A2 2 0 009.937 8.5l1.582-6.135a.5.5 0 01.963 0L14.063 8.5A2 2 0 0015.5 9.937l6.135 1.581a.5.5 0 010 .964L15.5 14.063a2 2 0 00-1.437 1.437l-1.582 6.135a.5.5 0 01-.963 0z" }
                        path { d: "M20 3v4" }
                        path { d: "M22 5h-4" }
                    }
                    "PicSeek"
                }
                p {
                    class: "hero-tagline",
                    "Discover millions of stunning images through text search or find visually similar images by uploading your own"
                }
            }

            // Search card (tabs + active panel)
            SearchCard {}

            // Result grid / skeletons / empty state
            ResultsSection {}
        }
    }
}
