//! Drag-and-drop upload panel for the image-similarity mode.
//!
//! Dropping (or picking) a file only records it. Similarity search against
//! the provider is not wired up, so the grid keeps whatever text-search
//! results are already loaded.

use dioxus::prelude::*;
use picseek_core::machine::Event;

use crate::state::{dispatch, DRAG_ACTIVE};

fn record_first_file(files: Vec<FileData>) {
    if let Some(file) = files.into_iter().next() {
        dispatch(Event::FileDropped { name: file.name(), size: file.size() });
    }
}

#[component]
pub fn Dropzone() -> Element {
    let drag_active = *DRAG_ACTIVE.read();

    rsx! {
        div {
            class: if drag_active { "dropzone drag-active" } else { "dropzone" },
            ondragover: move |e: DragEvent| {
                e.prevent_default();
                *DRAG_ACTIVE.write() = true;
            },
            ondragleave: move |_| {
                *DRAG_ACTIVE.write() = false;
            },
            ondrop: move |e: DragEvent| {
                e.prevent_default();
                *DRAG_ACTIVE.write() = false;
                record_first_file(e.files());
            },

            // Upload icon
            svg {
                class: "dropzone-icon",
                width: "40",
                height: "40",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4" }
                polyline { points: "17 8 12 3 7 8" }
                line { x1: "12", y1: "3", x2: "12", y2: "15" }
            }

            p { class: "dropzone-title", "Drag and drop an image, or click to upload" }
            p { class: "dropzone-hint", "Supports JPG, PNG and GIF files" }

            // The label triggers the hidden picker, so clicking works too
            label {
                class: "dropzone-pick",
                r#for: "file-picker",
                "Choose File"
            }
            input {
                id: "file-picker",
                class: "dropzone-input",
                r#type: "file",
                accept: "image/*",
                onchange: move |e: FormEvent| record_first_file(e.files()),
            }
        }
    }
}
