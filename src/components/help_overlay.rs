//! Help Overlay Component
//!
//! First-launch instructions. Dismissing it is one-way.

use aetherflow_core::SceneEvent;
use aetherflow_ui::{Button, ButtonVariant, CloseButton};
use dioxus::prelude::*;

use crate::context::use_dispatch;

/// (gesture, effect) rows shown in the overlay
const GESTURE_HELP: [(&str, &str); 4] = [
    ("Open palm", "pushes the field outward"),
    ("Fist", "collapses it to the center"),
    ("Pinch", "draws it in as you squeeze"),
    ("Move your hand", "turns the view"),
];

#[component]
pub fn HelpOverlay() -> Element {
    let dispatch = use_dispatch();

    rsx! {
        div { class: "help-overlay",
            div { class: "help-card", role: "dialog", "aria-modal": "true",
                CloseButton { onclick: move |_| dispatch.call(SceneEvent::DismissHelp) }
                h2 { "AetherFlow" }
                ul { class: "help-list",
                    for (gesture, effect) in GESTURE_HELP {
                        li { strong { "{gesture}" } " {effect}" }
                    }
                    li { strong { "Imagine" } " type a vision and let the field become it" }
                }
                Button {
                    variant: ButtonVariant::Start,
                    onclick: move |_| dispatch.call(SceneEvent::DismissHelp),
                    "Begin"
                }
            }
        }
    }
}
