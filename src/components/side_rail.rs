//! Decorative vertical rail on the right edge.

use dioxus::prelude::*;

const RESONANCE_HZ: u32 = 144;

fn rail_caption(hz: u32) -> String {
    format!("System Resonance: {}Hz // Quantum Particles Enabled", hz)
}

#[component]
pub fn SideRail() -> Element {
    let caption = rail_caption(RESONANCE_HZ);

    rsx! {
        aside { class: "side-rail", "aria-hidden": "true",
            div { class: "side-rail-rule" }
            p { class: "side-rail-caption", "{caption}" }
            div { class: "side-rail-rule" }
        }
    }
}
