//! Title card with the active template.

use aetherflow_ui::{GlassPanel, PanelAnchor};
use dioxus::prelude::*;

use crate::context::use_scene;

const SUBTITLE: &str = "Real-time Particle Alchemist";
const STATUS_CAPTION: &str = "Status: Active";

#[component]
pub fn StatusPanel() -> Element {
    let scene = use_scene();
    let template = scene.read().template;

    rsx! {
        GlassPanel {
            anchor: PanelAnchor::TopLeft,
            h1 { class: "app-title", "AetherFlow" }
            p { class: "app-subtitle", "{SUBTITLE}" }
            p { class: "status-caption", "{STATUS_CAPTION}" }
            p { class: "panel-title", "{template}" }
        }
    }
}
