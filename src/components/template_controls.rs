//! Template Controls Component
//!
//! The six template buttons plus a readout of the active configuration.

use aetherflow_core::SceneEvent;
use aetherflow_ui::{GlassPanel, PanelAnchor, TemplatePills};
use dioxus::prelude::*;

use crate::context::{use_dispatch, use_scene};

#[component]
pub fn TemplateControls() -> Element {
    let scene = use_scene();
    let dispatch = use_dispatch();

    let selected = scene.read().template;
    let config = scene.read().config.clone();
    let rows = [
        ("size", format!("{:.3}", config.size)),
        ("density", format!("{:.2}", config.density)),
        ("expansion", format!("{:.2}", config.expansion)),
        ("speed", format!("{:.2}", config.speed)),
    ];

    rsx! {
        GlassPanel {
            anchor: PanelAnchor::TopRight,
            title: "Templates".to_string(),
            TemplatePills {
                selected: selected,
                on_select: move |t| dispatch.call(SceneEvent::SelectTemplate(t)),
            }
            div { class: "config-readout",
                span { "colors" }
                span {
                    span { class: "swatch", style: "background: {config.color1};" }
                    span { class: "swatch", style: "background: {config.color2};" }
                }
                for (name, value) in rows {
                    span { "{name}" }
                    span { "{value}" }
                }
            }
        }
    }
}
