//! Frosted glass container floating over the canvas.

use dioxus::prelude::*;

use super::button::join_classes;

/// Where a panel is pinned on screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PanelAnchor {
    #[default]
    TopLeft,
    TopRight,
    BottomRight,
    BottomCenter,
}

impl PanelAnchor {
    pub fn class(&self) -> &'static str {
        match self {
            PanelAnchor::TopLeft => "anchor-top-left",
            PanelAnchor::TopRight => "anchor-top-right",
            PanelAnchor::BottomRight => "anchor-bottom-right",
            PanelAnchor::BottomCenter => "anchor-bottom-center",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GlassPanelProps {
    #[props(default)]
    pub anchor: PanelAnchor,
    /// Small uppercase heading
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn GlassPanel(props: GlassPanelProps) -> Element {
    let base = format!("glass-panel {}", props.anchor.class());
    let full_class = join_classes(&base, props.class.as_deref());

    rsx! {
        section { class: "{full_class}",
            if let Some(title) = &props.title {
                h3 { class: "panel-title", "{title}" }
            }
            {props.children}
        }
    }
}
