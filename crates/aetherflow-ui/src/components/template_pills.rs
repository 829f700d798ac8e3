//! Template Pills Component
//!
//! Row of the six template buttons. The active template is highlighted in
//! cyan.

use aetherflow_core::ParticleTemplate;
use dioxus::prelude::*;
use tracing::debug;

use super::button::{join_classes, ButtonVariant};

/// Button caption for a template
pub fn template_label(template: ParticleTemplate) -> &'static str {
    match template {
        ParticleTemplate::Hearts => "Hearts",
        ParticleTemplate::Flowers => "Flowers",
        ParticleTemplate::Saturn => "Saturn",
        ParticleTemplate::Fireworks => "Fireworks",
        ParticleTemplate::Galaxy => "Galaxy",
        ParticleTemplate::Dna => "DNA",
    }
}

/// Glyph shown above the caption
pub fn template_glyph(template: ParticleTemplate) -> &'static str {
    match template {
        ParticleTemplate::Hearts => "\u{2665}",
        ParticleTemplate::Flowers => "\u{273F}",
        ParticleTemplate::Saturn => "\u{1FA90}",
        ParticleTemplate::Fireworks => "\u{2738}",
        ParticleTemplate::Galaxy => "\u{2726}",
        ParticleTemplate::Dna => "\u{29D6}",
    }
}

/// CSS classes for one pill
pub fn pill_class(is_selected: bool) -> String {
    join_classes(
        ButtonVariant::Template.class(),
        is_selected.then_some("selected"),
    )
}

#[derive(Clone, PartialEq, Props)]
pub struct TemplatePillsProps {
    /// Currently active template
    pub selected: ParticleTemplate,
    /// Handler called when a template is picked
    pub on_select: EventHandler<ParticleTemplate>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TemplatePills {
///         selected: scene.read().template,
///         on_select: move |t| dispatch(SceneEvent::SelectTemplate(t)),
///     }
/// }
/// ```
#[component]
pub fn TemplatePills(props: TemplatePillsProps) -> Element {
    rsx! {
        div {
            class: "template-pills",
            role: "radiogroup",
            "aria-label": "Particle template",
            for template in ParticleTemplate::ALL {
                {
                    let is_selected = props.selected == template;
                    let class = pill_class(is_selected);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{template}",
                            class: "{class}",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                debug!("Template picked: {}", template);
                                on_select.call(template);
                            },
                            span { class: "template-glyph", "{template_glyph(template)}" }
                            span { class: "template-name", "{template_label(template)}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_label_and_glyph() {
        for template in ParticleTemplate::ALL {
            assert!(!template_label(template).is_empty());
            assert!(!template_glyph(template).is_empty());
        }
        assert_eq!(template_label(ParticleTemplate::Dna), "DNA");
    }

    #[test]
    fn pills_use_template_button_style() {
        assert_eq!(pill_class(false), ButtonVariant::Template.class());
        assert_eq!(pill_class(true), "btn-template selected");
    }

    #[test]
    fn labels_match_wire_names() {
        for template in ParticleTemplate::ALL {
            assert_eq!(template_label(template).to_uppercase(), template.as_str());
        }
    }
}
