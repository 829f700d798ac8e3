//! Prompt Bar Component
//!
//! Text input plus the "Imagine" button. Enter and the button both submit;
//! the reducer ignores blank prompts and submissions while one is pending.

use aetherflow_core::SceneEvent;
use aetherflow_ui::{AiStatus, Button, ButtonVariant, GlassPanel, PanelAnchor, PromptInput, StatusIndicator};
use dioxus::prelude::*;

use crate::context::{use_dispatch, use_scene};

#[component]
pub fn PromptBar() -> Element {
    let scene = use_scene();
    let dispatch = use_dispatch();

    let state = scene.read();
    let input = state.ai_input.clone();
    let can_submit = state.can_submit() && !input.trim().is_empty();
    let label = state.submit_label();
    let status = AiStatus::from_state(&state.ai);
    let message = state.status_line().to_string();
    drop(state);

    rsx! {
        GlassPanel {
            anchor: PanelAnchor::BottomCenter,
            div { class: "prompt-row",
                PromptInput {
                    value: input,
                    oninput: move |text| dispatch.call(SceneEvent::InputChanged(text)),
                    onsubmit: move |_| dispatch.call(SceneEvent::SubmitPrompt),
                }
                Button {
                    variant: ButtonVariant::Imagine,
                    disabled: !can_submit,
                    onclick: move |_| dispatch.call(SceneEvent::SubmitPrompt),
                    "{label}"
                }
            }
            StatusIndicator { status: status, message: message }
        }
    }
}
