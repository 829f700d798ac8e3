//! Prompt Input Component
//!
//! Single-line text field for theme prompts. Enter submits; the field stays
//! editable while a request is pending.

use dioxus::prelude::*;

/// Properties for the PromptInput component
#[derive(Clone, PartialEq, Props)]
pub struct PromptInputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when Enter is pressed
    pub onsubmit: EventHandler<()>,
    #[props(default = "Describe a vision... (e.g. Neon Sakura)".to_string())]
    pub placeholder: String,
}

/// Whether a key press should submit the prompt
pub fn is_submit_key(key: &Key, modifiers: Modifiers) -> bool {
    *key == Key::Enter && !modifiers.contains(Modifiers::SHIFT)
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PromptInput {
///         value: scene.read().ai_input.clone(),
///         oninput: move |text| dispatch(SceneEvent::InputChanged(text)),
///         onsubmit: move |_| dispatch(SceneEvent::SubmitPrompt),
///     }
/// }
/// ```
#[component]
pub fn PromptInput(props: PromptInputProps) -> Element {
    rsx! {
        input {
            class: "prompt-input",
            r#type: "text",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            spellcheck: false,
            oninput: move |e| props.oninput.call(e.value()),
            onkeydown: move |e: KeyboardEvent| {
                if is_submit_key(&e.key(), e.modifiers()) {
                    e.prevent_default();
                    props.onsubmit.call(());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits() {
        assert!(is_submit_key(&Key::Enter, Modifiers::empty()));
        assert!(is_submit_key(&Key::Enter, Modifiers::CONTROL));
    }

    #[test]
    fn shift_enter_and_other_keys_do_not() {
        assert!(!is_submit_key(&Key::Enter, Modifiers::SHIFT));
        assert!(!is_submit_key(&Key::Escape, Modifiers::empty()));
        assert!(!is_submit_key(&Key::Character("a".to_string()), Modifiers::empty()));
    }
}
