//! AI Status Indicator Component
//!
//! Shows the resolver's state with a pulsing dot next to the status line:
//! - "listening" - idle, ready for a prompt
//! - "transcending" - request in flight
//! - "silent" - last request failed

use aetherflow_core::{AiState, FALLBACK_STATUS};
use dioxus::prelude::*;

/// Resolver status as shown to the user
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AiStatus {
    #[default]
    Listening,
    Transcending,
    Silent,
}

impl AiStatus {
    /// Derive the indicator state from the AI status record
    pub fn from_state(state: &AiState) -> Self {
        if state.is_processing {
            AiStatus::Transcending
        } else if state.last_message == FALLBACK_STATUS {
            AiStatus::Silent
        } else {
            AiStatus::Listening
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AiStatus::Listening => "listening",
            AiStatus::Transcending => "transcending",
            AiStatus::Silent => "silent",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            AiStatus::Listening => "status-dot",
            AiStatus::Transcending => "status-dot active",
            AiStatus::Silent => "status-dot dim",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StatusIndicatorProps {
    pub status: AiStatus,
    /// Status line text
    pub message: String,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusIndicator {
///         status: AiStatus::from_state(&scene.read().ai),
///         message: scene.read().status_line().to_string(),
///     }
/// }
/// ```
#[component]
pub fn StatusIndicator(props: StatusIndicatorProps) -> Element {
    let label = props.status.label();

    rsx! {
        div { class: "ai-status", role: "status", "aria-live": "polite",
            span {
                class: props.status.dot_class(),
                role: "img",
                "aria-label": "{label}",
            }
            span { class: "status-message", "{props.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_state() {
        let idle = AiState::default();
        assert_eq!(AiStatus::from_state(&idle), AiStatus::Listening);

        let busy = AiState {
            is_processing: true,
            ..AiState::default()
        };
        assert_eq!(AiStatus::from_state(&busy), AiStatus::Transcending);

        let failed = AiState {
            is_processing: false,
            last_message: FALLBACK_STATUS.to_string(),
        };
        assert_eq!(AiStatus::from_state(&failed), AiStatus::Silent);
    }

    #[test]
    fn status_labels() {
        assert_eq!(AiStatus::Listening.label(), "listening");
        assert_eq!(AiStatus::Transcending.label(), "transcending");
        assert_eq!(AiStatus::Silent.label(), "silent");
        assert_eq!(AiStatus::Transcending.dot_class(), "status-dot active");
    }
}
