//! Scene state and its transition function
//!
//! Everything the UI shows lives in one [`SceneState`]. Events from buttons,
//! the gesture tracker and the theme resolver go through [`reduce`], which
//! returns the next state plus an optional [`SceneCommand`] the shell has to
//! carry out (currently only "resolve this prompt").
//!
//! At most one theme request is in flight. Submissions made while one is
//! pending are rejected, and results carrying any other [`RequestToken`] are
//! dropped, so a slow answer can never overwrite a newer one.

use tracing::{debug, info, warn};

use crate::types::{
    AiState, HandGesture, ParticleConfig, ParticleTemplate, RequestToken, ThemeSuggestion,
};

/// Status line while a theme request is pending
pub const PROCESSING_STATUS: &str = "Transcending thought...";

/// Status line after the resolver failed
pub const FALLBACK_STATUS: &str = "The ether is silent. Try another vision.";

/// Everything that can happen to the scene
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// Tracker delivered a new snapshot
    GestureUpdated(HandGesture),
    /// Prompt input text changed
    InputChanged(String),
    /// User submitted the prompt
    SubmitPrompt,
    /// Resolver answered
    ThemeResolved {
        token: RequestToken,
        suggestion: ThemeSuggestion,
    },
    /// Resolver failed
    ThemeFailed { token: RequestToken, reason: String },
    /// One of the template buttons was pressed
    SelectTemplate(ParticleTemplate),
    /// Help overlay closed
    DismissHelp,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneCommand {
    /// Ask the theme resolver about `prompt` and feed the outcome back with `token`
    ResolveTheme { token: RequestToken, prompt: String },
}

/// Complete UI state of the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub template: ParticleTemplate,
    pub config: ParticleConfig,
    pub gesture: Option<HandGesture>,
    pub ai_input: String,
    pub ai: AiState,
    pub show_help: bool,
    in_flight: Option<RequestToken>,
    next_token: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            template: ParticleTemplate::Galaxy,
            config: ParticleConfig::default(),
            gesture: None,
            ai_input: String::new(),
            ai: AiState::default(),
            show_help: true,
            in_flight: None,
            next_token: 1,
        }
    }
}

impl SceneState {
    /// Apply `event` in place and return the command it produced, if any
    pub fn dispatch(&mut self, event: SceneEvent) -> Option<SceneCommand> {
        let (next, command) = reduce(std::mem::take(self), event);
        *self = next;
        command
    }

    /// Token of the pending theme request
    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    /// Whether the prompt form accepts a submission right now
    pub fn can_submit(&self) -> bool {
        !self.ai.is_processing
    }

    /// Text for the status panel
    pub fn status_line(&self) -> &str {
        if self.ai.is_processing {
            PROCESSING_STATUS
        } else {
            &self.ai.last_message
        }
    }

    /// Caption of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.ai.is_processing {
            "Thinking..."
        } else {
            "Imagine"
        }
    }
}

/// Scene transition function
pub fn reduce(mut state: SceneState, event: SceneEvent) -> (SceneState, Option<SceneCommand>) {
    match event {
        SceneEvent::GestureUpdated(gesture) => {
            state.gesture = Some(gesture);
            (state, None)
        }
        SceneEvent::InputChanged(text) => {
            state.ai_input = text;
            (state, None)
        }
        SceneEvent::SubmitPrompt => {
            let prompt = state.ai_input.trim();
            if prompt.is_empty() {
                return (state, None);
            }
            if let Some(pending) = state.in_flight {
                debug!("Submission rejected, {} still in flight", pending);
                return (state, None);
            }

            let prompt = prompt.to_string();
            let token = RequestToken(state.next_token);
            state.next_token += 1;
            state.in_flight = Some(token);
            state.ai.is_processing = true;
            info!("Theme request {} submitted: {:?}", token, prompt);

            (state, Some(SceneCommand::ResolveTheme { token, prompt }))
        }
        SceneEvent::ThemeResolved { token, suggestion } => {
            if state.in_flight != Some(token) {
                debug!("Ignoring stale theme result {}", token);
                return (state, None);
            }

            info!(
                "Theme request {} resolved to {}",
                token, suggestion.template
            );
            state.template = suggestion.template;
            state.config = suggestion.config.sanitized();
            state.ai = AiState {
                is_processing: false,
                last_message: suggestion.message,
            };
            state.ai_input.clear();
            state.in_flight = None;
            (state, None)
        }
        SceneEvent::ThemeFailed { token, reason } => {
            if state.in_flight != Some(token) {
                debug!("Ignoring stale theme failure {}", token);
                return (state, None);
            }

            warn!("Theme request {} failed: {}", token, reason);
            state.ai = AiState {
                is_processing: false,
                last_message: FALLBACK_STATUS.to_string(),
            };
            state.in_flight = None;
            (state, None)
        }
        SceneEvent::SelectTemplate(template) => {
            state.template = template;
            (state, None)
        }
        SceneEvent::DismissHelp => {
            state.show_help = false;
            (state, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(prompt: &str) -> (SceneState, RequestToken) {
        let mut state = SceneState::default();
        state.dispatch(SceneEvent::InputChanged(prompt.to_string()));
        match state.dispatch(SceneEvent::SubmitPrompt) {
            Some(SceneCommand::ResolveTheme { token, .. }) => (state, token),
            None => panic!("expected a resolve command"),
        }
    }

    #[test]
    fn defaults() {
        let state = SceneState::default();
        assert_eq!(state.template, ParticleTemplate::Galaxy);
        assert!(state.show_help);
        assert!(state.gesture.is_none());
        assert!(state.in_flight().is_none());
        assert_eq!(state.submit_label(), "Imagine");
    }

    #[test]
    fn submit_trims_prompt() {
        let mut state = SceneState::default();
        state.dispatch(SceneEvent::InputChanged("  Deep Sea \n".to_string()));
        let command = state.dispatch(SceneEvent::SubmitPrompt);
        assert_eq!(
            command,
            Some(SceneCommand::ResolveTheme {
                token: RequestToken(1),
                prompt: "Deep Sea".to_string()
            })
        );
        // Input is only cleared once the answer arrives
        assert_eq!(state.ai_input, "  Deep Sea \n");
    }

    #[test]
    fn processing_labels() {
        let (state, _) = submitted("aurora");
        assert_eq!(state.status_line(), PROCESSING_STATUS);
        assert_eq!(state.submit_label(), "Thinking...");
        assert!(!state.can_submit());
    }

    #[test]
    fn tokens_increase() {
        let (mut state, first) = submitted("one");
        state.dispatch(SceneEvent::ThemeFailed {
            token: first,
            reason: "offline".to_string(),
        });
        state.dispatch(SceneEvent::InputChanged("two".to_string()));
        let second = match state.dispatch(SceneEvent::SubmitPrompt) {
            Some(SceneCommand::ResolveTheme { token, .. }) => token,
            None => panic!("expected a resolve command"),
        };
        assert!(second > first);
    }

    #[test]
    fn failure_keeps_input_and_theme() {
        let (mut state, token) = submitted("Neon Sakura");
        let before = state.config.clone();
        state.dispatch(SceneEvent::ThemeFailed {
            token,
            reason: "timeout".to_string(),
        });
        assert!(!state.ai.is_processing);
        assert_eq!(state.ai.last_message, FALLBACK_STATUS);
        assert_eq!(state.ai_input, "Neon Sakura");
        assert_eq!(state.config, before);
        assert_eq!(state.template, ParticleTemplate::Galaxy);
        assert!(state.can_submit());
    }
}
