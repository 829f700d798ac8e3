//! End-to-end theme requests through the offline resolver
//!
//! Drives the same path as the desktop shell: dispatch, run the returned
//! command on the blocking pool, dispatch the outcome.

use std::sync::Arc;

use aetherflow_core::{
    resolve_theme, KeywordResolver, ParticleTemplate, SceneCommand, SceneEvent, SceneState,
    SharedResolver, ThemeError, ThemeResolver, ThemeResult, ThemeSuggestion, FALLBACK_STATUS,
};

async fn run_prompt(state: &mut SceneState, resolver: SharedResolver, prompt: &str) {
    state.dispatch(SceneEvent::InputChanged(prompt.to_string()));
    if let Some(SceneCommand::ResolveTheme { token, prompt }) = state.dispatch(SceneEvent::SubmitPrompt) {
        let outcome = resolve_theme(resolver, token, prompt).await;
        state.dispatch(outcome);
    }
}

struct Offline;

impl ThemeResolver for Offline {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    fn resolve(&self, _prompt: &str) -> ThemeResult<ThemeSuggestion> {
        Err(ThemeError::Transport("dns failure".to_string()))
    }
}

#[tokio::test]
async fn test_neon_sakura_offline() {
    let mut state = SceneState::default();
    run_prompt(&mut state, Arc::new(KeywordResolver::new()), "Neon Sakura").await;

    assert!(!state.ai.is_processing);
    assert_eq!(state.template, ParticleTemplate::Flowers);
    assert_eq!(state.config.color1, "#ff00d4");
    assert_eq!(state.ai_input, "");
    assert!(state.ai.last_message.contains("Neon Sakura"));
}

#[tokio::test]
async fn test_deep_sea_offline() {
    let mut state = SceneState::default();
    state.dispatch(SceneEvent::SelectTemplate(ParticleTemplate::Hearts));
    run_prompt(&mut state, Arc::new(KeywordResolver::new()), "Deep Sea").await;

    assert_eq!(state.template, ParticleTemplate::Galaxy);
    assert_eq!(state.config.color1, "#00c2ff");
    assert_eq!(state.config.color2, "#001f6b");
}

#[tokio::test]
async fn test_transport_failure_falls_back() {
    let mut state = SceneState::default();
    run_prompt(&mut state, Arc::new(Offline), "Neon Sakura").await;

    assert!(!state.ai.is_processing);
    assert_eq!(state.ai.last_message, FALLBACK_STATUS);
    assert_eq!(state.template, ParticleTemplate::Galaxy);
    assert_eq!(state.ai_input, "Neon Sakura");
}

#[tokio::test]
async fn test_same_prompt_same_theme() {
    let resolver: SharedResolver = Arc::new(KeywordResolver::new());
    let mut a = SceneState::default();
    let mut b = SceneState::default();
    run_prompt(&mut a, resolver.clone(), "whispering aurora").await;
    run_prompt(&mut b, resolver, "whispering aurora").await;
    assert_eq!(a.config, b.config);
    assert_eq!(a.template, b.template);
}
