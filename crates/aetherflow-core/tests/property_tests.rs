//! Property-based tests for the scene reducer and particle configuration
//!
//! Uses proptest to check invariants over arbitrary event sequences.

use aetherflow_core::{
    HandGesture, ParticleConfig, ParticleField, ParticleTemplate, RequestToken, SceneCommand,
    SceneEvent, SceneState, ThemeSuggestion, MAX_PARTICLES,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn template_strategy() -> impl Strategy<Value = ParticleTemplate> {
    prop::sample::select(ParticleTemplate::ALL.to_vec())
}

fn config_strategy() -> impl Strategy<Value = ParticleConfig> {
    (
        "[#0-9a-fA-Fxyz]{0,8}",
        "[#0-9a-fA-Fxyz]{0,8}",
        -1.0f32..10.0,
        -1.0f32..10.0,
        -1.0f32..10.0,
        -1.0f32..10.0,
    )
        .prop_map(|(color1, color2, size, density, expansion, speed)| ParticleConfig {
            color1,
            color2,
            size,
            density,
            expansion,
            speed,
        })
}

fn gesture_strategy() -> impl Strategy<Value = HandGesture> {
    (any::<bool>(), any::<bool>(), any::<bool>(), -1.0f32..1.0, -1.0f32..1.0, 0.0f32..1.0)
        .prop_map(|(is_pinching, is_open, is_fist, palm_x, palm_y, pinch_strength)| HandGesture {
            is_pinching,
            is_open,
            is_fist,
            palm_x,
            palm_y,
            palm_z: 0.0,
            pinch_strength,
        })
}

/// Events the UI and the resolver can produce
#[derive(Debug, Clone)]
enum Op {
    Type(String),
    Submit,
    /// Answer the request `n` tokens back from the newest one issued
    Resolve(u64, ParticleTemplate, ParticleConfig),
    Fail(u64),
    Select(ParticleTemplate),
    Gesture(HandGesture),
    Dismiss,
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            2 => "[a-zA-Z ]{0,12}".prop_map(Op::Type),
            2 => Just(Op::Submit),
            2 => (0..3u64, template_strategy(), config_strategy())
                .prop_map(|(back, t, c)| Op::Resolve(back, t, c)),
            1 => (0..3u64).prop_map(Op::Fail),
            1 => template_strategy().prop_map(Op::Select),
            1 => gesture_strategy().prop_map(Op::Gesture),
            1 => Just(Op::Dismiss),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Sanitizing always lands inside the documented ranges and is stable
    #[test]
    fn sanitized_config_in_range(config in config_strategy()) {
        let clean = config.sanitized();
        let in_range = |v: f32, (lo, hi): (f32, f32)| v >= lo && v <= hi;
        prop_assert!(in_range(clean.size, ParticleConfig::SIZE_RANGE));
        prop_assert!(in_range(clean.density, ParticleConfig::DENSITY_RANGE));
        prop_assert!(in_range(clean.expansion, ParticleConfig::EXPANSION_RANGE));
        prop_assert!(in_range(clean.speed, ParticleConfig::SPEED_RANGE));
        prop_assert_eq!(clean.sanitized(), clean);
    }

    /// Processing is true exactly while a request is in flight, and at most one
    /// command is ever outstanding
    #[test]
    fn single_request_in_flight(ops in ops_strategy(60)) {
        let mut state = SceneState::default();
        let mut newest = 0u64;

        for op in ops {
            let event = match op {
                Op::Type(text) => SceneEvent::InputChanged(text),
                Op::Submit => SceneEvent::SubmitPrompt,
                Op::Resolve(back, template, config) => SceneEvent::ThemeResolved {
                    token: RequestToken(newest.saturating_sub(back)),
                    suggestion: ThemeSuggestion { template, config, message: "ok".to_string() },
                },
                Op::Fail(back) => SceneEvent::ThemeFailed {
                    token: RequestToken(newest.saturating_sub(back)),
                    reason: "no".to_string(),
                },
                Op::Select(template) => SceneEvent::SelectTemplate(template),
                Op::Gesture(g) => SceneEvent::GestureUpdated(g),
                Op::Dismiss => SceneEvent::DismissHelp,
            };

            let is_select = matches!(event, SceneEvent::SelectTemplate(_));
            let before = state.clone();
            let was_busy = state.in_flight().is_some();
            if let Some(SceneCommand::ResolveTheme { token, prompt }) = state.dispatch(event) {
                prop_assert!(!was_busy);
                prop_assert!(token.0 > newest);
                prop_assert!(!prompt.trim().is_empty());
                newest = token.0;
            }

            if is_select {
                prop_assert_eq!(state.gesture, before.gesture);
                prop_assert_eq!(&state.config, &before.config);
                prop_assert_eq!(&state.ai, &before.ai);
            }

            prop_assert_eq!(state.ai.is_processing, state.in_flight().is_some());
            prop_assert_eq!(state.config.sanitized(), state.config.clone());
        }
    }

    /// Particle count follows density and never exceeds the cap
    #[test]
    fn particle_count_capped(template in template_strategy(), config in config_strategy()) {
        let field = ParticleField::new(template, &config, 11);
        prop_assert!(field.len() >= 1);
        prop_assert!(field.len() <= MAX_PARTICLES);
        prop_assert_eq!(field.len(), ParticleField::particle_count_for(config.sanitized().density));
    }

    /// Any gesture keeps the field finite
    #[test]
    fn step_stays_finite(
        template in template_strategy(),
        gestures in prop::collection::vec(prop::option::of(gesture_strategy()), 1..30),
    ) {
        let config = ParticleConfig { density: 0.1, ..ParticleConfig::default() };
        let mut field = ParticleField::new(template, &config, 5);
        for g in &gestures {
            field.step(1.0 / 30.0, g.as_ref());
        }
        prop_assert!(field.mean_radius().is_finite());
        for p in field.project(640.0, 480.0) {
            prop_assert!(p.x.is_finite() && p.y.is_finite() && p.radius > 0.0);
        }
    }
}
