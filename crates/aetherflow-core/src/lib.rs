//! AetherFlow Core Library
//!
//! State, collaborators and simulation behind the AetherFlow particle toy.
//!
//! ## Overview
//!
//! AetherFlow renders a field of particles arranged by one of six templates.
//! A hand tracker feeds gesture snapshots into the scene and a text prompt can
//! be turned into a complete theme (template plus particle configuration) by
//! an AI resolver.
//!
//! ## Pieces
//!
//! - **State**: [`SceneState`] and [`reduce`], an explicit
//!   `(state, event) -> (state, command)` transition function
//! - **Resolvers**: [`ThemeResolver`] with Gemini and offline keyword backends
//! - **Gestures**: [`GestureSource`] plus a landmark classifier
//! - **Particles**: [`ParticleField`], the per-frame simulation and projection
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use aetherflow_core::{resolve_theme, KeywordResolver, SceneCommand, SceneEvent, SceneState};
//!
//! let mut scene = SceneState::default();
//! scene.dispatch(SceneEvent::InputChanged("Neon Sakura".into()));
//!
//! if let Some(SceneCommand::ResolveTheme { token, prompt }) = scene.dispatch(SceneEvent::SubmitPrompt) {
//!     let outcome = resolve_theme(Arc::new(KeywordResolver::new()), token, prompt).await;
//!     scene.dispatch(outcome);
//! }
//! ```

pub mod error;
pub mod gesture;
pub mod logging;
pub mod particles;
pub mod resolver;
pub mod settings;
pub mod state;
pub mod types;

// Re-exports
pub use error::{ThemeError, ThemeResult};
pub use gesture::{
    spawn_gesture_source, ClassifierConfig, GestureSource, HandLandmarks, HandPose, Landmark,
    SimulatedHand,
};
pub use particles::{ParticleField, ProjectedParticle, BASE_PARTICLES, MAX_PARTICLES};
pub use resolver::{
    build_resolver, resolve_theme, GeminiResolver, KeywordResolver, SharedResolver, ThemeResolver,
};
pub use settings::{ResolverKind, Settings};
pub use state::{reduce, SceneCommand, SceneEvent, SceneState, FALLBACK_STATUS, PROCESSING_STATUS};
pub use types::*;
