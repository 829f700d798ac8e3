//! Scene context for AetherFlow.
//!
//! The root component owns the [`SceneState`] signal and the dispatch
//! callback; children reach them through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let scene = use_scene();
//! let dispatch = use_dispatch();
//!
//! dispatch.call(SceneEvent::SelectTemplate(ParticleTemplate::Dna));
//! let busy = scene.read().ai.is_processing;
//! ```

use aetherflow_core::{SceneEvent, SceneState, Settings};
use dioxus::prelude::*;

/// Sends an event through the scene reducer and carries out its command
pub type Dispatch = Callback<SceneEvent>;

/// Get the launch settings.
pub fn get_settings() -> Settings {
    crate::get_settings()
}

/// Hook to read the scene state.
pub fn use_scene() -> Signal<SceneState> {
    use_context::<Signal<SceneState>>()
}

/// Hook to get the dispatch callback.
pub fn use_dispatch() -> Dispatch {
    use_context::<Dispatch>()
}

/// Whether the hand tracker is switched on.
///
/// Kept outside [`SceneState`]: it is a shell setting, not scene data.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TrackerSwitch(pub bool);

/// Hook to read or flip the tracker switch.
pub fn use_tracker_switch() -> Signal<TrackerSwitch> {
    use_context::<Signal<TrackerSwitch>>()
}
