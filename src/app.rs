use std::sync::Arc;

use aetherflow_core::{
    build_resolver, resolve_theme, KeywordResolver, SceneCommand, SceneEvent, SceneState,
    SharedResolver,
};
use dioxus::prelude::*;

use crate::components::{
    HandTracker, HelpOverlay, ParticleScene, PromptBar, SideRail, StatusPanel,
    TemplateControls,
};
use crate::context::{get_settings, Dispatch, TrackerSwitch};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the scene state, wires the tracker and resolver into the reducer,
/// and lays the glass panels over the particle canvas.
#[component]
pub fn App() -> Element {
    let settings = use_hook(get_settings);

    let resolver: SharedResolver = use_hook(|| match build_resolver(&settings) {
        Ok(resolver) => resolver,
        Err(e) => {
            tracing::warn!("Falling back to the offline resolver: {}", e);
            Arc::new(KeywordResolver::new())
        }
    });

    let mut scene: Signal<SceneState> = use_signal(SceneState::default);
    let tracker = use_signal(|| TrackerSwitch(settings.tracker_enabled));

    // Every state change goes through here; commands are carried out off the UI thread
    let dispatch: Dispatch = use_callback(move |event: SceneEvent| {
        let command = scene.write().dispatch(event);
        if let Some(SceneCommand::ResolveTheme { token, prompt }) = command {
            let resolver = resolver.clone();
            spawn(async move {
                let outcome = resolve_theme(resolver, token, prompt).await;
                scene.write().dispatch(outcome);
            });
        }
    });

    use_context_provider(|| scene);
    use_context_provider(|| dispatch);
    use_context_provider(|| tracker);

    let tracker_on = use_memo(move || tracker().0);
    let template = use_memo(move || scene.read().template);
    let config = use_memo(move || scene.read().config.clone());
    let gesture = use_memo(move || if tracker_on() { scene.read().gesture } else { None });

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "aether-root",
            ParticleScene {
                template: template,
                config: config,
                gesture: gesture,
                seed: settings.particle_seed,
            }
            StatusPanel {}
            SideRail {}
            HandTracker {
                is_active: tracker_on,
                fps: settings.tracker_fps,
                on_gesture: move |g| dispatch.call(SceneEvent::GestureUpdated(g)),
            }
            TemplateControls {}
            PromptBar {}
            if scene.read().show_help {
                HelpOverlay {}
            }
        }
    }
}
