//! Particle Scene Component
//!
//! Full-window SVG canvas. A frame loop owns the [`ParticleField`], feeds it
//! the latest template, config and gesture, and publishes the projected
//! particles for rendering.

use std::time::{Duration, Instant};

use aetherflow_core::{HandGesture, ParticleConfig, ParticleField, ParticleTemplate, ProjectedParticle};
use dioxus::prelude::*;
use tokio::time::MissedTickBehavior;

/// Logical canvas size; the SVG scales it to the window
const VIEW_WIDTH: f32 = 1280.0;
const VIEW_HEIGHT: f32 = 800.0;

/// ~30 fps
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Props, Clone, PartialEq)]
pub struct ParticleSceneProps {
    pub template: ReadOnlySignal<ParticleTemplate>,
    pub config: ReadOnlySignal<ParticleConfig>,
    /// Latest hand snapshot, `None` when no hand is tracked
    pub gesture: ReadOnlySignal<Option<HandGesture>>,
    /// Layout seed
    pub seed: u64,
}

#[component]
pub fn ParticleScene(props: ParticleSceneProps) -> Element {
    let mut frame: Signal<Vec<ProjectedParticle>> = use_signal(Vec::new);

    let template = props.template;
    let config = props.config;
    let gesture = props.gesture;
    let seed = props.seed;

    use_future(move || async move {
        let mut field = ParticleField::new(*template.peek(), &config.peek(), seed);
        tracing::info!("Particle field ready: {} x{}", field.template(), field.len());

        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last = Instant::now();

        loop {
            ticker.tick().await;
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;

            field.set_template(*template.peek());
            field.set_config(&config.peek());
            field.step(dt, gesture.peek().as_ref());
            frame.set(field.project(VIEW_WIDTH, VIEW_HEIGHT));
        }
    });

    rsx! {
        svg {
            class: "particle-canvas",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid slice",
            for (i, p) in frame.read().iter().enumerate() {
                circle {
                    key: "{i}",
                    cx: format!("{:.1}", p.x),
                    cy: format!("{:.1}", p.y),
                    r: format!("{:.2}", p.radius),
                    fill: p.color.to_hex(),
                    fill_opacity: format!("{:.2}", p.alpha),
                }
            }
        }
    }
}
