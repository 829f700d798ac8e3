//! Hand Tracker Component
//!
//! Runs a gesture source while `is_active` is set and forwards every
//! snapshot to `on_gesture`. A small preview shows where the palm is and
//! which pose was recognized.

use aetherflow_core::{spawn_gesture_source, HandGesture, SimulatedHand};
use aetherflow_ui::{Button, ButtonVariant, GlassPanel, PanelAnchor};
use dioxus::prelude::*;

use crate::context::{use_tracker_switch, TrackerSwitch};
use crate::theme::colors::pose_color;

#[derive(Props, Clone, PartialEq)]
pub struct HandTrackerProps {
    /// Tracker runs only while this is true
    pub is_active: ReadOnlySignal<bool>,
    /// Frames per second requested from the source
    #[props(default = 30)]
    pub fps: u32,
    /// Called with every snapshot
    pub on_gesture: EventHandler<HandGesture>,
}

/// Preview position for a palm, in percent of the preview box
fn preview_position(g: &HandGesture) -> (f32, f32) {
    let left = (g.palm_x.clamp(-1.0, 1.0) + 1.0) * 50.0;
    let top = (1.0 - g.palm_y.clamp(-1.0, 1.0)) * 50.0;
    (left, top)
}

#[component]
pub fn HandTracker(props: HandTrackerProps) -> Element {
    let mut switch = use_tracker_switch();
    let mut last: Signal<Option<HandGesture>> = use_signal(|| None);
    let mut task: Signal<Option<Task>> = use_signal(|| None);

    let is_active = props.is_active;
    let fps = props.fps;
    let on_gesture = props.on_gesture;

    // Restart or stop the source whenever the flag flips
    use_effect(move || {
        let active = is_active();

        if let Some(running) = task.write().take() {
            running.cancel();
        }

        if active {
            tracing::info!("Hand tracker started at {} fps", fps);
            let handle = spawn(async move {
                let mut snapshots = spawn_gesture_source(SimulatedHand::new(), fps);
                while let Some(g) = snapshots.recv().await {
                    last.set(Some(g));
                    on_gesture.call(g);
                }
            });
            task.set(Some(handle));
        } else {
            tracing::info!("Hand tracker stopped");
            last.set(None);
        }
    });

    let toggle_label = if is_active() { "Pause tracker" } else { "Resume tracker" };

    rsx! {
        GlassPanel {
            anchor: PanelAnchor::BottomRight,
            title: "Hand".to_string(),
            div { class: "hand-preview",
                if let Some(g) = last() {
                    {
                        let (left, top) = preview_position(&g);
                        let dot_style = format!(
                            "left: {:.1}%; top: {:.1}%; background: {};",
                            left,
                            top,
                            pose_color(&g)
                        );
                        rsx! {
                            span { class: "hand-dot", style: "{dot_style}" }
                        }
                    }
                }
            }
            match last() {
                Some(g) => {
                    let readout = format!("{}  pinch {:.2}", g.pose_label(), g.pinch_strength);
                    rsx! {
                        p { class: "hand-readout", "{readout}" }
                    }
                }
                None => rsx! {
                    p { class: "hand-readout tracker-off", "no hand" }
                },
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    let on = switch().0;
                    switch.set(TrackerSwitch(!on));
                },
                "{toggle_label}"
            }
        }
    }
}
