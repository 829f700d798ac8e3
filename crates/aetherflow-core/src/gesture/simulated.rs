//! Synthetic hand for running without a camera.
//!
//! The palm drifts on a Lissajous path while the hand cycles through
//! open, pinch, open, fist. Each frame is built as landmarks and pushed
//! through the classifier, exactly like a camera-backed source would.

use super::landmarks::{ClassifierConfig, HandLandmarks, HandPose};
use super::GestureSource;
use crate::types::HandGesture;

/// Seconds per keyframe in the pose cycle
const POSE_HOLD: f32 = 2.5;

/// Fraction of each keyframe spent blending into the next
const BLEND: f32 = 0.3;

const CYCLE: [HandPose; 4] = [HandPose::Open, HandPose::Pinch, HandPose::Open, HandPose::Fist];

/// Deterministic synthetic [`GestureSource`]
#[derive(Debug, Clone)]
pub struct SimulatedHand {
    time: f32,
    scale: f32,
    classifier: ClassifierConfig,
}

impl SimulatedHand {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            scale: 0.15,
            classifier: ClassifierConfig::default(),
        }
    }

    /// Start at `time` seconds into the cycle
    pub fn starting_at(time: f32) -> Self {
        Self {
            time,
            ..Self::new()
        }
    }

    /// Landmarks at the current time
    pub fn landmarks(&self) -> HandLandmarks {
        let t = self.time;
        let cx = 0.5 + 0.25 * (t * 0.7).sin();
        let cy = 0.5 + 0.18 * (t * 1.1 + 0.5).sin();
        let depth = -0.05 * (t * 0.4).sin();

        let slot = (t / POSE_HOLD).floor();
        let within = t / POSE_HOLD - slot;
        let index = (slot as usize) % CYCLE.len();
        let current = HandLandmarks::pose(CYCLE[index], cx, cy, self.scale);

        let hand = if within > 1.0 - BLEND {
            let next = HandLandmarks::pose(CYCLE[(index + 1) % CYCLE.len()], cx, cy, self.scale);
            current.lerp(&next, (within - (1.0 - BLEND)) / BLEND)
        } else {
            current
        };
        hand.with_depth(depth)
    }
}

impl Default for SimulatedHand {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureSource for SimulatedHand {
    fn next_gesture(&mut self, dt: f32) -> Option<HandGesture> {
        self.time += dt.max(0.0);
        Some(self.landmarks().classify(&self.classifier))
    }
}
