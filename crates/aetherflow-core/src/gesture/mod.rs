//! Gesture sources
//!
//! A [`GestureSource`] produces one [`HandGesture`] snapshot per frame.
//! [`spawn_gesture_source`] drives a source on a tokio task at a fixed frame
//! rate and hands the snapshots over a channel; consumers don't need to know
//! whether they came from a camera pipeline or the [`SimulatedHand`].

mod landmarks;
mod simulated;

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::types::HandGesture;

pub use landmarks::{
    ClassifierConfig, HandLandmarks, HandPose, Landmark, INDEX_TIP, LANDMARK_COUNT, THUMB_TIP,
    WRIST,
};
pub use simulated::SimulatedHand;

/// Snapshots buffered between the tracker task and the UI
const GESTURE_CHANNEL_CAPACITY: usize = 4;

/// Anything that can deliver hand snapshots frame by frame
pub trait GestureSource: Send + 'static {
    /// Advance by `dt` seconds and return the hand seen in this frame, if any
    fn next_gesture(&mut self, dt: f32) -> Option<HandGesture>;
}

/// Run `source` at `fps` frames per second on its own task and return the
/// receiving end. Frames are dropped when the receiver lags; the task ends
/// once the receiver is dropped.
pub fn spawn_gesture_source<G: GestureSource>(mut source: G, fps: u32) -> mpsc::Receiver<HandGesture> {
    let (tx, rx) = mpsc::channel(GESTURE_CHANNEL_CAPACITY);
    let period = Duration::from_secs_f32(1.0 / fps.clamp(1, 240) as f32);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        debug!("Gesture source running at {} fps", fps);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }
            let Some(gesture) = source.next_gesture(period.as_secs_f32()) else {
                continue;
            };
            match tx.try_send(gesture) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => trace!("Gesture frame dropped, receiver lagging"),
                Err(TrySendError::Closed(_)) => break,
            }
        }

        debug!("Gesture source stopped");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl GestureSource for Counter {
        fn next_gesture(&mut self, _dt: f32) -> Option<HandGesture> {
            self.0 += 1;
            Some(HandGesture {
                palm_x: self.0 as f32,
                ..Default::default()
            })
        }
    }

    struct NoHand;

    impl GestureSource for NoHand {
        fn next_gesture(&mut self, _dt: f32) -> Option<HandGesture> {
            None
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_frames_in_order() {
        let mut rx = spawn_gesture_source(Counter(0), 30);
        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.palm_x, 1.0);
        assert_eq!(second.palm_x, 2.0);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_frames_are_skipped() {
        let mut rx = spawn_gesture_source(NoHand, 60);
        let waited = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
        assert!(waited.is_err());
    }
}
