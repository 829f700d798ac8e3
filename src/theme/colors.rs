//! Color constants used from Rust.
//!
//! Panel and button colors live in the stylesheet; these are the ones that
//! depend on live data.

use aetherflow_core::HandGesture;

// === GESTURES ===
pub const OPEN_HAND: &str = "#39ff14";
pub const PINCH_HAND: &str = "#ffd700";
pub const FIST_HAND: &str = "#ff3366";
pub const RELAXED_HAND: &str = "rgba(245, 245, 245, 0.5)";

/// Preview dot color for a gesture snapshot
pub fn pose_color(gesture: &HandGesture) -> &'static str {
    match gesture.pose_label() {
        "fist" => FIST_HAND,
        "pinch" => PINCH_HAND,
        "open" => OPEN_HAND,
        _ => RELAXED_HAND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_colors() {
        let fist = HandGesture {
            is_fist: true,
            is_pinching: true,
            ..Default::default()
        };
        assert_eq!(pose_color(&fist), FIST_HAND);

        let pinch = HandGesture {
            is_pinching: true,
            is_open: true,
            ..Default::default()
        };
        assert_eq!(pose_color(&pinch), PINCH_HAND);

        assert_eq!(pose_color(&HandGesture::default()), RELAXED_HAND);
    }
}
