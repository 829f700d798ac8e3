//! Hand landmarks and the pose classifier.
//!
//! Landmarks follow the common 21-point hand layout: wrist, then four points
//! per digit from base to tip (thumb 1-4, index 5-8, middle 9-12, ring
//! 13-16, pinky 17-20). Coordinates are normalized image coordinates: x and y
//! in 0..=1 with y pointing down, z negative toward the camera.

use crate::types::HandGesture;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const RING_MCP: usize = 13;
pub const PINKY_MCP: usize = 17;

/// MCP joint of each finger (index, middle, ring, pinky)
const FINGER_MCPS: [usize; 4] = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// A single tracked point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn lerp(&self, other: &Landmark, t: f32) -> Landmark {
        Landmark::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

/// Canonical poses the synthetic hand can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPose {
    Open,
    Pinch,
    Fist,
}

/// Thresholds, in units of hand scale (wrist to middle MCP)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Thumb-tip to index-tip distance below which the hand pinches
    pub pinch_threshold: f32,
    /// Mean fingertip-to-palm distance below which the hand is a fist
    pub fist_threshold: f32,
    /// A finger counts as extended when its tip is this much farther from
    /// the wrist than its PIP joint
    pub extension_ratio: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.3,
            fist_threshold: 0.8,
            extension_ratio: 1.1,
        }
    }
}

/// One detected hand
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    pub points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a hand in `pose` centered near `(cx, cy)` with the given scale
    /// (wrist to middle MCP, in image units).
    pub fn pose(pose: HandPose, cx: f32, cy: f32, scale: f32) -> Self {
        let local = match pose {
            HandPose::Open => OPEN_POSE,
            HandPose::Pinch => PINCH_POSE,
            HandPose::Fist => FIST_POSE,
        };
        // Local space: wrist at origin, +v toward the fingers, palm center ~(0.09, 0.75)
        let points = local.map(|(u, v)| Landmark::new(cx + u * scale, cy + (0.75 - v) * scale, 0.0));
        Self { points }
    }

    /// Point-wise blend toward `other`
    pub fn lerp(&self, other: &HandLandmarks, t: f32) -> HandLandmarks {
        let mut points = self.points;
        for (p, q) in points.iter_mut().zip(other.points.iter()) {
            *p = p.lerp(q, t);
        }
        HandLandmarks { points }
    }

    /// Shift every point along z
    pub fn with_depth(mut self, z: f32) -> Self {
        for p in self.points.iter_mut() {
            p.z += z;
        }
        self
    }

    /// Mean of the wrist and the four finger MCP joints
    pub fn palm_center(&self) -> Landmark {
        let ids = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
        let n = ids.len() as f32;
        let (x, y, z) = ids.iter().map(|&i| self.points[i]).fold((0.0, 0.0, 0.0), |acc, p| {
            (acc.0 + p.x, acc.1 + p.y, acc.2 + p.z)
        });
        Landmark::new(x / n, y / n, z / n)
    }

    /// Wrist to middle MCP, never zero
    pub fn scale(&self) -> f32 {
        self.points[WRIST]
            .distance(&self.points[MIDDLE_MCP])
            .max(f32::EPSILON)
    }

    /// Turn the landmarks into a gesture snapshot
    pub fn classify(&self, config: &ClassifierConfig) -> HandGesture {
        let scale = self.scale();
        let palm = self.palm_center();
        let wrist = self.points[WRIST];

        let pinch_distance = self.points[THUMB_TIP].distance(&self.points[INDEX_TIP]) / scale;

        let mean_tip_to_palm = FINGER_MCPS
            .iter()
            .map(|&mcp| self.points[mcp + 3].distance(&palm) / scale)
            .sum::<f32>()
            / FINGER_MCPS.len() as f32;

        let all_extended = FINGER_MCPS.iter().all(|&mcp| {
            let pip = self.points[mcp + 1].distance(&wrist);
            let tip = self.points[mcp + 3].distance(&wrist);
            tip > pip * config.extension_ratio
        });

        let is_fist = mean_tip_to_palm < config.fist_threshold;
        let is_pinching = !is_fist && pinch_distance < config.pinch_threshold;
        let is_open = !is_fist && all_extended;

        // Strength ramps from 0 at twice the threshold to 1 at contact
        let pinch_strength = if is_fist {
            0.0
        } else {
            (1.0 - pinch_distance / (2.0 * config.pinch_threshold)).clamp(0.0, 1.0)
        };

        HandGesture {
            is_pinching,
            is_open,
            is_fist,
            // Mirrored so moving right in front of the camera moves right on screen
            palm_x: ((0.5 - palm.x) * 2.0).clamp(-1.0, 1.0),
            palm_y: ((0.5 - palm.y) * 2.0).clamp(-1.0, 1.0),
            palm_z: (-palm.z).clamp(-1.0, 1.0),
            pinch_strength,
        }
    }
}

// (u, v) per landmark; wrist at origin, middle MCP at (0, 1)
const OPEN_POSE: [(f32, f32); LANDMARK_COUNT] = [
    (0.0, 0.0),
    (-0.35, 0.25),
    (-0.6, 0.45),
    (-0.75, 0.65),
    (-0.85, 0.85),
    (-0.3, 0.95),
    (-0.405, 1.2825),
    (-0.48, 1.52),
    (-0.555, 1.7575),
    (0.0, 1.0),
    (0.0, 1.35),
    (0.0, 1.6),
    (0.0, 1.85),
    (0.25, 0.95),
    (0.3375, 1.2825),
    (0.4, 1.52),
    (0.4625, 1.7575),
    (0.5, 0.85),
    (0.675, 1.1475),
    (0.8, 1.36),
    (0.925, 1.5725),
];

const PINCH_POSE: [(f32, f32); LANDMARK_COUNT] = [
    (0.0, 0.0),
    (-0.35, 0.25),
    (-0.5, 0.5),
    (-0.52, 0.85),
    (-0.5, 1.15),
    (-0.3, 0.95),
    (-0.405, 1.2825),
    (-0.5, 1.3),
    (-0.45, 1.2),
    (0.0, 1.0),
    (0.0, 1.35),
    (0.0, 1.6),
    (0.0, 1.85),
    (0.25, 0.95),
    (0.3375, 1.2825),
    (0.4, 1.52),
    (0.4625, 1.7575),
    (0.5, 0.85),
    (0.675, 1.1475),
    (0.8, 1.36),
    (0.925, 1.5725),
];

const FIST_POSE: [(f32, f32); LANDMARK_COUNT] = [
    (0.0, 0.0),
    (-0.35, 0.25),
    (-0.4, 0.45),
    (-0.2, 0.5),
    (0.1, 0.45),
    (-0.3, 0.95),
    (-0.375, 1.1875),
    (-0.3, 1.0),
    (-0.225, 0.7125),
    (0.0, 1.0),
    (0.0, 1.25),
    (0.0, 1.05),
    (0.0, 0.75),
    (0.25, 0.95),
    (0.3125, 1.1875),
    (0.25, 1.0),
    (0.1875, 0.7125),
    (0.5, 0.85),
    (0.625, 1.0625),
    (0.5, 0.9),
    (0.375, 0.6375),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(pose: HandPose) -> HandGesture {
        HandLandmarks::pose(pose, 0.5, 0.5, 0.2).classify(&ClassifierConfig::default())
    }

    #[test]
    fn open_hand() {
        let g = classify(HandPose::Open);
        assert!(g.is_open);
        assert!(!g.is_fist);
        assert!(!g.is_pinching);
    }

    #[test]
    fn fist() {
        let g = classify(HandPose::Fist);
        assert!(g.is_fist);
        assert!(!g.is_open);
        assert!(!g.is_pinching);
        assert_eq!(g.pinch_strength, 0.0);
    }

    #[test]
    fn pinch() {
        let g = classify(HandPose::Pinch);
        assert!(g.is_pinching);
        assert!(!g.is_fist);
        assert!(!g.is_open);
        assert!(g.pinch_strength > 0.8);
    }

    #[test]
    fn palm_position_is_centered_and_mirrored() {
        // Palm center sits at the requested point
        let centered = HandLandmarks::pose(HandPose::Open, 0.5, 0.5, 0.2);
        let palm = centered.palm_center();
        assert!((palm.x - 0.518).abs() < 1e-3);
        assert!((palm.y - 0.5).abs() < 1e-3);

        // Hand on the camera's left shows up on the viewer's right
        let g = HandLandmarks::pose(HandPose::Open, 0.2, 0.3, 0.2)
            .classify(&ClassifierConfig::default());
        assert!(g.palm_x > 0.5);
        assert!(g.palm_y > 0.3);
    }

    #[test]
    fn classification_is_scale_invariant() {
        let small = HandLandmarks::pose(HandPose::Pinch, 0.5, 0.5, 0.05);
        let large = HandLandmarks::pose(HandPose::Pinch, 0.5, 0.5, 0.3);
        let config = ClassifierConfig::default();
        let (a, b) = (small.classify(&config), large.classify(&config));
        assert_eq!(a.is_pinching, b.is_pinching);
        assert!((a.pinch_strength - b.pinch_strength).abs() < 1e-4);
    }

    #[test]
    fn depth_moves_palm_z() {
        let g = HandLandmarks::pose(HandPose::Open, 0.5, 0.5, 0.2)
            .with_depth(-0.2)
            .classify(&ClassifierConfig::default());
        assert!((g.palm_z - 0.2).abs() < 1e-5);
    }
}
