//! Core types for AetherFlow

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Status line shown before anything else has happened
pub const INITIAL_STATUS: &str = "Wave your hand to interact";

/// Named preset particle arrangement
///
/// The set is closed: the renderer knows how to lay out exactly these six.
/// Serialized as the upper-case name (`"GALAXY"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticleTemplate {
    Hearts,
    Flowers,
    Saturn,
    Fireworks,
    #[default]
    Galaxy,
    Dna,
}

impl ParticleTemplate {
    /// All templates in button order
    pub const ALL: [ParticleTemplate; 6] = [
        ParticleTemplate::Hearts,
        ParticleTemplate::Flowers,
        ParticleTemplate::Saturn,
        ParticleTemplate::Fireworks,
        ParticleTemplate::Galaxy,
        ParticleTemplate::Dna,
    ];

    /// Upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleTemplate::Hearts => "HEARTS",
            ParticleTemplate::Flowers => "FLOWERS",
            ParticleTemplate::Saturn => "SATURN",
            ParticleTemplate::Fireworks => "FIREWORKS",
            ParticleTemplate::Galaxy => "GALAXY",
            ParticleTemplate::Dna => "DNA",
        }
    }
}

impl fmt::Display for ParticleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticleTemplate {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ParticleTemplate::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownTemplate(wanted.to_string()))
    }
}

/// An sRGB color parsed from a CSS hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::new(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// Build from hue (degrees), saturation and lightness (0..=1)
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Linear blend, `t = 0` is `self`
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }

    /// Lower-case `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Visual parameters handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    pub color1: String,
    pub color2: String,
    pub size: f32,
    pub density: f32,
    pub expansion: f32,
    pub speed: f32,
}

impl ParticleConfig {
    pub const DEFAULT_COLOR1: &'static str = "#00f2ff";
    pub const DEFAULT_COLOR2: &'static str = "#7000ff";

    pub const SIZE_RANGE: (f32, f32) = (0.005, 0.2);
    pub const DENSITY_RANGE: (f32, f32) = (0.1, 3.0);
    pub const EXPANSION_RANGE: (f32, f32) = (0.1, 3.0);
    pub const SPEED_RANGE: (f32, f32) = (0.1, 5.0);

    /// Copy with every field inside the range the renderer expects.
    ///
    /// Colors that are not `#rgb`/`#rrggbb` fall back to the defaults and
    /// non-finite numbers fall back to the default value for that field.
    pub fn sanitized(&self) -> ParticleConfig {
        let defaults = ParticleConfig::default();
        let color = |value: &str, fallback: &str| match Rgb::parse_hex(value) {
            Some(_) => value.trim().to_string(),
            None => fallback.to_string(),
        };
        let clamp = |value: f32, fallback: f32, (lo, hi): (f32, f32)| {
            if value.is_finite() {
                value.clamp(lo, hi)
            } else {
                fallback
            }
        };

        ParticleConfig {
            color1: color(&self.color1, &defaults.color1),
            color2: color(&self.color2, &defaults.color2),
            size: clamp(self.size, defaults.size, Self::SIZE_RANGE),
            density: clamp(self.density, defaults.density, Self::DENSITY_RANGE),
            expansion: clamp(self.expansion, defaults.expansion, Self::EXPANSION_RANGE),
            speed: clamp(self.speed, defaults.speed, Self::SPEED_RANGE),
        }
    }

    /// Both colors, parsed (defaults if unparseable)
    pub fn palette(&self) -> (Rgb, Rgb) {
        let fallback1 = Rgb::new(0x00, 0xf2, 0xff);
        let fallback2 = Rgb::new(0x70, 0x00, 0xff);
        (
            Rgb::parse_hex(&self.color1).unwrap_or(fallback1),
            Rgb::parse_hex(&self.color2).unwrap_or(fallback2),
        )
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            color1: Self::DEFAULT_COLOR1.to_string(),
            color2: Self::DEFAULT_COLOR2.to_string(),
            size: 0.04,
            density: 1.0,
            expansion: 1.0,
            speed: 1.0,
        }
    }
}

/// One frame of detected hand pose
///
/// Palm coordinates are centered: `palm_x`/`palm_y` in -1..=1 with +x to the
/// viewer's right and +y up, `palm_z` toward the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandGesture {
    pub is_pinching: bool,
    pub is_open: bool,
    pub is_fist: bool,
    pub palm_x: f32,
    pub palm_y: f32,
    pub palm_z: f32,
    pub pinch_strength: f32,
}

impl HandGesture {
    /// Short label for previews and logs
    pub fn pose_label(&self) -> &'static str {
        if self.is_fist {
            "fist"
        } else if self.is_pinching {
            "pinch"
        } else if self.is_open {
            "open"
        } else {
            "relaxed"
        }
    }
}

/// AI request status shown in the status panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiState {
    pub is_processing: bool,
    pub last_message: String,
}

impl Default for AiState {
    fn default() -> Self {
        Self {
            is_processing: false,
            last_message: INITIAL_STATUS.to_string(),
        }
    }
}

/// What a theme resolver hands back for a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSuggestion {
    pub template: ParticleTemplate,
    pub config: ParticleConfig,
    pub message: String,
}

/// Identifies one AI submission
///
/// Tokens increase monotonically within a [`crate::SceneState`]; a result is
/// only applied if it carries the token currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}
