//! Target layouts for each template.
//!
//! Every generator returns `count` points in scene units (roughly a unit
//! sphere) together with a 0..=1 color mix between the two theme colors.

use std::f32::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::Rng;

use crate::types::ParticleTemplate;

/// A particle's resting place and its color mix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: [f32; 3],
    pub mix: f32,
}

/// Lay out `count` targets for `template`
pub fn layout(template: ParticleTemplate, count: usize, rng: &mut StdRng) -> Vec<Target> {
    (0..count)
        .map(|i| match template {
            ParticleTemplate::Hearts => heart(rng),
            ParticleTemplate::Flowers => flower(rng),
            ParticleTemplate::Saturn => saturn(rng),
            ParticleTemplate::Fireworks => firework(i, count, rng),
            ParticleTemplate::Galaxy => galaxy(rng),
            ParticleTemplate::Dna => dna(rng),
        })
        .collect()
}

/// Per-frame motion of a target around its resting place
pub fn animate(template: ParticleTemplate, target: [f32; 3], phase: f32, time: f32) -> [f32; 3] {
    let [x, y, z] = target;
    match template {
        ParticleTemplate::Hearts => {
            // Heartbeat: one short pulse per second
            let beat = (time * 2.0 * PI).sin().max(0.0).powi(6) * 0.12;
            scale([x, y, z], 1.0 + beat)
        }
        ParticleTemplate::Flowers => {
            let sway = (time * 0.8 + phase).sin() * 0.04;
            [x, y + sway, z + (time + phase).cos() * 0.03]
        }
        ParticleTemplate::Saturn => rotate_y([x, y, z], time * 0.25),
        ParticleTemplate::Fireworks => {
            // Bursts grow then restart, each particle slightly out of step
            let cycle = (time * 0.35 + phase * 0.05).fract();
            scale([x, y - cycle * cycle * 0.3, z], 0.15 + 0.85 * cycle.sqrt())
        }
        ParticleTemplate::Galaxy => {
            // Inner orbits turn faster
            let r = (x * x + z * z).sqrt();
            rotate_y([x, y, z], time * 0.3 / (r + 0.35))
        }
        ParticleTemplate::Dna => rotate_y([x, y, z], time * 0.8),
    }
}

fn heart(rng: &mut StdRng) -> Target {
    let t = rng.random_range(0.0..TAU);
    let fill = rng.random::<f32>().sqrt();
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    let depth = rng.random_range(-1.0f32..1.0) * 0.25 * fill;
    Target {
        position: [x / 17.0 * fill, y / 17.0 * fill + 0.1, depth],
        mix: 1.0 - fill,
    }
}

fn flower(rng: &mut StdRng) -> Target {
    const PETALS: f32 = 5.0;
    let theta = rng.random_range(0.0..TAU);
    let petal = (PETALS * theta / 2.0).cos().abs();
    let r = 1.1 * petal * rng.random::<f32>().powf(0.35);
    // Petals cup upward toward their tips
    let z = 0.35 * r * r + rng.random_range(-0.03f32..0.03);
    Target {
        position: [r * theta.cos(), r * theta.sin(), z - 0.2],
        mix: (r / 1.1).min(1.0),
    }
}

fn saturn(rng: &mut StdRng) -> Target {
    const TILT: f32 = 0.45;
    if rng.random::<f32>() < 0.35 {
        // Planet body: uniform on a sphere
        let u = rng.random_range(-1.0f32..1.0);
        let phi = rng.random_range(0.0..TAU);
        let s = (1.0 - u * u).sqrt() * 0.5;
        Target {
            position: [s * phi.cos(), u * 0.5, s * phi.sin()],
            mix: 0.0,
        }
    } else {
        let r = rng.random_range(0.8f32..1.4);
        let phi = rng.random_range(0.0..TAU);
        let ring = [r * phi.cos(), rng.random_range(-0.02f32..0.02), r * phi.sin()];
        Target {
            position: rotate_x(ring, TILT),
            mix: (r - 0.8) / 0.6,
        }
    }
}

fn firework(index: usize, count: usize, rng: &mut StdRng) -> Target {
    const BURSTS: usize = 5;
    let burst = index * BURSTS / count.max(1);
    let angle = burst as f32 / BURSTS as f32 * TAU;
    let center = [0.6 * angle.cos(), 0.35 * (angle * 2.0).sin() + 0.2, 0.4 * angle.sin()];

    let u = rng.random_range(-1.0f32..1.0);
    let phi = rng.random_range(0.0..TAU);
    let s = (1.0 - u * u).sqrt();
    let reach = 0.5 * rng.random::<f32>().sqrt();
    Target {
        position: [
            center[0] + s * phi.cos() * reach,
            center[1] + u * reach,
            center[2] + s * phi.sin() * reach,
        ],
        mix: burst as f32 / (BURSTS - 1) as f32,
    }
}

fn galaxy(rng: &mut StdRng) -> Target {
    const ARMS: usize = 3;
    const RADIUS: f32 = 1.5;
    let arm = rng.random_range(0..ARMS) as f32;
    let r = RADIUS * rng.random::<f32>().powf(0.7);
    let spread = rng.random_range(-1.0f32..1.0) * 0.35 / (r + 0.4);
    let angle = arm / ARMS as f32 * TAU + r * 2.4 + spread;
    let thickness = 0.12 * (1.0 - r / RADIUS) + 0.01;
    Target {
        position: [r * angle.cos(), rng.random_range(-1.0f32..1.0) * thickness, r * angle.sin()],
        mix: r / RADIUS,
    }
}

fn dna(rng: &mut StdRng) -> Target {
    const RADIUS: f32 = 0.45;
    const TURNS: f32 = 3.2;
    let y = rng.random_range(-1.4f32..1.4);
    let t = y * TURNS;
    let a = [RADIUS * t.cos(), y, RADIUS * t.sin()];
    let b = [RADIUS * (t + PI).cos(), y, RADIUS * (t + PI).sin()];

    let pick = rng.random::<f32>();
    if pick < 0.2 {
        // Base pair rung between the strands
        let k = rng.random::<f32>();
        Target {
            position: lerp(a, b, k),
            mix: 0.5,
        }
    } else if pick < 0.6 {
        Target {
            position: jitter(a, rng, 0.02),
            mix: 0.0,
        }
    } else {
        Target {
            position: jitter(b, rng, 0.02),
            mix: 1.0,
        }
    }
}

pub(crate) fn scale(p: [f32; 3], s: f32) -> [f32; 3] {
    [p[0] * s, p[1] * s, p[2] * s]
}

pub(crate) fn rotate_y(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (s, c) = angle.sin_cos();
    [p[0] * c + p[2] * s, p[1], -p[0] * s + p[2] * c]
}

pub(crate) fn rotate_x(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (s, c) = angle.sin_cos();
    [p[0], p[1] * c - p[2] * s, p[1] * s + p[2] * c]
}

fn lerp(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn jitter(p: [f32; 3], rng: &mut StdRng, amount: f32) -> [f32; 3] {
    [
        p[0] + rng.random_range(-amount..amount),
        p[1] + rng.random_range(-amount..amount),
        p[2] + rng.random_range(-amount..amount),
    ]
}
