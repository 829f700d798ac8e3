//! Particle field: per-frame motion and projection.
//!
//! Gestures act on the whole field:
//!
//! | Gesture | Effect |
//! |---|---|
//! | Open palm | Expansion force field, layout pushed outward |
//! | Fist | Gravitational collapse toward the center |
//! | Pinch | Field tightens with pinch strength |
//! | Palm position | Rotates the perspective |
//!
//! Without a hand the field spins slowly on its own.

use std::f32::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::shapes::{self, rotate_x, rotate_y, scale};
use crate::types::{HandGesture, ParticleConfig, ParticleTemplate, Rgb};

/// Particles at density 1.0
pub const BASE_PARTICLES: usize = 1200;

/// Hard cap regardless of density
pub const MAX_PARTICLES: usize = 4000;

const CAMERA_DISTANCE: f32 = 4.0;
const OPEN_SPREAD: f32 = 1.6;
const FIST_SPREAD: f32 = 0.25;
const MAX_YAW: f32 = PI * 0.75;
const MAX_PITCH: f32 = PI * 0.35;
const IDLE_SPIN: f32 = 0.15;
/// How fast spread and rotation chase their goals (1/s)
const RESPONSE: f32 = 4.0;
/// How fast particles chase their targets (1/s)
const FOLLOW: f32 = 6.0;

#[derive(Debug, Clone)]
struct Particle {
    position: [f32; 3],
    target: [f32; 3],
    mix: f32,
    phase: f32,
    color: Rgb,
}

/// A particle ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedParticle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Simulated particle scene for one template and configuration
#[derive(Debug, Clone)]
pub struct ParticleField {
    template: ParticleTemplate,
    config: ParticleConfig,
    particles: Vec<Particle>,
    seed: u64,
    time: f32,
    spread: f32,
    yaw: f32,
    pitch: f32,
}

impl ParticleField {
    pub fn new(template: ParticleTemplate, config: &ParticleConfig, seed: u64) -> Self {
        let config = config.sanitized();
        let mut field = Self {
            template,
            spread: config.expansion,
            config,
            particles: Vec::new(),
            seed,
            time: 0.0,
            yaw: 0.0,
            pitch: 0.0,
        };
        field.rebuild();
        field
    }

    /// Particle count for a density, capped at [`MAX_PARTICLES`]
    pub fn particle_count_for(density: f32) -> usize {
        let wanted = (BASE_PARTICLES as f32 * density.max(0.0)).round() as usize;
        wanted.clamp(1, MAX_PARTICLES)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn template(&self) -> ParticleTemplate {
        self.template
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Switch layouts; particles fly from where they are to the new shape
    pub fn set_template(&mut self, template: ParticleTemplate) {
        if template != self.template {
            debug!("Particle field {} -> {}", self.template, template);
            self.template = template;
            self.rebuild();
        }
    }

    pub fn set_config(&mut self, config: &ParticleConfig) {
        let config = config.sanitized();
        if config == self.config {
            return;
        }

        let recount = Self::particle_count_for(config.density) != self.particles.len();
        let recolor = config.color1 != self.config.color1 || config.color2 != self.config.color2;
        self.config = config;

        if recount {
            self.rebuild();
        } else if recolor {
            self.recolor();
        }
    }

    fn rebuild(&mut self) {
        let count = Self::particle_count_for(self.config.density);
        let mut rng = StdRng::seed_from_u64(self.seed ^ template_salt(self.template));
        let targets = shapes::layout(self.template, count, &mut rng);
        let (c1, c2) = self.config.palette();

        let previous = std::mem::take(&mut self.particles);
        self.particles = targets
            .into_iter()
            .enumerate()
            .map(|(i, t)| Particle {
                position: previous.get(i).map(|p| p.position).unwrap_or([0.0; 3]),
                target: t.position,
                mix: t.mix,
                phase: rng.random_range(0.0..TAU),
                color: c1.mix(c2, t.mix),
            })
            .collect();
    }

    fn recolor(&mut self) {
        let (c1, c2) = self.config.palette();
        for p in self.particles.iter_mut() {
            p.color = c1.mix(c2, p.mix);
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32, gesture: Option<&HandGesture>) {
        let dt = dt.clamp(0.0, 0.1);
        let scaled = dt * self.config.speed;
        self.time += scaled;

        let ease = 1.0 - (-RESPONSE * dt).exp();
        let spread_goal = match gesture {
            Some(g) => self.config.expansion * gesture_spread(g),
            None => self.config.expansion,
        };
        self.spread += (spread_goal - self.spread) * ease;

        match gesture {
            Some(g) => {
                self.yaw += (g.palm_x * MAX_YAW - self.yaw) * ease;
                self.pitch += (g.palm_y * MAX_PITCH - self.pitch) * ease;
            }
            None => {
                self.yaw = (self.yaw + IDLE_SPIN * scaled + PI).rem_euclid(TAU) - PI;
                self.pitch -= self.pitch * ease;
            }
        }

        let follow = 1.0 - (-FOLLOW * scaled).exp();
        for p in self.particles.iter_mut() {
            let goal = scale(
                shapes::animate(self.template, p.target, p.phase, self.time),
                self.spread,
            );
            for axis in 0..3 {
                p.position[axis] += (goal[axis] - p.position[axis]) * follow;
            }
        }
    }

    /// Mean distance of the particles from the center
    pub fn mean_radius(&self) -> f32 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let total: f32 = self
            .particles
            .iter()
            .map(|p| p.position.iter().map(|c| c * c).sum::<f32>().sqrt())
            .sum();
        total / self.particles.len() as f32
    }

    /// Perspective projection onto a `width` x `height` viewport, back to front
    pub fn project(&self, width: f32, height: f32) -> Vec<ProjectedParticle> {
        let focal = width.min(height) * 1.1;
        let (cx, cy) = (width / 2.0, height / 2.0);

        let mut projected: Vec<(f32, ProjectedParticle)> = self
            .particles
            .iter()
            .filter_map(|p| {
                let view = rotate_x(rotate_y(p.position, self.yaw), self.pitch);
                let depth = view[2] + CAMERA_DISTANCE;
                if depth < 0.5 {
                    return None;
                }
                let k = focal / depth;
                Some((
                    depth,
                    ProjectedParticle {
                        x: cx + view[0] * k,
                        y: cy - view[1] * k,
                        radius: (self.config.size * k * 0.5).max(0.4),
                        color: p.color,
                        alpha: (1.3 - 0.15 * depth).clamp(0.2, 1.0),
                    },
                ))
            })
            .collect();

        projected.sort_by(|a, b| b.0.total_cmp(&a.0));
        projected.into_iter().map(|(_, p)| p).collect()
    }
}

/// Spread multiplier for a hand pose
fn gesture_spread(g: &HandGesture) -> f32 {
    if g.is_fist {
        FIST_SPREAD
    } else if g.is_pinching {
        1.0 - 0.5 * g.pinch_strength.clamp(0.0, 1.0)
    } else if g.is_open {
        OPEN_SPREAD
    } else {
        1.0
    }
}

fn template_salt(template: ParticleTemplate) -> u64 {
    template
        .as_str()
        .bytes()
        .fold(0u64, |acc, b| acc.rotate_left(7) ^ b as u64)
}
