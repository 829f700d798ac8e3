//! Particle scene simulation
//!
//! [`ParticleField`] owns the particles for the current template and
//! configuration, moves them toward their template layout each frame under
//! the influence of the hand, and projects them to screen space.

mod field;
mod shapes;

pub use field::{ParticleField, ProjectedParticle, BASE_PARTICLES, MAX_PARTICLES};
pub use shapes::{layout, Target};
