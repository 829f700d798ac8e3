//! Visual theme for the AetherFlow shell.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
