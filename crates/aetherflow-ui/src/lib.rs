//! AetherFlow UI Components
//!
//! Dioxus building blocks for the AetherFlow overlay: glass panels floating
//! over the particle canvas.
//!
//! ## Palette
//!
//! - **Cyan (#00f2ff)**: interactive elements, the active template
//! - **Violet (#7000ff)**: AI actions and glows
//! - **Glass (rgba(255,255,255,0.06))**: panel backgrounds with backdrop blur
//! - **Deep Space (#02020a)**: canvas background

pub mod components;

pub use components::*;
