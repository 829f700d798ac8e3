//! Reusable overlay components
//!
//! Every component renders plain elements with class names styled by the
//! desktop shell's global stylesheet.

mod button;
mod glass_panel;
mod prompt_input;
mod status_indicator;
mod template_pills;

pub use button::*;
pub use glass_panel::*;
pub use prompt_input::*;
pub use status_indicator::*;
pub use template_pills::*;
