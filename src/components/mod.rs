//! Shell components for AetherFlow.
//!
//! The canvas fills the window; everything else floats over it.

mod hand_tracker;
mod help_overlay;
mod particle_scene;
mod prompt_bar;
mod side_rail;
mod status_panel;
mod template_controls;

pub use hand_tracker::HandTracker;
pub use help_overlay::HelpOverlay;
pub use particle_scene::ParticleScene;
pub use prompt_bar::PromptBar;
pub use side_rail::SideRail;
pub use status_panel::StatusPanel;
pub use template_controls::TemplateControls;
