//! AetherFlow CLI
//!
//! Headless access to the pieces behind the desktop app: theme resolution,
//! the simulated hand tracker and the particle field.
//!
//! ## Usage
//!
//! ```bash
//! # List the particle templates
//! aetherflow templates
//!
//! # Resolve a prompt into a theme (offline keyword tables unless a Gemini key is set)
//! aetherflow theme "Neon Sakura"
//! aetherflow theme --resolver gemini --json "Deep Sea"
//!
//! # Print classified snapshots from the simulated hand
//! aetherflow gestures --frames 90
//!
//! # Run the particle field for a while under the simulated hand
//! aetherflow frame --template saturn --steps 120
//! ```

use std::path::PathBuf;

use aetherflow_core::{
    build_resolver, logging, resolve_theme, GestureSource, ParticleConfig, ParticleField,
    ParticleTemplate, ResolverKind, SceneCommand, SceneEvent, SceneState, Settings,
    SimulatedHand, ThemeSuggestion, FALLBACK_STATUS,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

/// AetherFlow - gesture-driven particle themes
#[derive(Parser)]
#[command(name = "aetherflow")]
#[command(version = "0.1.0")]
#[command(about = "AetherFlow - gesture-driven particle themes")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (default: <config dir>/aetherflow/settings.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the particle templates
    Templates,

    /// Turn a free-text prompt into a theme
    Theme {
        /// The vision to resolve, e.g. "Neon Sakura"
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,

        /// Resolver backend (offline, gemini)
        #[arg(short, long)]
        resolver: Option<String>,

        /// Print the theme as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print snapshots from the simulated hand tracker
    Gestures {
        /// Number of frames to print
        #[arg(short, long, default_value_t = 30)]
        frames: u32,

        /// Simulated frame rate
        #[arg(long, default_value_t = 30)]
        fps: u32,
    },

    /// Run the particle field under the simulated hand and report its shape
    Frame {
        /// Template to lay out
        #[arg(short, long, default_value = "GALAXY")]
        template: String,

        /// Simulation steps at 60 fps
        #[arg(short, long, default_value_t = 60)]
        steps: u32,

        /// Particle density multiplier
        #[arg(short, long, default_value_t = 1.0)]
        density: f32,

        /// Viewport width for projection
        #[arg(long, default_value_t = 1280.0)]
        width: f32,

        /// Viewport height for projection
        #[arg(long, default_value_t = 800.0)]
        height: f32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::Templates => {
            println!("Templates:");
            for template in ParticleTemplate::ALL {
                let marker = if template == ParticleTemplate::default() {
                    " (default)"
                } else {
                    ""
                };
                println!("  {}{}", template, marker);
            }
        }

        Commands::Theme {
            prompt,
            resolver,
            json,
        } => {
            let mut settings = settings;
            if let Some(kind) = resolver {
                settings.resolver = Some(kind.parse::<ResolverKind>()?);
            }
            let resolver = build_resolver(&settings)
                .with_context(|| format!("Cannot use the {} resolver", settings.resolver_kind()))?;
            info!("Resolving with the {} resolver", resolver.name());

            let mut scene = SceneState::default();
            scene.dispatch(SceneEvent::InputChanged(prompt.join(" ")));

            let (token, prompt) = match scene.dispatch(SceneEvent::SubmitPrompt) {
                Some(SceneCommand::ResolveTheme { token, prompt }) => (token, prompt),
                None => bail!("Prompt is empty"),
            };

            match resolve_theme(resolver, token, prompt).await {
                SceneEvent::ThemeFailed { reason, .. } => {
                    bail!("{} ({})", FALLBACK_STATUS, reason);
                }
                outcome => {
                    scene.dispatch(outcome);
                }
            }

            let theme = ThemeSuggestion {
                template: scene.template,
                config: scene.config.clone(),
                message: scene.ai.last_message.clone(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&theme)?);
            } else {
                print_theme(&theme);
            }
        }

        Commands::Gestures { frames, fps } => {
            if fps == 0 {
                bail!("--fps must be at least 1");
            }
            let dt = 1.0 / fps as f32;
            let mut hand = SimulatedHand::new();

            println!("frame  pose     palm_x  palm_y  pinch");
            for frame in 0..frames {
                let Some(g) = hand.next_gesture(dt) else {
                    println!("{:>5}  (no hand)", frame);
                    continue;
                };
                println!(
                    "{:>5}  {:<7}  {:>+6.2}  {:>+6.2}  {:>5.2}",
                    frame,
                    g.pose_label(),
                    g.palm_x,
                    g.palm_y,
                    g.pinch_strength
                );
            }
        }

        Commands::Frame {
            template,
            steps,
            density,
            width,
            height,
        } => {
            let template: ParticleTemplate = template.parse()?;
            if width <= 0.0 || height <= 0.0 {
                bail!("Viewport must have a positive size");
            }

            let config = ParticleConfig {
                density,
                ..ParticleConfig::default()
            };
            let mut field = ParticleField::new(template, &config, settings.particle_seed);
            let mut hand = SimulatedHand::new();
            let mut scene = SceneState::default();
            scene.dispatch(SceneEvent::SelectTemplate(template));

            let dt = 1.0 / 60.0;
            for _ in 0..steps {
                if let Some(g) = hand.next_gesture(dt) {
                    scene.dispatch(SceneEvent::GestureUpdated(g));
                }
                field.set_template(scene.template);
                field.step(dt, scene.gesture.as_ref());
            }

            let projected = field.project(width, height);
            let on_screen = projected
                .iter()
                .filter(|p| (0.0..=width).contains(&p.x) && (0.0..=height).contains(&p.y))
                .count();

            println!("Template: {}", field.template());
            println!("Particles: {}", field.len());
            println!("Steps: {}", steps);
            if let Some(g) = scene.gesture {
                println!("Hand: {}", g.pose_label());
            }
            println!("Mean radius: {:.3}", field.mean_radius());
            println!("On screen: {}/{}", on_screen, projected.len());
        }
    }

    Ok(())
}

fn print_theme(theme: &ThemeSuggestion) {
    let c = &theme.config;
    println!("Template: {}", theme.template);
    println!("Colors: {} -> {}", c.color1, c.color2);
    println!(
        "Size: {:.3}  Density: {:.2}  Expansion: {:.2}  Speed: {:.2}",
        c.size, c.density, c.expansion, c.speed
    );
    println!("Message: {}", theme.message);
}
