//! Offline keyword resolver.
//!
//! Picks a template from words in the prompt and a palette from color words.
//! Prompts with no recognizable color get a palette derived from a stable
//! hash, so the same prompt always yields the same theme.

use tracing::debug;

use super::ThemeResolver;
use crate::error::{ThemeError, ThemeResult};
use crate::types::{ParticleConfig, ParticleTemplate, Rgb, ThemeSuggestion};

/// Word stems that select a template, checked in order
const TEMPLATE_WORDS: &[(&[&str], ParticleTemplate)] = &[
    (&["heart", "love", "valentine", "romance", "kiss"], ParticleTemplate::Hearts),
    (
        &["sakura", "flower", "bloom", "blossom", "petal", "rose", "garden", "lotus"],
        ParticleTemplate::Flowers,
    ),
    (&["saturn", "planet", "ring", "orbit", "moon"], ParticleTemplate::Saturn),
    (
        &["firework", "celebrat", "explod", "explos", "burst", "festival", "spark"],
        ParticleTemplate::Fireworks,
    ),
    (
        &["dna", "helix", "gene", "genetic", "life", "bio", "biolog", "cell"],
        ParticleTemplate::Dna,
    ),
    (
        &["galaxy", "galaxies", "star", "cosmos", "cosmic", "nebula", "nebulae", "space", "universe"],
        ParticleTemplate::Galaxy,
    ),
];

/// Word stems that select a palette, checked in order
const PALETTE_WORDS: &[(&[&str], &str, &str)] = &[
    (&["neon", "cyber", "cyberpunk", "synth", "synthwave"], "#ff00d4", "#00f2ff"),
    (&["sea", "ocean", "deep", "water", "aqua"], "#00c2ff", "#001f6b"),
    (&["fire", "fiery", "lava", "ember", "flame", "sun"], "#ff7a00", "#ff0040"),
    (&["forest", "moss", "jungle", "leaf", "green"], "#39ff14", "#0b6e4f"),
    (&["gold", "royal", "amber", "honey"], "#ffd700", "#b8860b"),
    (&["ice", "icy", "frost", "snow", "winter", "crystal"], "#e0f7ff", "#7fd4ff"),
    (&["sakura", "pink", "cherry", "rose"], "#ffb7c5", "#ff4fa3"),
    (&["blood", "crimson", "red", "love", "heart"], "#ff1744", "#8b0000"),
    (&["void", "shadow", "dark", "night"], "#7000ff", "#1a0033"),
];

/// Resolver that never leaves the machine
#[derive(Debug, Default, Clone)]
pub struct KeywordResolver;

impl KeywordResolver {
    pub fn new() -> Self {
        Self
    }

    fn template_for(words: &[String]) -> ParticleTemplate {
        TEMPLATE_WORDS
            .iter()
            .find(|(stems, _)| matches_any(words, stems))
            .map(|(_, template)| *template)
            .unwrap_or_default()
    }

    fn palette_for(words: &[String], prompt: &str) -> (String, String) {
        if let Some((_, c1, c2)) = PALETTE_WORDS.iter().find(|(stems, _, _)| matches_any(words, stems)) {
            return (c1.to_string(), c2.to_string());
        }

        let hue = (stable_hash(prompt) % 360) as f32;
        (
            Rgb::from_hsl(hue, 0.9, 0.55).to_hex(),
            Rgb::from_hsl(hue + 140.0, 0.85, 0.45).to_hex(),
        )
    }

    fn tune(config: &mut ParticleConfig, words: &[String]) {
        if matches_any(words, &["calm", "slow", "serene", "gentle", "quiet", "dream"]) {
            config.speed = 0.5;
        }
        if matches_any(words, &["fast", "wild", "chaos", "chaotic", "storm", "rush", "frenzy"]) {
            config.speed = 2.2;
        }
        if matches_any(words, &["dense", "many", "swarm", "crowd", "thick"]) {
            config.density = 1.8;
        }
        if matches_any(words, &["sparse", "minimal", "few", "lonely"]) {
            config.density = 0.5;
        }
        if matches_any(words, &["vast", "huge", "infinite", "giant", "expand", "expansive"]) {
            config.expansion = 1.6;
        }
        if matches_any(words, &["tiny", "small", "dust", "fine"]) {
            config.size = 0.02;
        }
    }
}

impl ThemeResolver for KeywordResolver {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn resolve(&self, prompt: &str) -> ThemeResult<ThemeSuggestion> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ThemeError::InvalidResponse("empty prompt".to_string()));
        }

        let words = tokenize(prompt);
        let template = Self::template_for(&words);
        let (color1, color2) = Self::palette_for(&words, prompt);

        let mut config = ParticleConfig {
            color1,
            color2,
            ..ParticleConfig::default()
        };
        Self::tune(&mut config, &words);
        debug!("Offline theme for {:?}: {} {:?}", prompt, template, config);

        Ok(ThemeSuggestion {
            template,
            config: config.sanitized(),
            message: format!("\u{201C}{}\u{201D} woven into {}", prompt, template),
        })
    }
}

fn tokenize(prompt: &str) -> Vec<String> {
    prompt
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Endings a stem may carry and still count as the same word
const INFLECTIONS: &[&str] = &[
    "s", "es", "d", "ed", "e", "r", "er", "ers", "est", "ing", "ion", "ions", "y", "ies", "ly",
    "ny", "ry", "ness", "ful", "al", "ic", "ous", "ish", "ist", "le", "les", "ling",
];

fn matches_any(words: &[String], stems: &[&str]) -> bool {
    words
        .iter()
        .any(|w| stems.iter().any(|s| is_inflection_of(w, s)))
}

/// True when `word` is `stem` itself or `stem` plus a known ending.
/// Bare prefixes do not count, so "starting" is not "star" and "reduce" is not "red".
fn is_inflection_of(word: &str, stem: &str) -> bool {
    match word.strip_prefix(stem) {
        Some("") => true,
        Some(rest) => INFLECTIONS.contains(&rest),
        None => false,
    }
}

/// FNV-1a, stable across runs and platforms
fn stable_hash(text: &str) -> u64 {
    text.to_lowercase()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325u64, |hash, b| {
            (hash ^ b as u64).wrapping_mul(0x0100_0000_01b3)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neon_sakura_blooms() {
        let theme = KeywordResolver::new().resolve("Neon Sakura").unwrap();
        assert_eq!(theme.template, ParticleTemplate::Flowers);
        assert_eq!(theme.config.color1, "#ff00d4");
        assert_eq!(theme.config.color2, "#00f2ff");
        assert!(theme.message.contains("Neon Sakura"));
    }

    #[test]
    fn deep_sea_defaults_to_galaxy_with_sea_palette() {
        let theme = KeywordResolver::new().resolve("Deep Sea").unwrap();
        assert_eq!(theme.template, ParticleTemplate::Galaxy);
        assert_eq!(theme.config.color1, "#00c2ff");
    }

    #[test]
    fn stems_match_inflections() {
        let theme = KeywordResolver::new().resolve("celebrations over the bay").unwrap();
        assert_eq!(theme.template, ParticleTemplate::Fireworks);

        let theme = KeywordResolver::new().resolve("exploding helix").unwrap();
        assert_eq!(theme.template, ParticleTemplate::Fireworks);
    }

    #[test]
    fn prefixes_of_unrelated_words_do_not_match() {
        let resolver = KeywordResolver::new();

        let theme = resolver.resolve("Explore the deep sea").unwrap();
        assert_eq!(theme.template, ParticleTemplate::Galaxy);
        assert_eq!(theme.config.color1, "#00c2ff");

        let theme = resolver.resolve("reduce the noise").unwrap();
        assert_ne!(theme.config.color1, "#ff1744");

        assert!(!is_inflection_of("starting", "star"));
        assert!(is_inflection_of("starry", "star"));
        assert!(is_inflection_of("stars", "star"));
    }

    #[test]
    fn tuning_words_adjust_config() {
        let theme = KeywordResolver::new().resolve("calm sparse orbit").unwrap();
        assert_eq!(theme.template, ParticleTemplate::Saturn);
        assert_eq!(theme.config.speed, 0.5);
        assert_eq!(theme.config.density, 0.5);
    }

    #[test]
    fn unknown_words_get_stable_palette() {
        let resolver = KeywordResolver::new();
        let a = resolver.resolve("quixotic wanderlust").unwrap();
        let b = resolver.resolve("Quixotic Wanderlust").unwrap();
        assert_eq!(a.config.color1, b.config.color1);
        assert!(Rgb::parse_hex(&a.config.color1).is_some());
        assert!(Rgb::parse_hex(&a.config.color2).is_some());
    }

    #[test]
    fn blank_prompt_is_an_error() {
        assert!(KeywordResolver::new().resolve("   ").is_err());
    }
}
