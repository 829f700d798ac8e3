//! Gemini-backed theme resolver.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::ThemeResolver;
use crate::error::{ThemeError, ThemeResult};
use crate::types::{ParticleConfig, ParticleTemplate, ThemeSuggestion};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const INSTRUCTION: &str = "You are the art director of a real-time 3D particle system. \
Turn the user's theme description into a particle style. \
Pick exactly one template from HEARTS, FLOWERS, SATURN, FIREWORKS, GALAXY, DNA. \
color1 and color2 are CSS hex colors (#rrggbb). \
size is between 0.01 and 0.1, density between 0.5 and 2.0, \
expansion between 0.5 and 2.0, speed between 0.2 and 3.0. \
message is one short poetic sentence describing the result.";

/// Resolver calling the Gemini `generateContent` endpoint
pub struct GeminiResolver {
    api_key: String,
    model: String,
    agent: ureq::Agent,
}

impl GeminiResolver {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            api_key,
            model,
            agent,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }

    fn request_body(prompt: &str) -> serde_json::Value {
        let templates: Vec<&str> = ParticleTemplate::ALL.iter().map(|t| t.as_str()).collect();
        json!({
            "systemInstruction": {
                "parts": [{ "text": INSTRUCTION }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "template": { "type": "STRING", "enum": templates },
                        "config": {
                            "type": "OBJECT",
                            "properties": {
                                "color1": { "type": "STRING" },
                                "color2": { "type": "STRING" },
                                "size": { "type": "NUMBER" },
                                "density": { "type": "NUMBER" },
                                "expansion": { "type": "NUMBER" },
                                "speed": { "type": "NUMBER" }
                            },
                            "required": ["color1", "color2", "size", "density", "expansion", "speed"]
                        },
                        "message": { "type": "STRING" }
                    },
                    "required": ["template", "config", "message"]
                }
            }
        })
    }
}

impl ThemeResolver for GeminiResolver {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn resolve(&self, prompt: &str) -> ThemeResult<ThemeSuggestion> {
        debug!("Sending theme request to Gemini model {}", self.model);

        let response: GeminiResponse = self
            .agent
            .post(&self.endpoint())
            .set("Content-Type", "application/json")
            .set("x-goog-api-key", &self.api_key)
            .send_json(Self::request_body(prompt))
            .map_err(|e| ThemeError::Transport(e.to_string()))?
            .into_json()
            .map_err(|e| ThemeError::InvalidResponse(format!("unreadable body: {}", e)))?;

        let text = response
            .first_text()
            .ok_or_else(|| ThemeError::InvalidResponse("no text candidate".to_string()))?;
        debug!("Gemini answered {} bytes", text.len());

        parse_suggestion(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .flatten()
            .filter_map(|c| c.content.as_ref())
            .filter_map(|c| c.parts.as_ref())
            .flatten()
            .find_map(|p| p.text.as_deref())
    }
}

/// Theme as the model writes it; every config field is optional
#[derive(Debug, Deserialize)]
struct RawSuggestion {
    template: String,
    #[serde(default)]
    config: RawConfig,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    color1: Option<String>,
    color2: Option<String>,
    size: Option<f32>,
    density: Option<f32>,
    expansion: Option<f32>,
    speed: Option<f32>,
}

/// Parse a model answer into a sanitized theme.
///
/// Accepts bare JSON or JSON wrapped in a Markdown code fence. Missing
/// config fields take their defaults; an unknown template is an error.
pub fn parse_suggestion(text: &str) -> ThemeResult<ThemeSuggestion> {
    let body = strip_code_fence(text);
    let raw: RawSuggestion = serde_json::from_str(body)
        .map_err(|e| ThemeError::InvalidResponse(format!("theme JSON: {}", e)))?;

    let template: ParticleTemplate = raw
        .template
        .parse()
        .map_err(|_| ThemeError::InvalidResponse(format!("unknown template {:?}", raw.template)))?;

    let defaults = ParticleConfig::default();
    let config = ParticleConfig {
        color1: raw.config.color1.unwrap_or(defaults.color1),
        color2: raw.config.color2.unwrap_or(defaults.color2),
        size: raw.config.size.unwrap_or(defaults.size),
        density: raw.config.density.unwrap_or(defaults.density),
        expansion: raw.config.expansion.unwrap_or(defaults.expansion),
        speed: raw.config.speed.unwrap_or(defaults.speed),
    }
    .sanitized();

    let message = raw
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("The field reshapes into {}", template));

    Ok(ThemeSuggestion {
        template,
        config,
        message,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            // Drop the info string ("json", "JSON", ...) up to the first newline
            let rest = match rest.split_once('\n') {
                Some((info, body)) if !info.trim_start().starts_with('{') => body,
                _ => rest,
            };
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}
