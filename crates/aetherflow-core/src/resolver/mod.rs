//! Theme resolvers
//!
//! A [`ThemeResolver`] turns a free-text prompt into a [`ThemeSuggestion`].
//! Two backends exist:
//!
//! - [`GeminiResolver`] asks the Gemini `generateContent` API for a JSON theme
//! - [`KeywordResolver`] works offline from keyword and color tables
//!
//! Resolvers are blocking; [`resolve_theme`] runs one on tokio's blocking
//! pool and converts the outcome into the [`SceneEvent`] the state container
//! expects.

mod gemini;
mod keyword;

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::{ThemeError, ThemeResult};
use crate::settings::{ResolverKind, Settings};
use crate::state::SceneEvent;
use crate::types::{RequestToken, ThemeSuggestion};

pub use gemini::{parse_suggestion, GeminiResolver};
pub use keyword::KeywordResolver;

/// Anything that can suggest a theme for a prompt
pub trait ThemeResolver: Send + Sync {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Resolve `prompt` into a theme. May block on network I/O.
    fn resolve(&self, prompt: &str) -> ThemeResult<ThemeSuggestion>;
}

/// Resolver shared between the UI and background tasks
pub type SharedResolver = Arc<dyn ThemeResolver>;

/// Build the resolver selected in `settings`
pub fn build_resolver(settings: &Settings) -> ThemeResult<SharedResolver> {
    match settings.resolver_kind() {
        ResolverKind::Offline => Ok(Arc::new(KeywordResolver::new())),
        ResolverKind::Gemini => {
            let api_key = settings.api_key.clone().ok_or(ThemeError::MissingApiKey)?;
            Ok(Arc::new(GeminiResolver::new(
                api_key,
                settings.gemini_model.clone(),
                settings.request_timeout(),
            )))
        }
    }
}

/// Run `resolver` for `prompt` off the UI thread and wrap the outcome as a scene event
pub async fn resolve_theme(
    resolver: SharedResolver,
    token: RequestToken,
    prompt: String,
) -> SceneEvent {
    let backend = resolver.name();
    let outcome = tokio::task::spawn_blocking(move || resolver.resolve(&prompt)).await;

    match outcome {
        Ok(Ok(suggestion)) => {
            info!("{} resolver answered {} with {}", backend, token, suggestion.template);
            SceneEvent::ThemeResolved { token, suggestion }
        }
        Ok(Err(e)) => {
            warn!("{} resolver failed {}: {}", backend, token, e);
            SceneEvent::ThemeFailed {
                token,
                reason: e.to_string(),
            }
        }
        Err(e) => {
            error!("{} resolver task for {} did not finish: {}", backend, token, e);
            SceneEvent::ThemeFailed {
                token,
                reason: format!("resolver task aborted: {}", e),
            }
        }
    }
}
