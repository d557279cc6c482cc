//! Narrative service settings.
//!
//! Values are baked in at compile time (the web bundle has no runtime
//! environment) and, on native targets, may be overridden by the same
//! variable names at runtime.

use std::fmt;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b:free";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

// `option_env!` only takes literals, so the build-time lookups below repeat
// these names.
#[cfg(not(target_arch = "wasm32"))]
const ENV_API_KEY: &str = "MINDFUSE_OPENROUTER_API_KEY";
#[cfg(not(target_arch = "wasm32"))]
const ENV_BASE_URL: &str = "MINDFUSE_OPENROUTER_BASE_URL";
#[cfg(not(target_arch = "wasm32"))]
const ENV_MODEL: &str = "MINDFUSE_NARRATIVE_MODEL";

#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl NarrativeConfig {
    /// Defaults overlaid with build-time and (native only) runtime variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(key) = option_env!("MINDFUSE_OPENROUTER_API_KEY") {
            config.api_key = non_empty(key);
        }
        if let Some(url) = option_env!("MINDFUSE_OPENROUTER_BASE_URL").and_then(non_empty) {
            config.base_url = url;
        }
        if let Some(model) = option_env!("MINDFUSE_NARRATIVE_MODEL").and_then(non_empty) {
            config.model = model;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(key) = runtime_var(ENV_API_KEY) {
                config.api_key = Some(key);
            }
            if let Some(url) = runtime_var(ENV_BASE_URL) {
                config.base_url = url;
            }
            if let Some(model) = runtime_var(ENV_MODEL) {
                config.model = model;
            }
        }

        config
    }

    /// Chat completions endpoint for the configured base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Never prints the key itself.
impl fmt::Debug for NarrativeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrativeConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok().as_deref().and_then(non_empty)
}
