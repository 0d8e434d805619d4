use serde::Deserialize;

use crate::models::locale::Locale;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Inference provider API key (bearer token)
    pub openai_api_key: String,

    /// Root of the OpenAI-compatible API, without the trailing endpoint path
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Vision-capable chat completion model
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    #[serde(default = "default_temperature")]
    pub analysis_temperature: f32,

    /// Language of the free-text values in the analysis ("en" or "ru")
    #[serde(default)]
    pub response_locale: Locale,

    /// Maximum accepted request body, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
