use std::time::Instant;

use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::models::analysis::{AnalysisResult, SchemaIssues};
use crate::models::locale::Locale;
use crate::services::prompt;
use crate::services::vision::{ProviderError, VisionProvider, VisionRequest};

/// Content assumed when the provider returns no first choice.
const EMPTY_COMPLETION: &str = "{}";

/// Per-process analysis parameters, fixed at start-up.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub model: String,
    pub temperature: f32,
    pub locale: Locale,
}

impl From<&AppConfig> for AnalysisSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            model: config.openai_model.clone(),
            temperature: config.analysis_temperature,
            locale: config.response_locale,
        }
    }
}

/// An uploaded image held in memory.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    /// Declared media type of the multipart part, if any.
    pub content_type: Option<String>,
}

/// Everything that can go wrong while handling one analysis request.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Image file is required")]
    MissingImage,

    #[error("Image exceeds the upload size limit")]
    UploadTooLarge,

    #[error("Model did not return valid JSON")]
    InvalidJson { raw: String },

    #[error("Response schema validation failed")]
    Schema(SchemaIssues),

    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Send one image to the provider and validate what comes back.
///
/// Makes exactly one provider call and never retries.
pub async fn analyze_image(
    provider: &dyn VisionProvider,
    settings: &AnalysisSettings,
    upload: &ImageUpload,
) -> Result<AnalysisResult, AnalyzeError> {
    let request = VisionRequest {
        model: settings.model.clone(),
        system: prompt::system_instruction(settings.locale),
        prompt: prompt::analysis_prompt(settings.locale),
        image_data_url: prompt::to_data_url(upload.content_type.as_deref(), &upload.bytes),
        temperature: settings.temperature,
    };

    info!(
        model = %settings.model,
        locale = %settings.locale,
        image_bytes = upload.bytes.len(),
        "Requesting flower analysis"
    );

    let start = Instant::now();
    let completion = provider.complete(request).await;
    metrics::histogram!("analysis_provider_seconds").record(start.elapsed().as_secs_f64());

    let content = match completion {
        Ok(content) => content.unwrap_or_else(|| EMPTY_COMPLETION.to_string()),
        Err(e) => {
            error!(error = %e, "Flower analysis failed");
            return Err(e.into());
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Model output is not valid JSON");
            return Err(AnalyzeError::InvalidJson { raw: content });
        }
    };

    AnalysisResult::from_value(value).map_err(|issues| {
        let fields: Vec<&str> = issues.paths().collect();
        warn!(?fields, "Model output failed schema validation");
        AnalyzeError::Schema(issues)
    })
}
