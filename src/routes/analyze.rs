use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{warn, Instrument};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::analysis::AnalysisResult;
use crate::models::response::{AnalyzeResponse, ErrorBody, StatusResponse};
use crate::services::analysis::{self, AnalyzeError, ImageUpload};

/// Multipart field carrying the photo.
const IMAGE_FIELD: &str = "image";

const UNEXPECTED_ERROR: &str = "Unexpected server error";

/// POST /api/analyze — identify a flower and describe how to care for it.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    let span = tracing::info_span!("analyze", request_id = %Uuid::new_v4());

    let outcome = async {
        let upload = read_image(multipart).await?;
        analysis::analyze_image(state.vision.as_ref(), &state.settings, &upload).await
    }
    .instrument(span)
    .await;

    metrics::counter!("analysis_requests_total", "outcome" => outcome_label(&outcome))
        .increment(1);

    outcome.map(|result| Json(AnalyzeResponse { result }))
}

/// GET /api/analyze — liveness probe, makes no external calls.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

/// Pull the first `image` field out of the form. It must be a file part.
async fn read_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ImageUpload, AnalyzeError> {
    let mut multipart = multipart.map_err(|e| {
        warn!(error = %e, "Rejected non-multipart upload");
        AnalyzeError::MissingImage
    })?;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(AnalyzeError::MissingImage),
            Err(e) => return Err(body_error(e, "Malformed multipart body")),
        };

        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        if field.file_name().is_none() {
            warn!("Image field arrived as plain text");
            return Err(AnalyzeError::MissingImage);
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| body_error(e, "Failed to read image field"))?;

        return Ok(ImageUpload {
            bytes: bytes.to_vec(),
            content_type,
        });
    }
}

/// A body that trips the size limit mid-stream is a 413, anything else a missing image.
fn body_error(e: MultipartError, context: &'static str) -> AnalyzeError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(error = %e, "Upload exceeds the body size limit");
        return AnalyzeError::UploadTooLarge;
    }
    warn!(error = %e, "{context}");
    AnalyzeError::MissingImage
}

fn outcome_label(outcome: &Result<AnalysisResult, AnalyzeError>) -> &'static str {
    match outcome {
        Ok(_) => "ok",
        Err(AnalyzeError::MissingImage) => "missing_image",
        Err(AnalyzeError::UploadTooLarge) => "upload_too_large",
        Err(AnalyzeError::InvalidJson { .. }) => "invalid_json",
        Err(AnalyzeError::Schema(_)) => "schema_invalid",
        Err(AnalyzeError::Provider(_)) => "provider_error",
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AnalyzeError::MissingImage => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(self.to_string()))
            }
            AnalyzeError::UploadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorBody::new(self.to_string()))
            }
            AnalyzeError::InvalidJson { ref raw } => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    raw: Some(raw.clone()),
                    ..ErrorBody::new(self.to_string())
                },
            ),
            AnalyzeError::Schema(ref issues) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    issues: Some(issues.clone()),
                    ..ErrorBody::new(self.to_string())
                },
            ),
            AnalyzeError::Provider(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(UNEXPECTED_ERROR))
            }
        };

        (status, Json(body)).into_response()
    }
}
