use axum::{
    Extension,
    extract::{Multipart, State},
};

use crate::application::{
    client_context::ClientContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use gutcheck_core::domain::{
    analysis::{
        entities::{AnalysisVerdict, VerdictSource, VerdictTier},
        ports::FoodScanService,
        value_objects::ClassifyImageInput,
    },
    common::entities::app_errors::CoreError,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifyImageResponse {
    pub data: AnalysisVerdict,
    pub source: VerdictSource,
}

/// Map the vision outcome to the response. A flaky vision collaborator
/// degrades to an UNKNOWN verdict instead of a hard failure; rate-limit
/// and other errors still surface as errors.
fn vision_response(
    outcome: Result<AnalysisVerdict, CoreError>,
) -> Result<ClassifyImageResponse, ApiError> {
    let verdict = match outcome {
        Ok(verdict) => verdict,
        Err(CoreError::ExternalService(message)) => {
            tracing::warn!("vision classification failed: {}", message);
            AnalysisVerdict {
                status: VerdictTier::Unknown,
                found: Vec::new(),
                message: "Nie udało się przeanalizować zdjęcia. Spróbuj ponownie.".to_string(),
                score: 0,
                matches: Vec::new(),
                alternatives: None,
                warnings: None,
            }
        }
        Err(e) => return Err(ApiError::from(e)),
    };

    Ok(ClassifyImageResponse {
        data: verdict,
        source: VerdictSource::Ai,
    })
}

#[utoipa::path(
    post,
    path = "/analysis/image",
    tag = "analysis",
    summary = "Classify a label photo",
    description = "Sends a product label photo to the vision classifier. Rate limited per caller.",
    responses(
        (status = 200, body = ClassifyImageResponse),
        (status = 429, description = "Vision rate limit exceeded")
    ),
)]
pub async fn classify_image(
    State(state): State<AppState>,
    Extension(client_context): Extension<ClientContext>,
    mut multipart: Multipart,
) -> Result<Response<ClassifyImageResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "Image too large. Max size is {} bytes",
                    MAX_IMAGE_SIZE
                )));
            }

            image_data = Some(data.to_vec());
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let outcome = state
        .service
        .classify_image(ClassifyImageInput {
            image_data,
            caller_key: client_context.caller_key,
        })
        .await;

    Ok(Response::OK(vision_response(outcome)?))
}
