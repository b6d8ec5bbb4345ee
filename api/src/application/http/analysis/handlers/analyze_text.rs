use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use gutcheck_core::domain::analysis::{
    entities::AnalysisVerdict,
    ports::FoodScanService,
    services::looks_like_ingredients_list,
    value_objects::AnalyzeTextInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeTextResponse {
    pub data: AnalysisVerdict,
    /// Heuristic hint that the submitted text actually looks like an
    /// ingredients list rather than arbitrary prose.
    pub plausible_label: bool,
}

#[utoipa::path(
    post,
    path = "/analysis/text",
    tag = "analysis",
    summary = "Classify ingredient text",
    description = "Runs the deterministic FODMAP engine over raw ingredients text",
    responses(
        (status = 200, body = AnalyzeTextResponse)
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalyzeTextResponse>, ApiError> {
    let plausible_label = looks_like_ingredients_list(&payload.ingredients_text);

    let verdict = state
        .service
        .analyze_text(AnalyzeTextInput {
            ingredients_text: payload.ingredients_text,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeTextResponse {
        data: verdict,
        plausible_label,
    }))
}
