use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use gutcheck_core::domain::{
    analysis::ports::FoodScanService, knowledge::IngredientRecord,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetIngredientResponse {
    pub data: IngredientRecord,
}

#[utoipa::path(
    get,
    path = "/ingredients/{name}",
    tag = "analysis",
    summary = "Look up one ingredient",
    description = "Returns the full knowledge-base record for an ingredient name or alias",
    responses(
        (status = 200, body = GetIngredientResponse),
        (status = 404, description = "Ingredient not present in the knowledge base")
    ),
    params(
        ("name" = String, Path, description = "Ingredient name or alias"),
    )
)]
pub async fn get_ingredient(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientResponse>, ApiError> {
    let record = state
        .service
        .lookup_ingredient(name)
        .ok_or_else(|| ApiError::NotFound("ingredient not found".to_string()))?;

    Ok(Response::OK(GetIngredientResponse { data: record }))
}
