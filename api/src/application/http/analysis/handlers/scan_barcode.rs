use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use gutcheck_core::domain::{
    analysis::{
        entities::BarcodeScanResult, ports::FoodScanService, value_objects::ScanBarcodeInput,
    },
    common::entities::app_errors::CoreError,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanBarcodeResponse {
    pub data: BarcodeScanResult,
}

#[utoipa::path(
    get,
    path = "/products/{barcode}",
    tag = "analysis",
    summary = "Scan a product barcode",
    description = "Looks the barcode up in the product database and classifies its ingredients",
    responses(
        (status = 200, body = ScanBarcodeResponse),
        (status = 404, description = "Barcode not present in the product database")
    ),
    params(
        ("barcode" = String, Path, description = "EAN/UPC barcode"),
    )
)]
pub async fn scan_barcode(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ScanBarcodeResponse>, ApiError> {
    let result = state
        .service
        .scan_barcode(ScanBarcodeInput { barcode })
        .await
        .map_err(|e| match e {
            CoreError::NotFound => {
                ApiError::NotFound("product not found in the database".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(ScanBarcodeResponse { data: result }))
}
