use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    analysis::{entities::ProductInfo, ports::ProductDatabasePort},
    common::entities::app_errors::CoreError,
};

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Client for the Open Food Facts v0 product API.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OffLookupResponse {
    status: u8,
    product: Option<OffProduct>,
}

#[derive(Debug, Deserialize)]
struct OffProduct {
    product_name: Option<String>,
    product_name_pl: Option<String>,
    brands: Option<String>,
    ingredients_text: Option<String>,
    ingredients_text_pl: Option<String>,
    ingredients_text_en: Option<String>,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }
}

/// Fold the localized lookup response into a single product record.
/// Polish fields win, then English, then the unqualified fallback;
/// `status == 0` means the barcode is not in the database.
fn into_product_info(barcode: &str, response: OffLookupResponse) -> Option<ProductInfo> {
    if response.status == 0 {
        return None;
    }
    let product = response.product?;

    let name = product
        .product_name_pl
        .filter(|s| !s.is_empty())
        .or(product.product_name)
        .unwrap_or_default();
    let ingredients_text = product
        .ingredients_text_pl
        .filter(|s| !s.is_empty())
        .or(product.ingredients_text_en.filter(|s| !s.is_empty()))
        .or(product.ingredients_text)
        .unwrap_or_default();

    Some(ProductInfo {
        barcode: barcode.to_string(),
        name,
        brand: product.brands.unwrap_or_default(),
        ingredients_text,
    })
}

impl ProductDatabasePort for OpenFoodFactsClient {
    async fn fetch_product(&self, barcode: String) -> Result<Option<ProductInfo>, CoreError> {
        let url = format!("{}/api/v0/product/{}.json", self.base_url, barcode);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Open Food Facts request failed: {}", e);
            CoreError::ExternalService(format!("product database error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Open Food Facts returned error status: {}", status);
            return Err(CoreError::ExternalService(format!(
                "product database returned error: {}",
                status
            )));
        }

        let lookup: OffLookupResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Open Food Facts response: {}", e);
            CoreError::ExternalService(format!("failed to parse product response: {}", e))
        })?;

        Ok(into_product_info(&barcode, lookup))
    }
}
