use std::future::Future;

use crate::domain::{
    analysis::{
        entities::{AnalysisVerdict, BarcodeScanResult, ProductInfo},
        value_objects::{AnalyzeTextInput, ClassifyImageInput, ScanBarcodeInput},
    },
    common::entities::app_errors::CoreError,
    knowledge::IngredientRecord,
};

/// Barcode collaborator: open product database returning raw
/// ingredients text for a barcode.
#[cfg_attr(test, mockall::automock)]
pub trait ProductDatabasePort: Send + Sync {
    fn fetch_product(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<ProductInfo>, CoreError>> + Send;
}

/// Vision collaborator: an external, non-deterministic classifier with
/// a verdict contract equivalent to the local engine's, just lower
/// precision. It does not use the local knowledge base.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClassifierPort: Send + Sync {
    fn classify_label(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<AnalysisVerdict, CoreError>> + Send;
}

/// Service trait for the scan workflows exposed over HTTP.
#[cfg_attr(test, mockall::automock)]
pub trait FoodScanService: Send + Sync {
    /// Classify raw ingredient text with the deterministic engine.
    fn analyze_text(
        &self,
        input: AnalyzeTextInput,
    ) -> impl Future<Output = Result<AnalysisVerdict, CoreError>> + Send;

    /// Look a barcode up in the product database and classify its
    /// ingredients text.
    fn scan_barcode(
        &self,
        input: ScanBarcodeInput,
    ) -> impl Future<Output = Result<BarcodeScanResult, CoreError>> + Send;

    /// Send a label photo to the vision collaborator. Rate limited per
    /// caller.
    fn classify_image(
        &self,
        input: ClassifyImageInput,
    ) -> impl Future<Output = Result<AnalysisVerdict, CoreError>> + Send;

    /// Full detail record for a name surfaced in a verdict.
    fn lookup_ingredient(&self, name: String) -> Option<IngredientRecord>;
}
