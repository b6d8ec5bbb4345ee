use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::knowledge::IngredientRecord;

/// Four-valued verdict classification shared by the deterministic
/// engine and the vision-model collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerdictTier {
    Red,
    Yellow,
    Green,
    Unknown,
}

/// Which backend produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerdictSource {
    /// Deterministic engine over product-database ingredient text.
    Db,
    /// External vision model.
    Ai,
}

/// One detected trigger: canonical display name, the surface form that
/// actually matched in the text, and the resolved record when the
/// knowledge base has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientMatch {
    pub name: String,
    pub original_text: String,
    pub severity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<IngredientRecord>,
}

/// Immutable classification verdict. A value object built fresh per
/// call; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisVerdict {
    pub status: VerdictTier,
    /// Canonical display names, insertion order, no duplicates.
    pub found: Vec<String>,
    pub message: String,
    /// Aggregated severity, clamped to 0-100.
    pub score: u8,
    pub matches: Vec<IngredientMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Product data returned by the barcode collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductInfo {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    /// Raw free-form ingredients text, locale unspecified.
    pub ingredients_text: String,
}

/// Verdict for a scanned product, bundled with what we know about the
/// product itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BarcodeScanResult {
    pub product_name: String,
    pub product_brand: String,
    pub source: VerdictSource,
    pub verdict: AnalysisVerdict,
}
