use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// FODMAP trigger class of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FodmapCategory {
    Fructans,
    Galactans,
    Polyols,
    Fructose,
    Lactose,
    Other,
}

/// Display tier of a record, independent of the numeric severity
/// weight used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    High,
    Moderate,
    Low,
}

/// One canonical ingredient with everything the UI needs to explain a
/// match: why it is a trigger, what it does, where it hides, and what
/// to eat instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientRecord {
    /// Canonical identifier, unique and lowercase.
    pub key: String,
    pub display_name: String,
    /// Risk weight, 1-10.
    pub severity: u8,
    pub category: FodmapCategory,
    /// Descriptive label of the chemical trigger class.
    pub fodmap_type: String,
    pub rationale: String,
    pub symptoms: Vec<String>,
    pub found_in: Vec<String>,
    pub risk_tier: RiskTier,
    /// Tolerated quantity, if one is known at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_serving: Option<String>,
    pub alternatives: Vec<String>,
    /// Every surface form resolving to this record, canonical name
    /// included. Never empty.
    pub aliases: Vec<String>,
}
