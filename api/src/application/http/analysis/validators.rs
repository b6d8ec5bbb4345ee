use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "ingredients_text must be between 1 and 5000 characters"
    ))]
    #[schema(example = "mąka pszenna, woda, sól, cebula w proszku")]
    pub ingredients_text: String,
}
