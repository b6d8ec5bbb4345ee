use crate::domain::{
    common::{GutcheckConfig, services::Service},
    knowledge::KnowledgeBase,
    rate_limit::services::FixedWindowLimiter,
};
use crate::infrastructure::{
    llm::GeminiVisionClient, product_db::OpenFoodFactsClient, rate_limit::InMemoryRateLimitStore,
};

pub type GutcheckService = Service<OpenFoodFactsClient, GeminiVisionClient, InMemoryRateLimitStore>;

/// Wire the shared knowledge base and production adapters into one
/// service value the HTTP layer can hold.
pub fn create_service(config: GutcheckConfig) -> anyhow::Result<GutcheckService> {
    let knowledge_base = KnowledgeBase::shared();
    let product_db = OpenFoodFactsClient::new(config.product_db.base_url.clone());
    let vision_classifier = GeminiVisionClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
    );
    let vision_limiter =
        FixedWindowLimiter::new(InMemoryRateLimitStore::new(), &config.rate_limit);

    Ok(Service::new(
        knowledge_base,
        product_db,
        vision_classifier,
        vision_limiter,
    ))
}
