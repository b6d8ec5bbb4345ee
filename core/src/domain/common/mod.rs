pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct GutcheckConfig {
    pub llm: LLMConfig,
    pub product_db: ProductDbConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

#[derive(Clone, Debug)]
pub struct ProductDbConfig {
    pub base_url: String,
}

/// Fixed-window limit for the vision classification path, keyed by
/// caller identity.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window_secs: 3600,
        }
    }
}
