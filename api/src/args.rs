use clap::Parser;
use gutcheck_core::domain::common::{GutcheckConfig, LLMConfig, ProductDbConfig, RateLimitConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "gutcheck-api", about = "Low-FODMAP product scanning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub product_db: ProductDbArgs,

    #[command(flatten)]
    pub rate_limit: RateLimitArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api/v1".
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.0-flash"
    )]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProductDbArgs {
    #[arg(
        long = "product-db-base-url",
        env = "PRODUCT_DB_BASE_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RateLimitArgs {
    /// Vision requests allowed per caller per window.
    #[arg(
        long = "vision-rate-limit",
        env = "VISION_RATE_LIMIT",
        default_value_t = 20
    )]
    pub max_requests: u32,

    #[arg(
        long = "vision-rate-window-secs",
        env = "VISION_RATE_WINDOW_SECS",
        default_value_t = 3600
    )]
    pub window_secs: u64,
}

impl From<Args> for GutcheckConfig {
    fn from(args: Args) -> Self {
        GutcheckConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            product_db: ProductDbConfig {
                base_url: args.product_db.base_url,
            },
            rate_limit: RateLimitConfig {
                max_requests: args.rate_limit.max_requests,
                window_secs: args.rate_limit.window_secs,
            },
        }
    }
}
