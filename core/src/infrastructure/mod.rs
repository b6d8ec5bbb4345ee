pub mod llm;
pub mod product_db;
pub mod rate_limit;
