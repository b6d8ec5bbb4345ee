pub mod analysis;
pub mod common;
pub mod knowledge;
pub mod rate_limit;
