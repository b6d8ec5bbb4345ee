use thiserror::Error;

/// Errors surfaced by the core service layer.
///
/// The matching engine itself is total over string input and never
/// produces one of these; they come from the external collaborators
/// (product database, vision model) and the rate limiter guarding the
/// vision path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("resource not found")]
    NotFound,

    #[error("external service error: {0}")]
    ExternalService(String),

    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("internal error")]
    Internal,
}
