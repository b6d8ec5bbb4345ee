use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Caller identity stored in request extensions, used as the
/// rate-limit key for the vision path.
#[derive(Clone, Debug)]
pub struct ClientContext {
    pub caller_key: String,
}

/// Resolves the caller key for the request. Behind a reverse proxy the
/// first entry of `X-Forwarded-For` is the client; otherwise the peer
/// address of the connection is used.
pub async fn client_context_middleware(mut req: Request, next: Next) -> Response {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let caller_key = forwarded.unwrap_or_else(|| {
        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    });

    req.extensions_mut().insert(ClientContext { caller_key });

    next.run(req).await
}
