use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

mod application;
mod args;

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log.filter.clone()));

    if args.log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let args = Arc::new(Args::parse());

    init_logging(&args);

    let state = state(args.clone())?;
    let router = router(state)?;

    let host = IpAddr::from_str(&args.server.host)?;
    let addr = SocketAddr::from((host, args.server.port));

    tracing::info!("listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}
