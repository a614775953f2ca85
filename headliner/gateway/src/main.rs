use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use dotenvy::dotenv;
use gateway::app;
use headliner_ai::{AiState, InferenceCfg, Rewriter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(5000);
    let ip: IpAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    let cfg = InferenceCfg::from_env();
    let rewriter = Rewriter::new(&cfg)?;
    if rewriter.is_remote() {
        info!(api_url = %cfg.api_url, "HUGGINGFACE_API_KEY found");
    } else {
        warn!("HUGGINGFACE_API_KEY not set; running in fallback mode (rule-based rewriting only)");
    }

    let app = app(AiState::new(rewriter));

    let addr = SocketAddr::new(ip, port);
    info!("listening on http://{}", addr);
    info!("  GET  /  |  GET  /api/health  |  POST /api/rewrite");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
