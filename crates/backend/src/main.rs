pub mod api;
pub mod routes;
pub mod shared;

use shared::config;
use shared::seed;
use shared::store::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config()?;

    let state = AppState::new();
    if config.demo.seed {
        seed::seed_demo_data(&state).await;
        tracing::info!("Demo dataset seeded");
    }

    let app = routes::api_router(state);

    let addr: std::net::SocketAddr = config.server.listen.parse()?;
    tracing::info!("Backend listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
