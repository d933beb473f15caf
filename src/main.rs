use anyhow::Result;
use rowsample::{routes, Config};
use std::{env, sync::Arc};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

const PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();

    // ─── 2) resolve config once ──────────────────────────────────────
    let config = Arc::new(Config::from_env());
    info!(csv_path = %config.csv_path.display(), "starting row-sample service");

    // ─── 3) serve ────────────────────────────────────────────────────
    info!("Server starting on port {}", PORT);
    info!("Demo endpoint: GET http://localhost:{}/demo", PORT);
    warp::serve(routes(config)).run(([0, 0, 0, 0], PORT)).await;

    Ok(())
}
