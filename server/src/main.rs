//! Service entry point: wires storage backends and REST endpoints.

mod server;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = server::AppConfig::from_env()?;
    server::run(config).await
}
