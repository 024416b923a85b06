//! Service entry-point: configuration, database pool, and server wiring.

use std::net::SocketAddr;

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig};
use user_service::server::{ServerConfig, create_server};

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "user-service", about = "CRUD HTTP service for user records")]
struct Cli {
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Address the HTTP listener binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DB_POOL_MAX_SIZE", default_value_t = 10)]
    pool_max_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let pool_config = PoolConfig::new(&cli.database_url).with_max_size(cli.pool_max_size);
    let pool = DbPool::new(pool_config).await.map_err(|e| {
        std::io::Error::other(format!("database pool initialisation failed: {e}"))
    })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(cli.bind_addr, pool))?;
    server.await
}
