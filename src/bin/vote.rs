use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ballotbox::config::Config;
use ballotbox::db::connection::{init_db, run_migrations};
use ballotbox::routes::vote_routes::vote_routes;
use ballotbox::state::{AppState, VoteOptions};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    let pool = match init_db(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    // must not start serving without the votes table
    if let Err(e) = run_migrations(&pool).await {
        error!("startup migration failed: {e}");
        std::process::exit(1);
    }

    let options = VoteOptions::new(config.option_a.clone(), config.option_b.clone());
    info!(first = %options.first, second = %options.second, "configured options");

    let app = vote_routes().with_state(AppState::new(pool, options));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.vote_port));
    info!("vote service listening on http://{addr}");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
