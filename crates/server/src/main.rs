use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

use crate::{config::Config, utils::shutdown::shutdown_signal};

mod app;
mod config;
mod doc;
mod middleware;
mod routes;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().inspect_err(|e| error!("Invalid configuration: {e}"))?;

    let listener = TcpListener::bind(config.addr()).await?;
    info!("Running axum on http://{}", listener.local_addr()?);

    axum::serve(listener, app::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
