mod config;
mod error;
mod routes;
mod state;

use clap::Parser;

use crate::config::{Cli, Settings};
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::from(&cli);
    let state = state::AppState::new(settings);

    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(&cli.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: cli.addr.clone(), source })?;

    tracing::info!(
        addr = %cli.addr,
        dispatch = %settings.client.dispatch,
        ping_secs = settings.ping_interval.as_secs(),
        "meowww listening"
    );
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
