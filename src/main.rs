use crate::config::AppConfig;
use crate::router::{handle, AppState};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod adapters;
mod client;
mod config;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod templates;
mod utils;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    // 1️⃣ Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Logging: RUST_LOG wins, NEARBY_LOG otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3️⃣ Directory API client
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "could not build the API client");
            std::process::exit(1);
        }
    };

    // 4️⃣ Start the server
    let addr = state.config.bind_addr;
    info!(%addr, api = %state.api.base_url(), "starting server");

    let server = Server::bind(&addr).max_workers(state.config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
