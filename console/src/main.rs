// console/src/main.rs

use anyhow::Context;
use client::{AdminApi, ApiClient};
use console::Route;
use console::config::load_console_config;
use console::routes::entry_route;
use session::{FileSessionStore, SessionGate};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_console_config(None).context("Failed to load console configuration")?;
    info!(api_base_url = %config.api_base_url, "admin console starting");

    let api = ApiClient::new(config.api_base_url.clone());
    let gate = SessionGate::new(FileSessionStore::new(&config.session_file));

    let landing: Route = config
        .landing_page
        .parse()
        .context("Invalid landing_page in console configuration")?;

    match entry_route(&gate, landing) {
        Route::Login => {
            info!("no active session; sign in at {}", Route::Login.path());
        }
        route => {
            let session = gate.authorize().context("Session marker disappeared")?;
            info!(email = %session.email, "active session, landing on {}", route.path());
            print_overview(&api).await;
        }
    }

    Ok(())
}

/// The dashboard page's stat tiles, printed to the terminal.
async fn print_overview(api: &dyn AdminApi) {
    match api.list_doctors().await {
        Ok(doctors) => println!("Total Doctors: {}", doctors.len()),
        Err(err) => error!("failed to fetch doctors: {err}"),
    }
    match api.list_hospitals().await {
        Ok(hospitals) => println!("Hospitals: {}", hospitals.len()),
        Err(err) => error!("failed to fetch hospitals: {err}"),
    }
    match api.list_users().await {
        Ok(users) => println!("Active Users: {}", users.len()),
        Err(err) => error!("failed to fetch users: {err}"),
    }
}
