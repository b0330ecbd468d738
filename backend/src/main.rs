//! Server entry-point: loads settings, the in-memory directory and serves the
//! listing endpoints.

mod server;

use actix_web::web;
use clinic_directory::inbound::http::health::HealthState;
use clinic_directory::outbound::memory::InMemoryDirectory;
use clinic_directory::settings::ServerSettings;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};

fn init_tracing(json: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    init_tracing(settings.log_json);

    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let directory = if settings.seed_example_data {
        InMemoryDirectory::seeded().map_err(std::io::Error::other)?
    } else {
        InMemoryDirectory::empty()
    };
    info!(
        %bind_addr,
        owners = directory.owners.len(),
        vets = directory.vets.len(),
        "starting clinic directory"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, directory))?;
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            health_state.mark_unhealthy();
            info!("shutdown requested; liveness now failing while connections drain");
        }
    });
    server.await
}
