//! Taskboard entry-point: loads settings, opens the access log, and serves
//! the REST API with OpenAPI docs in debug builds.

mod server;

use std::sync::Arc;

use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use taskboard::inbound::http::state::HttpState;
use taskboard::outbound::access_log::FileAccessLog;
use taskboard::outbound::memory::InMemoryStore;
use taskboard::settings::ServerSettings;

/// Load settings from the command line, environment and config files.
fn load_settings<I, T>(args: I) -> std::io::Result<ServerSettings>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ServerSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;
    let bind_addr = settings.bind_addr()?;
    let log_path = settings.access_log_path();

    let (access_log, writer) = FileAccessLog::open(&log_path).await.map_err(|e| {
        std::io::Error::other(format!(
            "failed to open access log at {}: {e}",
            log_path.display()
        ))
    })?;

    let store = Arc::new(InMemoryStore::seeded());
    let http_state = HttpState::in_memory(store, Arc::new(DefaultClock), settings.admin_token());
    let config = ServerConfig::new(bind_addr, http_state).with_access_log(Arc::new(access_log));

    info!(addr = %config.bind_addr(), log = %log_path.display(), "starting taskboard");
    let result = create_server(config)?.await;

    // The server owned the last sender; wait for queued lines to land.
    if let Err(e) = writer.await {
        warn!(error = %e, "access log writer stopped abnormally");
    }
    result
}
