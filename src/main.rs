use actix_web::{App, HttpServer};
use anyhow::Context;
use lighter_account::config::{self, ObservabilityConfig};
use lighter_account::{AppState, SecurityHeadersMiddleware, SessionStore, router};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("failed to load configuration")?;

    init_tracing(&config.observability);

    let state = AppState::from_config(&config.auth)
        .map_err(|e| anyhow::anyhow!("invalid password hashing parameters: {}", e))?;
    let sweeper = SessionStore::spawn_sweeper(
        state.sessions.clone(),
        config.auth.session_sweep_interval(),
    );

    let headers = config.security.headers.clone();
    let (host, port) = config.server.address();

    ::tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        %host,
        port,
        "Starting server"
    );

    let mut server = HttpServer::new(move || {
        let state = state.clone();

        App::new()
            .wrap(SecurityHeadersMiddleware::new(headers.clone()))
            .configure(move |app| {
                state.register(app);
                router::route(app);
            })
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {}:{}", host, port))?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;
    sweeper.abort();

    ::tracing::info!("Server stopped");

    Ok(())
}
