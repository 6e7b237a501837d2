//! BIF Server entry point.
//!
//! Loads configuration, installs logging, wires adapters into handlers, and
//! serves the API until Ctrl-C or SIGTERM. Queued deferred events are
//! drained before the process exits.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bif_server::adapters::http::{
    api_router, with_http_layers, ApiHandlers, StatsHandlers, TodoHandlers,
};
use bif_server::adapters::{
    EventBusConfig, InMemoryStatsRepository, InProcessEventBus, JwtConfig, JwtTokenService,
};
use bif_server::application::{
    AuditLogger, CompleteTodoHandler, GetUserStatsHandler, StatsRecalculationHandler,
    StatsUpdateLogger,
};
use bif_server::config::AppConfig;
use bif_server::ports::{EventPublisher, EventSubscriber, SessionValidator, StatsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.logging.filter, config.json_logs());
    tracing::info!(
        environment = ?config.server.environment,
        production = config.is_production(),
        "Starting BIF server"
    );

    // Auth
    let jwt = JwtConfig {
        secret: config.auth.jwt_secret.clone(),
        access_token_ttl: config.auth.access_token_ttl(),
        leeway: config.auth.leeway(),
    };
    let validator: Arc<dyn SessionValidator> = Arc::new(JwtTokenService::new(jwt));

    // Events
    let bus = Arc::new(InProcessEventBus::new(
        EventBusConfig::default()
            .with_worker_count(config.events.worker_count)
            .with_queue_capacity(config.events.queue_capacity),
    ));
    let publisher: Arc<dyn EventPublisher> = bus.clone();
    let stats_repo: Arc<dyn StatsRepository> = Arc::new(InMemoryStatsRepository::new());

    bus.subscribe("*", Arc::new(AuditLogger::new()));
    bus.subscribe_deferred(
        "todo.completed",
        Arc::new(StatsRecalculationHandler::new(
            stats_repo.clone(),
            publisher.clone(),
        )),
    );
    bus.subscribe_deferred("stats.*", Arc::new(StatsUpdateLogger::new()));
    tracing::info!(
        subscriptions = bus.subscription_count(),
        workers = config.events.worker_count,
        "Event bus ready"
    );

    // HTTP
    let handlers = ApiHandlers {
        validator,
        todo: TodoHandlers::new(Arc::new(CompleteTodoHandler::new(publisher))),
        stats: StatsHandlers::new(Arc::new(GetUserStatsHandler::new(stats_repo))),
    };
    let app = with_http_layers(api_router(handlers), &config.http);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped, draining event bus");
    bus.shutdown().await;
    Ok(())
}

fn init_tracing(directives: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true),
            )
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
