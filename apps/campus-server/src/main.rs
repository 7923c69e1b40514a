//! Campus API server.
//!
//! Loads configuration, installs logging, opens the database, applies
//! migrations, and serves the users/courses API until Ctrl-C or SIGTERM.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use campus_http::{ApiResult, Problem};
use clap::Parser;
use courses::CoursesModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, LogFormat, LoggingConfig};

#[derive(Debug, Parser)]
#[command(name = "campus-server", version, about = "Campus users and courses API")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging);
    tracing::info!(
        config = ?cli.config,
        "Starting campus-server"
    );

    let db = connect(&cfg).await?;
    CoursesModule::migrate(&db)
        .await
        .context("database migration failed")?;

    let module = CoursesModule::init(db.clone(), cfg.courses.clone(), &cfg.authn)
        .context("failed to initialize courses module")?;
    let router = build_router(&module, db, &cfg);

    let addr: SocketAddr = cfg
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", cfg.server.bind_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let registry = tracing_subscriber::registry().with(filter);
    match cfg.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

async fn connect(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.database.dsn.clone());
    opts.max_connections(cfg.database.max_conns)
        .acquire_timeout(Duration::from_secs(cfg.database.acquire_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;
    tracing::info!(max_conns = cfg.database.max_conns, "Database connected");
    Ok(db)
}

fn build_router(module: &CoursesModule, db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let health = Router::new()
        .route("/health", get(health))
        .with_state(db);

    let mut router = module.router().merge(health);

    // Body limit
    router = router.layer(RequestBodyLimitLayer::new(cfg.server.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.server.body_limit_bytes));

    // Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(cfg.server.request_timeout_secs),
    ));

    // Trace (outermost)
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    )
}

async fn health(State(db): State<DatabaseConnection>) -> ApiResult<Json<Value>> {
    db.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "health check: database unreachable");
        Problem::service_unavailable("Database is unavailable")
    })?;
    Ok(Json(json!({ "status": "ok" })))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C"),
        () = terminate => tracing::info!("Received SIGTERM"),
    }
    tracing::info!("HTTP server shutting down gracefully");
}
