//! Tracing setup and server startup for refrelay.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use refrelay_api::{AppContext, InterfaceConfig, InterfaceServer};
use refrelay_config::{Config, ConfigLoader};

use crate::register::{build_http_client, register_providers, register_store};

/// Initialize tracing with console output and an optional daily log file.
///
/// `RUST_LOG` wins; otherwise development runs at `debug` and everything
/// else at `info`. The returned guard must live as long as the process.
pub(crate) fn init_tracing(
    config: &Config,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let default_level = if config.server.environment.is_development() {
        "debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match &config.logging.directory {
        Some(dir) => {
            let dir = PathBuf::from(ConfigLoader::expand_path(&dir.to_string_lossy()));
            let (writer, guard) = file_writer(&dir)?;
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console = if config.server.environment.is_development() {
        fmt::layer().pretty().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).with_ansi(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn file_writer(
    dir: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("refrelay")
        .filename_suffix("log")
        .max_log_files(30)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Run the server in foreground until Ctrl-C or SIGTERM.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting refrelay v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {:?}", config.server.environment);

    let http = build_http_client(&config)?;
    let providers = register_providers(&config, &http);
    let mut ctx = AppContext::new(providers);
    if let Some(store) = register_store(&config, &http) {
        ctx = ctx.with_store(store);
    }
    if !ctx.providers().is_empty() {
        info!("Default provider: {}", ctx.default_provider());
    }

    let interface_config = InterfaceConfig::new(
        config.server.host.clone(),
        config.server.port,
        config.server.frontend_url.clone(),
    );
    let server = InterfaceServer::new(interface_config, Arc::new(ctx));

    info!("API Endpoints:");
    info!("  GET  /                        - Health check");
    info!("  POST /api/llm/invoke          - Invoke LLM");
    info!("  POST /api/references/filter   - Filter references");
    info!("  POST /api/references/update   - Update reference");

    server.run(shutdown_signal()).await
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => warn!("Failed to install Ctrl+C handler: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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
}

/// Human-readable configuration summary with secrets masked.
pub(crate) fn config_summary(config: &Config) -> String {
    fn secret(value: Option<&str>) -> &'static str {
        if value.is_some() { "set" } else { "not set" }
    }

    let mut lines = vec![
        format!("server.host          = {}", config.server.host),
        format!("server.port          = {}", config.server.port),
        format!("server.frontend_url  = {}", config.server.frontend_url),
        format!("server.environment   = {:?}", config.server.environment),
        format!("providers.gemini     = {}", secret(config.providers.gemini.api_key())),
        format!("providers.openai     = {}", secret(config.providers.openai.api_key())),
        format!(
            "store.url            = {}",
            config.store.url.as_deref().unwrap_or("not set")
        ),
        format!("store.key            = {}", secret(config.store.key.as_deref().filter(|k| !k.is_empty()))),
        format!("store.table          = {}", config.store.table),
        format!(
            "upstream.timeouts    = connect {}s, total {}s",
            config.upstream.connect_timeout_seconds, config.upstream.timeout_seconds
        ),
    ];
    if let Some(dir) = &config.logging.directory {
        lines.push(format!("logging.directory    = {}", dir.display()));
    }
    lines.join("\n")
}
