//! API server entry point.

use api::config::Config;
use tokio::signal;

/// Resolves once the process is asked to stop.
///
/// A listener that fails to install is logged and never fires, leaving
/// the other one in charge.
async fn wait_for_shutdown() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        () = interrupt => "interrupt",
        () = terminate => "terminate",
    };
    tracing::info!(signal = received, "stopping bookmarks API");
}

#[tokio::main]
async fn main() {
    // 1. Load .env (if any) and configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("invalid configuration");

    // 2. Initialize tracing (stdout plus the optional JSON log file)
    api::telemetry::init(&config).expect("failed to initialize logging");
    tracing::info!(
        environment = %config.environment,
        log_file = ?config.log_file,
        "configuration loaded"
    );

    // 3. Create the bookmark store and application state
    let addr = config.addr();
    let state = api::create_default_state(config);

    // 4. Build the application
    let app = api::create_app(state);

    // 5. Start server
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .expect("server error");

    tracing::info!("bookmarks API stopped");
}
