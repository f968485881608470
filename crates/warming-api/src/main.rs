//! Global warming narrative server entry point.

use std::error::Error;

use warming_api::config::Config;
use warming_api::routes;
use warming_api::state::AppState;
use warming_api::telemetry;
use warming_data::csv_source::CsvRecordSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = Config::from_env()?;

    // Initialize tracing subscriber (and OTLP export when configured).
    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting global warming narrative server");

    // Load the dataset once; a failed load still serves a visible notice.
    let source = CsvRecordSource::new(config.data_path.clone());
    let app_state = AppState::load(&source).await;

    // Build router.
    let app = routes::app(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    telemetry.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
