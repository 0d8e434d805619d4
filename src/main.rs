use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use flower_care_analyzer::app_state::AppState;
use flower_care_analyzer::config::AppConfig;
use flower_care_analyzer::routes;
use flower_care_analyzer::services::{analysis::AnalysisSettings, vision::OpenAiVisionClient};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing flower-care-analyzer server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");

    metrics::describe_counter!(
        "analysis_requests_total",
        "Flower analysis requests by outcome"
    );
    metrics::describe_histogram!(
        "analysis_provider_seconds",
        "Time spent waiting on the inference provider"
    );

    tracing::info!(
        base_url = %config.openai_base_url,
        model = %config.openai_model,
        locale = %config.response_locale,
        "Initializing inference provider client"
    );
    let vision = OpenAiVisionClient::new(&config.openai_base_url, &config.openai_api_key);

    let state = AppState::new(vision, AnalysisSettings::from(&config));

    let app = routes::router(state, config.max_upload_bytes)
        .merge(routes::metrics::metrics_router(prometheus_handle));

    tracing::info!("Starting flower-care-analyzer on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
