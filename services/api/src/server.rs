use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use redress::config::AppConfig;
use redress::error::AppError;
use redress::telemetry;
use redress::workflows::letters::{AnthropicCompletionClient, CompletionClient, LetterService};
use redress::workflows::rights::RightsService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rights_service = Arc::new(RightsService::standard()?);
    info!(entries = rights_service.book().len(), "rule book loaded");

    let client = AnthropicCompletionClient::from_config(&config.letters)
        .map(|client| Arc::new(client) as Arc<dyn CompletionClient>);
    if client.is_none() {
        warn!("ANTHROPIC_API_KEY not set; letters will use the local template");
    }
    let letter_service = Arc::new(LetterService::new(client, config.letters.max_tokens));

    let app = with_application_routes(rights_service, letter_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "redress service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
