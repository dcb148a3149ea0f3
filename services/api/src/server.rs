use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAlertFlags, LatestSnapshotCache, LoggingNotifier};
use crate::routes::{with_monitoring_routes, SiteMonitors, VitalsFeed};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use carewatch::config::AppConfig;
use carewatch::error::AppError;
use carewatch::monitors::cognitive::{RiskEvaluator, ScreeningService};
use carewatch::monitors::warehouse::WarehouseAlertService;
use carewatch::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let factor_table = config.screening.factor_table()?;
    info!(
        factors = factor_table.rules().len(),
        custom = config.screening.factor_table_path.is_some(),
        "factor table loaded"
    );

    let cache = Arc::new(LatestSnapshotCache::default());
    let screening = Arc::new(ScreeningService::new(
        cache.clone(),
        RiskEvaluator::new(factor_table),
    ));
    let warehouse = Arc::new(WarehouseAlertService::new(
        Arc::new(LoggingNotifier::default()),
        Arc::new(InMemoryAlertFlags::default()),
        config.alerts.destination.clone(),
    ));

    let app = with_monitoring_routes(
        VitalsFeed { cache, screening },
        warehouse,
        SiteMonitors::default(),
    )
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "carewatch monitoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
