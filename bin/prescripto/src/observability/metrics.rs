use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use axum_prometheus::{PrometheusMetricLayer, PrometheusMetricLayerBuilder};

/// Installs the global Prometheus recorder; call once per process.
pub fn setup_metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    PrometheusMetricLayerBuilder::new()
        .with_ignore_patterns(&["/metrics", "/swagger-ui", "/api-docs"])
        .with_default_metrics()
        .build_pair()
}
