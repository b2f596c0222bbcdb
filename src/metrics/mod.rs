use std::sync::{Arc, OnceLock};

use ::metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Account and session counters, exported in Prometheus text format
#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    /// The recorder is process global; every instance shares it
    pub fn new() -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();

            if ::metrics::set_global_recorder(recorder).is_err() {
                ::tracing::warn!("A metrics recorder is already installed, metrics will not be exported");
            }

            Self::describe_metrics();

            handle
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn describe_metrics() {
        describe_counter!("accounts_sign_ups_total", "Total number of created accounts");
        describe_counter!("accounts_updates_total", "Total number of account updates");
        describe_counter!(
            "auth_login_attempts_total",
            "Total number of login attempts by outcome"
        );
        describe_counter!("auth_logouts_total", "Total number of invalidated sessions");
        describe_gauge!("users_total", "Total number of accounts");
        describe_gauge!("sessions_active", "Number of sessions currently stored");
    }

    pub fn record_sign_up(&self) {
        counter!("accounts_sign_ups_total").increment(1);
    }

    pub fn record_update(&self) {
        counter!("accounts_updates_total").increment(1);
    }

    pub fn record_login(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        counter!("auth_login_attempts_total", "outcome" => outcome).increment(1);
    }

    pub fn record_logout(&self) {
        counter!("auth_logouts_total").increment(1);
    }

    pub fn set_users_total(&self, count: usize) {
        gauge!("users_total").set(count as f64);
    }

    pub fn set_sessions_active(&self, count: usize) {
        gauge!("sessions_active").set(count as f64);
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}
