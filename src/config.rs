use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub centre_name: String,
    /// Delay applied by the in-process directory and submission endpoints,
    /// standing in for the latency of the real services.
    pub simulated_latency_ms: u64,
    /// Empty means notifications go to the log instead of a webhook.
    pub notify_webhook_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            centre_name: env::var("CENTRE_NAME")
                .unwrap_or_else(|_| "Motbook Test Centre".to_string()),
            simulated_latency_ms: env::var("SIMULATED_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            notify_webhook_url: env::var("NOTIFY_WEBHOOK_URL").unwrap_or_default(),
        }
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
