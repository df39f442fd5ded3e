use anyhow::Context;
use async_trait::async_trait;

use super::{NotificationSink, Severity};

/// Posts each notification as JSON to a configured endpoint (a Slack-style
/// incoming webhook or similar).
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotificationSink for WebhookNotifier {
    async fn notify(
        &self,
        title: &str,
        description: &str,
        severity: Severity,
    ) -> anyhow::Result<()> {
        self.client
            .post(&self.url)
            .json(&serde_json::json!({
                "title": title,
                "description": description,
                "severity": severity.as_str(),
            }))
            .send()
            .await
            .context("failed to post notification webhook")?
            .error_for_status()
            .context("notification webhook returned error")?;

        Ok(())
    }
}
