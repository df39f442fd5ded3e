use async_trait::async_trait;

use super::{NotificationSink, Severity};

/// Default sink when no webhook is configured: notifications land in the
/// service log.
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify(
        &self,
        title: &str,
        description: &str,
        severity: Severity,
    ) -> anyhow::Result<()> {
        tracing::info!(severity = severity.as_str(), title, description, "notification");
        Ok(())
    }
}
