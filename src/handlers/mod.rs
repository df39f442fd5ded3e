pub mod booking;
pub mod calendar;
pub mod dashboard;
pub mod health;
pub mod inbox;
pub mod reports;

use std::sync::Arc;

use crate::services::notify::Severity;
use crate::state::AppState;

/// Fire-and-forget: delivery failures are logged, never surfaced to the
/// caller.
pub(crate) async fn notify(state: &Arc<AppState>, title: &str, description: &str, severity: Severity) {
    if let Err(e) = state.notifier.notify(title, description, severity).await {
        tracing::error!(error = %e, title, "failed to deliver notification");
    }
}
