use async_trait::async_trait;
use tracing::info;

use super::notifier::FailoverNotifier;

/// Fallback notifier selected when no alert channel is configured.
/// Writes a single log record and does nothing else.
pub struct LogNotifier;

#[async_trait]
impl FailoverNotifier for LogNotifier {
    async fn notify_failover(&self) {
        info!("Failover occurred; no alert channel configured, logging only");
    }
}
