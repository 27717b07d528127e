use async_trait::async_trait;

/// Capability invoked when the primary API key is switched to its backup.
///
/// Implementations must never let a failure escape: the caller is in the
/// middle of a failover and only signals the event, it does not inspect a
/// result. Every implementation runs to completion and handles its own
/// errors by logging.
#[async_trait]
pub trait FailoverNotifier: Send + Sync {
    /// Called once per detected failover.
    async fn notify_failover(&self);
}
