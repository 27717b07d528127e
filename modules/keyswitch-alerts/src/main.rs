use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keyswitch_alerts::notify::select_notifier;
use keyswitch_alerts::SmsNotifierConfig;

/// Operator smoke test: build the configured notifier and fire one failover
/// notification so the alerting path can be verified end to end.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("keyswitch_alerts=info".parse()?),
        )
        .init();

    info!("keyswitch alert smoke test starting...");

    let config = SmsNotifierConfig::from_env();
    match &config {
        Some(config) => config.log_redacted(),
        None => info!("SMS alerting not configured; the logging fallback will be used"),
    }

    let notifier = select_notifier(config);
    notifier.notify_failover().await;

    info!("Smoke test complete");
    Ok(())
}
