use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::gateway::SmsGateway;
use super::notifier::FailoverNotifier;
use crate::config::SmsNotifierConfig;
use crate::types::{Delivery, DispatchStats, RecipientOutcome};

/// SMS fan-out notifier.
///
/// Sends the bound message to every configured recipient in order. Each
/// recipient is isolated: a send failure is logged and recorded, then the
/// loop moves on. A gateway that will not connect ends the whole dispatch
/// with an error log; in no case does anything reach the caller.
pub struct SmsFailoverNotifier {
    config: SmsNotifierConfig,
    gateway: Box<dyn SmsGateway>,
}

impl SmsFailoverNotifier {
    pub fn new(config: SmsNotifierConfig, gateway: Box<dyn SmsGateway>) -> Self {
        Self { config, gateway }
    }

    /// Run one fan-out and return the per-recipient outcomes in input order.
    pub async fn dispatch(&self) -> Vec<RecipientOutcome> {
        let dispatch_id = Uuid::new_v4();

        let session = match self
            .gateway
            .connect(&self.config.account_sid, &self.config.auth_token)
            .await
        {
            Ok(session) => session,
            Err(e) => {
                error!(
                    dispatch_id = %dispatch_id,
                    error = %e,
                    "SMS gateway initialization failed; no alerts sent"
                );
                return Vec::new();
            }
        };

        if self.config.recipients.is_empty() {
            warn!(dispatch_id = %dispatch_id, "No recipients configured for failover alerts");
            return Vec::new();
        }

        let mut outcomes = Vec::with_capacity(self.config.recipients.len());
        for (position, recipient) in self.config.recipients.iter().enumerate() {
            if recipient.trim().is_empty() {
                warn!(dispatch_id = %dispatch_id, position, "Blank recipient entry; skipping");
                outcomes.push(RecipientOutcome::new(recipient.clone(), Delivery::Skipped));
                continue;
            }

            match session
                .send(recipient, &self.config.from_number, &self.config.message_body)
                .await
            {
                Ok(sid) => {
                    info!(
                        dispatch_id = %dispatch_id,
                        recipient = recipient.as_str(),
                        sid = sid.as_str(),
                        "Failover alert sent"
                    );
                    outcomes.push(RecipientOutcome::new(
                        recipient.clone(),
                        Delivery::Delivered { sid },
                    ));
                }
                Err(e) => {
                    error!(
                        dispatch_id = %dispatch_id,
                        recipient = recipient.as_str(),
                        error = %e,
                        "Failed to send failover alert"
                    );
                    outcomes.push(RecipientOutcome::new(
                        recipient.clone(),
                        Delivery::Failed {
                            error: e.to_string(),
                        },
                    ));
                }
            }
        }

        let stats = DispatchStats::tally(&outcomes);
        info!(dispatch_id = %dispatch_id, "Failover alert dispatch complete. {stats}");
        outcomes
    }
}

#[async_trait]
impl FailoverNotifier for SmsFailoverNotifier {
    async fn notify_failover(&self) {
        self.dispatch().await;
    }
}
