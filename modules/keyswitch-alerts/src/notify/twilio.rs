use async_trait::async_trait;
use tracing::debug;
use twilio::{TwilioOptions, TwilioService};

use super::gateway::{SmsGateway, SmsSession};
use crate::error::{AlertError, Result};

/// Production gateway backed by the Twilio Messages API.
pub struct TwilioGateway;

#[async_trait]
impl SmsGateway for TwilioGateway {
    async fn connect(&self, account_sid: &str, auth_token: &str) -> Result<Box<dyn SmsSession>> {
        let service = TwilioService::new(TwilioOptions {
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
        });

        // Account lookup is the cheapest authenticated call; bad credentials
        // fail here instead of on the first message.
        let account = service
            .fetch_account()
            .await
            .map_err(|e| AlertError::GatewayInit(e.to_string()))?;

        debug!(account_sid = %account.sid, status = %account.status, "Twilio gateway connected");
        Ok(Box::new(TwilioSession { service }))
    }
}

struct TwilioSession {
    service: TwilioService,
}

#[async_trait]
impl SmsSession for TwilioSession {
    async fn send(&self, to: &str, from: &str, body: &str) -> Result<String> {
        let message = self
            .service
            .send_message(to, from, body)
            .await
            .map_err(|e| AlertError::Send {
                recipient: to.to_string(),
                message: e.to_string(),
            })?;

        Ok(message.sid)
    }
}
