use async_trait::async_trait;

use crate::error::Result;

/// Opaque SMS transport behind the fan-out notifier.
///
/// A fresh session is opened per dispatch, so no transport state is shared
/// across invocations.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Authenticate against the carrier API with the bound credentials.
    async fn connect(&self, account_sid: &str, auth_token: &str) -> Result<Box<dyn SmsSession>>;
}

/// One authenticated transport session.
#[async_trait]
pub trait SmsSession: Send + Sync {
    /// Deliver `body` from `from` to `to`. Returns the gateway message id.
    async fn send(&self, to: &str, from: &str, body: &str) -> Result<String>;
}
