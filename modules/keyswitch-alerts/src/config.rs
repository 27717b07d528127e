use crate::error::{AlertError, Result};

/// Default alert text when `ALERT_SMS_MESSAGE` is not set.
pub const DEFAULT_MESSAGE: &str = "Primary API key is unavailable. Switched to the failover key.";

/// Immutable SMS alerting configuration.
///
/// Credentials, recipients, message body, and sender are bound once and
/// reused by every dispatch. Blank required fields are rejected here rather
/// than at send time; the recipient list itself may be empty, which is
/// handled with a warning when a dispatch runs.
#[derive(Debug, Clone)]
pub struct SmsNotifierConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub recipients: Vec<String>,
    pub message_body: String,
    pub from_number: String,
}

impl SmsNotifierConfig {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        recipients: Vec<String>,
        message_body: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            account_sid: require("account SID", account_sid.into())?,
            auth_token: require("auth token", auth_token.into())?,
            recipients,
            message_body: require("message body", message_body.into())?,
            from_number: require("sender number", from_number.into())?,
        })
    }

    /// Load from environment variables. Returns `None` when SMS alerting is
    /// not configured (`TWILIO_ACCOUNT_SID` unset); a present but incomplete
    /// configuration is logged and also yields `None` so callers fall back
    /// to the logging notifier.
    ///
    /// Env vars:
    /// - `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN` — transport credentials
    /// - `ALERT_SMS_FROM` — sender number
    /// - `ALERT_SMS_RECIPIENTS` — comma-separated recipient numbers
    /// - `ALERT_SMS_MESSAGE` — alert text (optional)
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();

        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default();
        let from_number = std::env::var("ALERT_SMS_FROM").unwrap_or_default();
        let recipients = std::env::var("ALERT_SMS_RECIPIENTS")
            .unwrap_or_default()
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.trim().to_string())
            .collect();
        let message_body =
            std::env::var("ALERT_SMS_MESSAGE").unwrap_or_else(|_| DEFAULT_MESSAGE.to_string());

        match Self::new(account_sid, auth_token, recipients, message_body, from_number) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "Incomplete SMS alert configuration; SMS alerts disabled");
                None
            }
        }
    }

    /// Log the loaded configuration with secrets redacted.
    pub fn log_redacted(&self) {
        fn preview(val: &str) -> String {
            let n = val.len().min(5);
            format!("{}...({} chars)", &val[..n], val.len())
        }

        tracing::info!("SMS alert config loaded:");
        tracing::info!("  TWILIO_ACCOUNT_SID: {}", preview(&self.account_sid));
        tracing::info!("  TWILIO_AUTH_TOKEN: {}", preview(&self.auth_token));
        tracing::info!("  ALERT_SMS_FROM: {}", self.from_number);
        tracing::info!("  ALERT_SMS_RECIPIENTS: {} number(s)", self.recipients.len());
    }
}

fn require(name: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(AlertError::Config(format!("{name} must not be empty")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipients() -> Vec<String> {
        vec!["+15550001".to_string(), "+15550002".to_string()]
    }

    #[test]
    fn valid_config_preserves_recipient_order() {
        let config = SmsNotifierConfig::new(
            "ACa0b1c2",
            "secret",
            recipients(),
            "key switched",
            "+15559999",
        )
        .unwrap();

        assert_eq!(config.recipients, recipients());
    }

    #[test]
    fn blank_account_sid_is_rejected() {
        let err = SmsNotifierConfig::new("  ", "secret", recipients(), "body", "+15559999")
            .unwrap_err();
        assert!(matches!(err, AlertError::Config(_)));
    }

    #[test]
    fn blank_auth_token_is_rejected() {
        let err =
            SmsNotifierConfig::new("ACa0b1c2", "", recipients(), "body", "+15559999").unwrap_err();
        assert!(matches!(err, AlertError::Config(_)));
    }

    #[test]
    fn blank_message_body_is_rejected() {
        let err = SmsNotifierConfig::new("ACa0b1c2", "secret", recipients(), "   ", "+15559999")
            .unwrap_err();
        assert!(matches!(err, AlertError::Config(_)));
    }

    #[test]
    fn blank_sender_is_rejected() {
        let err =
            SmsNotifierConfig::new("ACa0b1c2", "secret", recipients(), "body", "").unwrap_err();
        assert!(matches!(err, AlertError::Config(_)));
    }

    #[test]
    fn empty_recipient_list_is_allowed_at_construction() {
        // An empty list is a dispatch-time warning, not a config error.
        let config =
            SmsNotifierConfig::new("ACa0b1c2", "secret", Vec::new(), "body", "+15559999").unwrap();
        assert!(config.recipients.is_empty());
    }

    #[test]
    fn error_message_names_the_missing_field() {
        let err = SmsNotifierConfig::new("ACa0b1c2", "secret", recipients(), "body", " ")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: sender number must not be empty"
        );
    }
}
