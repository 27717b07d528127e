use serde::Deserialize;

/// Credentials for the Twilio REST API.
#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
}

/// Subset of the account resource returned by `GET /Accounts/{Sid}.json`.
///
/// Fetching it is the cheapest authenticated call, so it doubles as a
/// credential check before any message is sent.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub sid: String,
    pub friendly_name: Option<String>,
    pub status: String,
}

/// Subset of the message resource returned by
/// `POST /Accounts/{Sid}/Messages.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub sid: String,
    pub status: String,
    pub to: String,
    pub from: String,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_deserializes_from_api_payload() {
        let payload = r#"{
            "sid": "SM1f0e8ae6ade43cb3c0ce4525424e404f",
            "status": "queued",
            "to": "+15558675310",
            "from": "+15017122661",
            "body": "Primary key down",
            "num_segments": "1",
            "error_code": null,
            "error_message": null
        }"#;

        let msg: Message = serde_json::from_str(payload).unwrap();
        assert_eq!(msg.sid, "SM1f0e8ae6ade43cb3c0ce4525424e404f");
        assert_eq!(msg.status, "queued");
        assert_eq!(msg.to, "+15558675310");
        assert!(msg.error_code.is_none());
    }

    #[test]
    fn account_deserializes_without_friendly_name() {
        let payload = r#"{
            "sid": "ACa0b1c2d3e4f5a0b1c2d3e4f5a0b1c2d3",
            "status": "active",
            "date_created": "Mon, 01 Jul 2024 00:00:00 +0000"
        }"#;

        let account: Account = serde_json::from_str(payload).unwrap();
        assert_eq!(account.status, "active");
        assert!(account.friendly_name.is_none());
    }
}
