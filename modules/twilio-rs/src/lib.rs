pub mod error;
pub mod types;

pub use error::{Result, TwilioError};
pub use types::{Account, Message, TwilioOptions};

const BASE_URL: &str = "https://api.twilio.com/2010-04-01";

/// Minimal Twilio REST client covering account lookup and outbound SMS.
pub struct TwilioService {
    client: reqwest::Client,
    options: TwilioOptions,
}

impl TwilioService {
    pub fn new(options: TwilioOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    /// Fetch the account resource for the configured SID.
    ///
    /// Bad credentials surface here as a 401 before any message is attempted.
    pub async fn fetch_account(&self) -> Result<Account> {
        let url = format!("{}/Accounts/{}.json", BASE_URL, self.options.account_sid);
        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TwilioError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let account: Account = resp.json().await?;
        Ok(account)
    }

    /// Send a single outbound SMS. Returns the created message resource.
    pub async fn send_message(&self, to: &str, from: &str, body: &str) -> Result<Message> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            BASE_URL, self.options.account_sid
        );
        let params = [("To", to), ("From", from), ("Body", body)];

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(TwilioError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let message: Message = resp.json().await?;
        tracing::debug!(sid = %message.sid, status = %message.status, "Message accepted");
        Ok(message)
    }
}
