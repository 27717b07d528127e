use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlertError>;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gateway initialization failed: {0}")]
    GatewayInit(String),

    #[error("Send to {recipient} failed: {message}")]
    Send { recipient: String, message: String },
}
