pub mod gateway;
pub mod log;
pub mod notifier;
pub mod sms;
pub mod twilio;

pub use gateway::{SmsGateway, SmsSession};
pub use log::LogNotifier;
pub use notifier::FailoverNotifier;
pub use sms::SmsFailoverNotifier;
pub use self::twilio::TwilioGateway;

use crate::config::SmsNotifierConfig;

/// Build the notifier for the current environment: SMS when Twilio alerting
/// is configured, otherwise the logging fallback.
pub fn notifier_from_env() -> Box<dyn FailoverNotifier> {
    select_notifier(SmsNotifierConfig::from_env())
}

/// Null-object selection: callers always get a usable notifier.
pub fn select_notifier(config: Option<SmsNotifierConfig>) -> Box<dyn FailoverNotifier> {
    match config {
        Some(config) => Box::new(SmsFailoverNotifier::new(config, Box::new(TwilioGateway))),
        None => Box::new(LogNotifier),
    }
}
