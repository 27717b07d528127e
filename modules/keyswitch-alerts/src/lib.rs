pub mod config;
pub mod error;
pub mod notify;
pub mod types;

pub use config::SmsNotifierConfig;
pub use error::{AlertError, Result};
pub use notify::{
    notifier_from_env, select_notifier, FailoverNotifier, LogNotifier, SmsFailoverNotifier,
    SmsGateway, SmsSession, TwilioGateway,
};
pub use types::{Delivery, DispatchStats, RecipientOutcome};
