use chrono::{DateTime, Utc};
use std::fmt;

/// Result of one recipient slot in a fan-out dispatch.
///
/// Outcomes are produced fresh on every dispatch and never persisted; the
/// summary log line is the only durable trace.
#[derive(Debug, Clone)]
pub struct RecipientOutcome {
    pub recipient: String,
    pub delivery: Delivery,
    pub at: DateTime<Utc>,
}

impl RecipientOutcome {
    pub fn new(recipient: impl Into<String>, delivery: Delivery) -> Self {
        Self {
            recipient: recipient.into(),
            delivery,
            at: Utc::now(),
        }
    }

    pub fn delivered(&self) -> bool {
        matches!(self.delivery, Delivery::Delivered { .. })
    }
}

/// How a single recipient slot ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Accepted by the gateway; carries the gateway-assigned message id.
    Delivered { sid: String },
    /// The send for this recipient failed. Later recipients are unaffected.
    Failed { error: String },
    /// Blank entry in the recipient list; nothing was attempted.
    Skipped,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered { .. } => write!(f, "delivered"),
            Self::Failed { .. } => write!(f, "failed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Counts for one dispatch, reported in the summary log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    pub delivered: u64,
    pub failed: u64,
    pub skipped: u64,
}

impl DispatchStats {
    pub fn tally(outcomes: &[RecipientOutcome]) -> Self {
        let mut stats = Self::default();
        for outcome in outcomes {
            match outcome.delivery {
                Delivery::Delivered { .. } => stats.delivered += 1,
                Delivery::Failed { .. } => stats.failed += 1,
                Delivery::Skipped => stats.skipped += 1,
            }
        }
        stats
    }
}

impl fmt::Display for DispatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delivered={} failed={} skipped={}",
            self.delivered, self.failed, self.skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_disposition() {
        let outcomes = vec![
            RecipientOutcome::new("+15550001", Delivery::Delivered { sid: "SM1".into() }),
            RecipientOutcome::new("", Delivery::Skipped),
            RecipientOutcome::new(
                "+15550002",
                Delivery::Failed {
                    error: "carrier rejected".into(),
                },
            ),
            RecipientOutcome::new("+15550003", Delivery::Delivered { sid: "SM2".into() }),
        ];

        let stats = DispatchStats::tally(&outcomes);
        assert_eq!(stats.delivered, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.to_string(), "delivered=2 failed=1 skipped=1");
    }
}
