use chrono::{DateTime, Utc};
use uuid::Uuid;

/// How a demo request ended, or that it has not ended yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Pending,
    Loaded,
    Failed(String),
    Cancelled,
}

impl RequestOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestOutcome::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestOutcome::Pending => "pending",
            RequestOutcome::Loaded => "loaded",
            RequestOutcome::Failed(_) => "failed",
            RequestOutcome::Cancelled => "cancelled",
        }
    }
}

/// One entry in the request log shown next to the users list.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub id: Uuid,
    /// The user id that was requested
    pub user_id: u32,
    pub issued_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub outcome: RequestOutcome,
}

impl RequestRecord {
    pub fn new(user_id: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            issued_at: Utc::now(),
            finished_at: None,
            outcome: RequestOutcome::Pending,
        }
    }

    /// Record the terminal outcome. Only the first call has any effect.
    pub fn finish(&mut self, outcome: RequestOutcome) -> bool {
        if !self.outcome.is_pending() || outcome.is_pending() {
            return false;
        }
        self.outcome = outcome;
        self.finished_at = Some(Utc::now());
        true
    }

    /// Time from issue to completion, in milliseconds.
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.issued_at).num_milliseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_pending() {
        let record = RequestRecord::new(4);
        assert_eq!(record.user_id, 4);
        assert!(record.outcome.is_pending());
        assert_eq!(record.elapsed_ms(), None);
    }

    #[test]
    fn test_finish_only_once() {
        let mut record = RequestRecord::new(1);
        assert!(record.finish(RequestOutcome::Cancelled));
        assert!(!record.finish(RequestOutcome::Loaded));
        assert_eq!(record.outcome, RequestOutcome::Cancelled);
        assert!(record.elapsed_ms().unwrap() >= 0);
    }

    #[test]
    fn test_finish_rejects_pending() {
        let mut record = RequestRecord::new(1);
        assert!(!record.finish(RequestOutcome::Pending));
        assert!(record.finished_at.is_none());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(RequestOutcome::Loaded.label(), "loaded");
        assert_eq!(RequestOutcome::Failed("x".into()).label(), "failed");
    }
}
