//! Mission order and training request models
//!
//! Both are employee requests reviewed by someone holding the matching
//! permission, and share the pending -> accepted | rejected lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::request_statuses;

/// Mission order database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MissionOrder {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_id: Uuid,
    pub object: String,
    pub destination: String,
    pub transport: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Training request database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub organization: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Check that a request can move from `current` to `decision`
pub fn check_decision(current: &str, decision: &str) -> Result<(), DecisionError> {
    if !request_statuses::DECISIONS.contains(&decision) {
        return Err(DecisionError::InvalidDecision(decision.to_string()));
    }
    if current != request_statuses::PENDING {
        return Err(DecisionError::AlreadyDecided(current.to_string()));
    }
    Ok(())
}

/// Why a caller may edit or delete a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAccess {
    /// The owner, as long as the request is still pending when written
    OwnerWhilePending,
    /// The feature permission, whatever the status
    Permission,
}

impl EditAccess {
    /// Owner access applies only to the owner of a pending request
    pub fn for_owner(owner_id: &Uuid, status: &str, session_id: &Uuid) -> Option<Self> {
        (owner_id == session_id && status == request_statuses::PENDING)
            .then_some(Self::OwnerWhilePending)
    }

    /// Status the row must still carry for the write to apply
    pub fn required_status(self) -> Option<&'static str> {
        match self {
            Self::OwnerWhilePending => Some(request_statuses::PENDING),
            Self::Permission => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("status must be one of: accepted, rejected (got '{0}')")]
    InvalidDecision(String),

    #[error("request was already {0}")]
    AlreadyDecided(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_be_decided() {
        assert!(check_decision("pending", "accepted").is_ok());
        assert!(check_decision("pending", "rejected").is_ok());
    }

    #[test]
    fn test_decided_request_is_final() {
        assert_eq!(
            check_decision("accepted", "rejected"),
            Err(DecisionError::AlreadyDecided("accepted".to_string()))
        );
    }

    #[test]
    fn test_owner_access_requires_pending() {
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let access = EditAccess::for_owner(&owner, "pending", &owner);
        assert_eq!(access, Some(EditAccess::OwnerWhilePending));
        assert_eq!(access.unwrap().required_status(), Some("pending"));

        assert_eq!(EditAccess::for_owner(&owner, "accepted", &owner), None);
        assert_eq!(EditAccess::for_owner(&owner, "pending", &other), None);
        assert_eq!(EditAccess::Permission.required_status(), None);
    }

    #[test]
    fn test_pending_is_not_a_decision() {
        assert_eq!(
            check_decision("pending", "pending"),
            Err(DecisionError::InvalidDecision("pending".to_string()))
        );
    }
}
