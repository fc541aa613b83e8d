//! Presence response DTOs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Presence;

/// Presence response
#[derive(Debug, Serialize)]
pub struct PresenceResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Presence> for PresenceResponse {
    fn from(p: Presence) -> Self {
        Self {
            id: p.id,
            company_id: p.company_id,
            user_id: p.user_id,
            date: p.date,
            check_in: p.check_in,
            check_out: p.check_out,
            status: p.status,
            note: p.note,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
