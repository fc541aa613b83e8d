//! User experience response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Experience;

/// Experience response
#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub employer: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Experience> for ExperienceResponse {
    fn from(e: Experience) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            title: e.title,
            employer: e.employer,
            description: e.description,
            start_date: e.start_date,
            end_date: e.end_date,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
