//! Training request response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::TrainingRequest;

/// Training request response
#[derive(Debug, Serialize)]
pub struct TrainingRequestResponse {
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

impl From<TrainingRequest> for TrainingRequestResponse {
    fn from(request: TrainingRequest) -> Self {
        Self {
            id: request.id,
            company_id: request.company_id,
            user_id: request.user_id,
            title: request.title,
            description: request.description,
            organization: request.organization,
            start_date: request.start_date,
            end_date: request.end_date,
            status: request.status,
            decided_by: request.decided_by,
            decided_at: request.decided_at,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}
