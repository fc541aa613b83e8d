//! Intern response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Intern;

/// Intern response
#[derive(Debug, Serialize)]
pub struct InternResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub school: Option<String>,
    pub speciality: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub supervisor_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Intern> for InternResponse {
    fn from(intern: Intern) -> Self {
        Self {
            id: intern.id,
            company_id: intern.company_id,
            first_name: intern.first_name,
            last_name: intern.last_name,
            email: intern.email,
            phone: intern.phone,
            school: intern.school,
            speciality: intern.speciality,
            start_date: intern.start_date,
            end_date: intern.end_date,
            supervisor_id: intern.supervisor_id,
            project_id: intern.project_id,
            status: intern.status,
            created_at: intern.created_at,
            updated_at: intern.updated_at,
        }
    }
}
