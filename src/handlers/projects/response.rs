//! Project response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Project;

/// Project response
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            company_id: project.company_id,
            title: project.title,
            description: project.description,
            technologies: project.technologies,
            start_date: project.start_date,
            end_date: project.end_date,
            status: project.status,
            progress: project.progress,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
