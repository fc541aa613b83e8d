//! Condidat response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Condidat;

/// Condidat response
#[derive(Debug, Serialize)]
pub struct CondidatResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub education_level: Option<String>,
    pub speciality: Option<String>,
    pub experience_years: i32,
    pub status: String,
    pub score: Option<f64>,
    pub cv_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Condidat> for CondidatResponse {
    fn from(c: Condidat) -> Self {
        Self {
            id: c.id,
            company_id: c.company_id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            education_level: c.education_level,
            speciality: c.speciality,
            experience_years: c.experience_years,
            status: c.status,
            score: c.score,
            cv_url: c.cv_url,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
