//! Condidat (candidate) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Condidat database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Condidat {
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
    /// Score of the latest completed test, in percent
    pub score: Option<f64>,
    pub cv_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
