//! Company model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Company (tenant) database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_root: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-company totals shown on the dashboard
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct CompanyStats {
    pub users: i64,
    pub condidats: i64,
    pub interns: i64,
    pub projects: i64,
    pub questions: i64,
    pub pending_tests: i64,
    pub completed_tests: i64,
    pub pending_mission_orders: i64,
    pub pending_training_requests: i64,
    pub average_test_score: Option<f64>,
}
