//! Question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Multiple-choice question from a company's question bank
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub company_id: Uuid,
    pub technology: String,
    pub content: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_option: i32,
    pub level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Number of questions available for a technology
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TechnologyCount {
    pub technology: String,
    pub count: i64,
}

/// Technologies are matched case-insensitively and without surrounding blanks
pub fn normalize_technology(technology: &str) -> String {
    technology.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_technology() {
        assert_eq!(normalize_technology("  Rust "), "rust");
        assert_eq!(normalize_technology("PostgreSQL"), "postgresql");
    }
}
