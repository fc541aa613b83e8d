//! Question response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Question, TechnologyCount};

/// Question bank entry, including the answer key
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub technology: String,
    pub content: String,
    pub options: Vec<String>,
    pub correct_option: i32,
    pub level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            company_id: q.company_id,
            technology: q.technology,
            content: q.content,
            options: q.options,
            correct_option: q.correct_option,
            level: q.level,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

/// Question count of one technology
#[derive(Debug, Serialize)]
pub struct TechnologyResponse {
    pub technology: String,
    pub count: i64,
}

impl From<TechnologyCount> for TechnologyResponse {
    fn from(row: TechnologyCount) -> Self {
        Self {
            technology: row.technology,
            count: row.count,
        }
    }
}
