//! Test response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Test, TestQuestionRow};

/// Test response
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub condidat_id: Uuid,
    pub title: String,
    pub technologies: Vec<String>,
    pub question_count: i32,
    pub score: Option<f64>,
    pub status: String,
    pub created_by: Option<Uuid>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Test> for TestResponse {
    fn from(test: Test) -> Self {
        Self {
            id: test.id,
            company_id: test.company_id,
            condidat_id: test.condidat_id,
            title: test.title,
            technologies: test.technologies,
            question_count: test.question_count,
            score: test.score,
            status: test.status,
            created_by: test.created_by,
            submitted_at: test.submitted_at,
            created_at: test.created_at,
        }
    }
}

/// A question as shown inside a test
#[derive(Debug, Serialize)]
pub struct TestQuestionResponse {
    pub question_id: Uuid,
    pub position: i32,
    pub technology: String,
    pub level: String,
    pub content: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

impl TestQuestionResponse {
    /// Answer key and given answer are only revealed once the test is completed
    pub fn from_row(row: TestQuestionRow, reveal: bool) -> Self {
        let (correct_option, answer, is_correct) = if reveal {
            (
                Some(row.correct_option),
                row.answer,
                Some(row.answer == Some(row.correct_option)),
            )
        } else {
            (None, None, None)
        };

        Self {
            question_id: row.question_id,
            position: row.position,
            technology: row.technology,
            level: row.level,
            content: row.content,
            options: row.options,
            correct_option,
            answer,
            is_correct,
        }
    }
}

/// Test with its questions in position order
#[derive(Debug, Serialize)]
pub struct TestDetailResponse {
    #[serde(flatten)]
    pub test: TestResponse,
    pub questions: Vec<TestQuestionResponse>,
}

/// Outcome of a submission
#[derive(Debug, Serialize)]
pub struct TestResultResponse {
    pub test: TestResponse,
    pub correct_answers: usize,
    pub question_count: usize,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(answer: Option<i32>) -> TestQuestionRow {
        TestQuestionRow {
            question_id: Uuid::new_v4(),
            position: 3,
            answer,
            technology: "rust".to_string(),
            content: "What does `?` do?".to_string(),
            options: vec!["propagate".to_string(), "panic".to_string()],
            correct_option: 0,
            level: "easy".to_string(),
        }
    }

    #[test]
    fn test_pending_test_hides_answer_key() {
        let question = TestQuestionResponse::from_row(row(Some(0)), false);
        let value = serde_json::to_value(&question).unwrap();

        assert!(value.get("correct_option").is_none());
        assert!(value.get("answer").is_none());
        assert_eq!(value["position"], 3);
    }

    #[test]
    fn test_completed_test_reveals_answers() {
        let question = TestQuestionResponse::from_row(row(Some(1)), true);
        assert_eq!(question.correct_option, Some(0));
        assert_eq!(question.answer, Some(1));
        assert_eq!(question.is_correct, Some(false));
    }

    #[test]
    fn test_unanswered_question_is_wrong() {
        let question = TestQuestionResponse::from_row(row(None), true);
        assert_eq!(question.is_correct, Some(false));
    }
}
