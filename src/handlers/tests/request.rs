//! Test request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_QUESTIONS_PER_TECHNOLOGY};

/// Number of questions wanted for one technology
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TechnologyQuotaRequest {
    #[validate(length(min = 1, max = 64))]
    pub technology: String,

    #[validate(range(min = 1, max = MAX_QUESTIONS_PER_TECHNOLOGY))]
    pub count: u32,
}

/// Generate test request
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateTestRequest {
    pub condidat_id: Uuid,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1), nested)]
    pub technologies: Vec<TechnologyQuotaRequest>,
}

/// Answer to one question
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AnswerRequest {
    pub question_id: Uuid,

    #[validate(range(min = 0))]
    pub answer: i32,
}

/// Submit test answers request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitTestRequest {
    #[validate(nested)]
    pub answers: Vec<AnswerRequest>,
}

/// List tests query parameters
#[derive(Debug, Deserialize)]
pub struct ListTestsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub condidat_id: Option<Uuid>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quotas_are_validated_one_by_one() {
        let request: GenerateTestRequest = serde_json::from_value(json!({
            "condidat_id": Uuid::new_v4(),
            "technologies": [
                {"technology": "rust", "count": 2},
                {"technology": "sql", "count": 0}
            ]
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("technologies"));

        let request: GenerateTestRequest = serde_json::from_value(json!({
            "condidat_id": Uuid::new_v4(),
            "technologies": []
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}
