//! Question request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_DESCRIPTION_LENGTH;

/// Create question request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 64))]
    pub technology: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub content: String,

    #[validate(length(min = 2, max = 10))]
    pub options: Vec<String>,

    #[validate(range(min = 0))]
    pub correct_option: i32,

    pub level: Option<String>,
}

/// Update question request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = 64))]
    pub technology: Option<String>,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub content: Option<String>,

    #[validate(length(min = 2, max = 10))]
    pub options: Option<Vec<String>>,

    #[validate(range(min = 0))]
    pub correct_option: Option<i32>,

    pub level: Option<String>,
}

/// List questions query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub technology: Option<String>,
    pub level: Option<String>,
}
