//! Question bank repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Question, TechnologyCount},
};

/// Fields written when adding a question to the bank
pub struct NewQuestion<'a> {
    pub technology: &'a str,
    pub content: &'a str,
    pub options: &'a [String],
    pub correct_option: i32,
    pub level: &'a str,
}

/// Partial update of a question
#[derive(Default)]
pub struct QuestionChanges<'a> {
    pub technology: Option<&'a str>,
    pub content: Option<&'a str>,
    pub options: Option<&'a [String]>,
    pub correct_option: Option<i32>,
    pub level: Option<&'a str>,
}

/// Repository for question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Create a new question
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        question: &NewQuestion<'_>,
    ) -> AppResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (company_id, technology, content, options, correct_option, level)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(question.technology)
        .bind(question.content)
        .bind(question.options)
        .bind(question.correct_option)
        .bind(question.level)
        .fetch_one(pool)
        .await?;

        Ok(question)
    }

    /// Find a question of a company by ID
    pub async fn find_by_id(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"SELECT * FROM questions WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(question)
    }

    /// List questions with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        technology: Option<&str>,
        level: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Question>, i64)> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT * FROM questions
            WHERE company_id = $1
                AND ($2::text IS NULL OR technology = $2)
                AND ($3::text IS NULL OR level = $3)
            ORDER BY technology, created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(company_id)
        .bind(technology)
        .bind(level)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM questions
            WHERE company_id = $1
                AND ($2::text IS NULL OR technology = $2)
                AND ($3::text IS NULL OR level = $3)
            "#,
        )
        .bind(company_id)
        .bind(technology)
        .bind(level)
        .fetch_one(pool)
        .await?;

        Ok((questions, count))
    }

    /// Number of questions per technology
    pub async fn count_by_technology(
        pool: &PgPool,
        company_id: &Uuid,
    ) -> AppResult<Vec<TechnologyCount>> {
        let counts = sqlx::query_as::<_, TechnologyCount>(
            r#"
            SELECT technology, COUNT(*) AS count
            FROM questions
            WHERE company_id = $1
            GROUP BY technology
            ORDER BY technology
            "#,
        )
        .bind(company_id)
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }

    /// `(technology, id)` of every question in the given technologies
    pub async fn bank_for_technologies(
        pool: &PgPool,
        company_id: &Uuid,
        technologies: &[String],
    ) -> AppResult<Vec<(String, Uuid)>> {
        let rows: Vec<(String, Uuid)> = sqlx::query_as(
            r#"
            SELECT technology, id
            FROM questions
            WHERE company_id = $1 AND technology = ANY($2)
            ORDER BY created_at
            "#,
        )
        .bind(company_id)
        .bind(technologies)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Update question
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        changes: &QuestionChanges<'_>,
    ) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET
                technology = COALESCE($3, technology),
                content = COALESCE($4, content),
                options = COALESCE($5, options),
                correct_option = COALESCE($6, correct_option),
                level = COALESCE($7, level),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(changes.technology)
        .bind(changes.content)
        .bind(changes.options)
        .bind(changes.correct_option)
        .bind(changes.level)
        .fetch_optional(pool)
        .await?;

        Ok(question)
    }

    /// Delete question
    /// Questions referenced by a test are kept; that case is a conflict
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::Conflict("Question is used by a test".to_string())
                }
                _ => AppError::from(e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
