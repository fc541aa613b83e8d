//! Test repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    constants::test_statuses,
    error::AppResult,
    models::{Test, TestQuestionRow},
};

/// Fields written when generating a test
pub struct NewTest<'a> {
    pub company_id: Uuid,
    pub condidat_id: Uuid,
    pub title: &'a str,
    pub technologies: &'a [String],
    pub question_count: i32,
    pub created_by: Uuid,
}

/// Repository for test database operations
pub struct TestRepository;

impl TestRepository {
    /// Create a new test row
    pub async fn create<'e, E>(executor: E, test: &NewTest<'_>) -> AppResult<Test>
    where
        E: PgExecutor<'e>,
    {
        let test = sqlx::query_as::<_, Test>(
            r#"
            INSERT INTO tests (company_id, condidat_id, title, technologies, question_count, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(test.company_id)
        .bind(test.condidat_id)
        .bind(test.title)
        .bind(test.technologies)
        .bind(test.question_count)
        .bind(test.created_by)
        .fetch_one(executor)
        .await?;

        Ok(test)
    }

    /// Link questions to a test; positions follow the slice order from 0
    pub async fn attach_questions<'e, E>(
        executor: E,
        test_id: &Uuid,
        question_ids: &[Uuid],
    ) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        let positions: Vec<i32> = (0..question_ids.len() as i32).collect();

        sqlx::query(
            r#"
            INSERT INTO test_questions (test_id, question_id, position)
            SELECT $1, question_id, position
            FROM UNNEST($2::uuid[], $3::int[]) AS t(question_id, position)
            "#,
        )
        .bind(test_id)
        .bind(question_ids)
        .bind(&positions)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Find a test of a company by ID
    pub async fn find_by_id(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Option<Test>> {
        let test = sqlx::query_as::<_, Test>(
            r#"SELECT * FROM tests WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(test)
    }

    /// Lock a test row for the rest of the transaction
    pub async fn find_for_update<'e, E>(
        executor: E,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Test>>
    where
        E: PgExecutor<'e>,
    {
        let test = sqlx::query_as::<_, Test>(
            r#"SELECT * FROM tests WHERE id = $1 AND company_id = $2 FOR UPDATE"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(executor)
        .await?;

        Ok(test)
    }

    /// List tests with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        condidat_id: Option<&Uuid>,
        status: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Test>, i64)> {
        let tests = sqlx::query_as::<_, Test>(
            r#"
            SELECT * FROM tests
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR condidat_id = $2)
                AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(company_id)
        .bind(condidat_id)
        .bind(status)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM tests
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR condidat_id = $2)
                AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(company_id)
        .bind(condidat_id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((tests, count))
    }

    /// Every test taken by a condidat, newest first
    pub async fn list_for_condidat(
        pool: &PgPool,
        company_id: &Uuid,
        condidat_id: &Uuid,
    ) -> AppResult<Vec<Test>> {
        let tests = sqlx::query_as::<_, Test>(
            r#"
            SELECT * FROM tests
            WHERE company_id = $1 AND condidat_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(company_id)
        .bind(condidat_id)
        .fetch_all(pool)
        .await?;

        Ok(tests)
    }

    /// Questions of a test in position order
    pub async fn questions<'e, E>(executor: E, test_id: &Uuid) -> AppResult<Vec<TestQuestionRow>>
    where
        E: PgExecutor<'e>,
    {
        let rows = sqlx::query_as::<_, TestQuestionRow>(
            r#"
            SELECT
                tq.question_id, tq.position, tq.answer,
                q.technology, q.content, q.options, q.correct_option, q.level
            FROM test_questions tq
            JOIN questions q ON q.id = tq.question_id
            WHERE tq.test_id = $1
            ORDER BY tq.position
            "#,
        )
        .bind(test_id)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    /// Store the submitted answers
    pub async fn record_answers<'e, E>(
        executor: E,
        test_id: &Uuid,
        question_ids: &[Uuid],
        answers: &[i32],
    ) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            r#"
            UPDATE test_questions tq
            SET answer = a.answer
            FROM UNNEST($2::uuid[], $3::int[]) AS a(question_id, answer)
            WHERE tq.test_id = $1 AND tq.question_id = a.question_id
            "#,
        )
        .bind(test_id)
        .bind(question_ids)
        .bind(answers)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Mark a test as completed with its score
    pub async fn complete<'e, E>(executor: E, id: &Uuid, score: f64) -> AppResult<Test>
    where
        E: PgExecutor<'e>,
    {
        let test = sqlx::query_as::<_, Test>(
            r#"
            UPDATE tests
            SET score = $2, status = $3, submitted_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(score)
        .bind(test_statuses::COMPLETED)
        .fetch_one(executor)
        .await?;

        Ok(test)
    }

    /// Delete test
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM tests WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
