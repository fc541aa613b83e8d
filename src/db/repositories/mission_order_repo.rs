//! Mission order repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    constants::request_statuses,
    error::AppResult,
    handlers::mission_orders::request::{CreateMissionOrderRequest, UpdateMissionOrderRequest},
    models::MissionOrder,
};

/// Repository for mission order database operations
pub struct MissionOrderRepository;

impl MissionOrderRepository {
    /// File a mission order for `user_id`
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        input: &CreateMissionOrderRequest,
    ) -> AppResult<MissionOrder> {
        let order = sqlx::query_as::<_, MissionOrder>(
            r#"
            INSERT INTO mission_orders (company_id, user_id, object, destination, transport, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(&input.object)
        .bind(&input.destination)
        .bind(&input.transport)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(pool)
        .await?;

        Ok(order)
    }

    /// Find a mission order of a company by ID
    pub async fn find_by_id(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<MissionOrder>> {
        let order = sqlx::query_as::<_, MissionOrder>(
            r#"SELECT * FROM mission_orders WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(order)
    }

    /// List mission orders with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: Option<&Uuid>,
        status: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<MissionOrder>, i64)> {
        let orders = sqlx::query_as::<_, MissionOrder>(
            r#"
            SELECT * FROM mission_orders
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(status)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM mission_orders
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((orders, count))
    }

    /// Update mission order
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        input: &UpdateMissionOrderRequest,
        required_status: Option<&str>,
    ) -> AppResult<Option<MissionOrder>> {
        let order = sqlx::query_as::<_, MissionOrder>(
            r#"
            UPDATE mission_orders
            SET
                object = COALESCE($3, object),
                destination = COALESCE($4, destination),
                transport = COALESCE($5, transport),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2 AND ($8::text IS NULL OR status = $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(&input.object)
        .bind(&input.destination)
        .bind(&input.transport)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(required_status)
        .fetch_optional(pool)
        .await?;

        Ok(order)
    }

    /// Record a decision; returns `None` when the order is no longer pending
    pub async fn decide<'e, E>(
        executor: E,
        company_id: &Uuid,
        id: &Uuid,
        status: &str,
        decided_by: &Uuid,
    ) -> AppResult<Option<MissionOrder>>
    where
        E: PgExecutor<'e>,
    {
        let order = sqlx::query_as::<_, MissionOrder>(
            r#"
            UPDATE mission_orders
            SET status = $3, decided_by = $4, decided_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND company_id = $2 AND status = $5
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(status)
        .bind(decided_by)
        .bind(request_statuses::PENDING)
        .fetch_optional(executor)
        .await?;

        Ok(order)
    }

    /// Delete mission order
    pub async fn delete(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        required_status: Option<&str>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM mission_orders
            WHERE id = $1 AND company_id = $2 AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(required_status)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
