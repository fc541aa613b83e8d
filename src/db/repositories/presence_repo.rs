//! Presence repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::presences::request::{CreatePresenceRequest, UpdatePresenceRequest},
    models::{Presence, PresenceCounts},
};

/// Filters shared by the company-wide and per-user listings
#[derive(Debug, Default, Clone, Copy)]
pub struct PresenceFilter<'a> {
    pub user_id: Option<&'a Uuid>,
    pub status: Option<&'a str>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Repository for presence database operations
pub struct PresenceRepository;

impl PresenceRepository {
    /// Record a presence
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        input: &CreatePresenceRequest,
    ) -> AppResult<Presence> {
        let presence = sqlx::query_as::<_, Presence>(
            r#"
            INSERT INTO presences (company_id, user_id, date, check_in, check_out, status, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(input.user_id)
        .bind(input.date)
        .bind(input.check_in)
        .bind(input.check_out)
        .bind(&input.status)
        .bind(&input.note)
        .fetch_one(pool)
        .await?;

        Ok(presence)
    }

    /// Find a presence of a company by ID
    pub async fn find_by_id(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Presence>> {
        let presence = sqlx::query_as::<_, Presence>(
            r#"SELECT * FROM presences WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(presence)
    }

    /// List presences with pagination, newest day first
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        filter: PresenceFilter<'_>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Presence>, i64)> {
        let presences = sqlx::query_as::<_, Presence>(
            r#"
            SELECT * FROM presences
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::text IS NULL OR status = $3)
                AND ($4::date IS NULL OR date >= $4)
                AND ($5::date IS NULL OR date <= $5)
            ORDER BY date DESC, created_at DESC
            OFFSET $6 LIMIT $7
            "#,
        )
        .bind(company_id)
        .bind(filter.user_id)
        .bind(filter.status)
        .bind(filter.from)
        .bind(filter.to)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM presences
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::text IS NULL OR status = $3)
                AND ($4::date IS NULL OR date >= $4)
                AND ($5::date IS NULL OR date <= $5)
            "#,
        )
        .bind(company_id)
        .bind(filter.user_id)
        .bind(filter.status)
        .bind(filter.from)
        .bind(filter.to)
        .fetch_one(pool)
        .await?;

        Ok((presences, count))
    }

    /// Per-status counts of a user over an optional date range
    pub async fn counts(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<PresenceCounts> {
        let counts = sqlx::query_as::<_, PresenceCounts>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'present') AS present,
                COUNT(*) FILTER (WHERE status = 'absent') AS absent,
                COUNT(*) FILTER (WHERE status = 'late') AS late,
                COUNT(*) FILTER (WHERE status = 'remote') AS remote
            FROM presences
            WHERE company_id = $1 AND user_id = $2
                AND ($3::date IS NULL OR date >= $3)
                AND ($4::date IS NULL OR date <= $4)
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;

        Ok(counts)
    }

    /// Update presence
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        input: &UpdatePresenceRequest,
    ) -> AppResult<Option<Presence>> {
        let presence = sqlx::query_as::<_, Presence>(
            r#"
            UPDATE presences
            SET
                check_in = COALESCE($3, check_in),
                check_out = COALESCE($4, check_out),
                status = COALESCE($5, status),
                note = COALESCE($6, note),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(input.check_in)
        .bind(input.check_out)
        .bind(&input.status)
        .bind(&input.note)
        .fetch_optional(pool)
        .await?;

        Ok(presence)
    }

    /// Delete presence
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM presences WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
