//! Mission order service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{features, request_statuses},
    db::repositories::{MissionOrderRepository, NewNotification, NotificationRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::mission_orders::{
        request::{
            CreateMissionOrderRequest, DecisionRequest, ListMissionOrdersQuery,
            UpdateMissionOrderRequest,
        },
        response::MissionOrderResponse,
    },
    middleware::AuthenticatedUser,
    models::{Action, EditAccess, MissionOrder, check_decision},
    services::PermissionService,
    utils::{Page, PageQuery, validate_date_range, validate_status},
};

/// Mission order service for business logic
pub struct MissionOrderService;

impl MissionOrderService {
    /// An employee files a mission order for themselves
    pub async fn file_own(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        payload: CreateMissionOrderRequest,
    ) -> AppResult<MissionOrderResponse> {
        validate_date_range(payload.start_date, Some(payload.end_date))?;

        let order = MissionOrderRepository::create(pool, company_id, user_id, &payload).await?;

        info!(mission_order_id = %order.id, user_id = %user_id, "Mission order filed");
        Ok(order.into())
    }

    /// Issue a mission order for any user of the company
    pub async fn issue(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateMissionOrderRequest,
    ) -> AppResult<MissionOrderResponse> {
        PermissionService::require(pool, session, features::MISSION_ORDERS, Action::Create).await?;
        validate_date_range(payload.start_date, Some(payload.end_date))?;

        let user_id = payload
            .user_id
            .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
        if !UserRepository::exists_in_company(pool, company_id, &user_id).await? {
            return Err(AppError::InvalidInput(
                "User must be an employee of the company".to_string(),
            ));
        }

        let order = MissionOrderRepository::create(pool, company_id, &user_id, &payload).await?;

        info!(mission_order_id = %order.id, user_id = %user_id, issued_by = %session.id, "Mission order issued");
        Ok(order.into())
    }

    /// List mission orders of a company
    pub async fn list_mission_orders(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListMissionOrdersQuery,
    ) -> AppResult<Page<MissionOrderResponse>> {
        PermissionService::require(pool, session, features::MISSION_ORDERS, Action::Read).await?;
        let user_id = query.user_id;
        Self::list(pool, company_id, user_id.as_ref(), query).await
    }

    /// Mission orders of one user
    pub async fn list_user_mission_orders(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
        query: ListMissionOrdersQuery,
    ) -> AppResult<Page<MissionOrderResponse>> {
        PermissionService::require_self_or(
            pool,
            session,
            user_id,
            features::MISSION_ORDERS,
            Action::Read,
        )
        .await?;
        Self::list(pool, company_id, Some(user_id), query).await
    }

    /// Get a mission order; owners always see their own
    pub async fn get_mission_order(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<MissionOrderResponse> {
        let order = Self::find(pool, company_id, id).await?;
        PermissionService::require_self_or(
            pool,
            session,
            &order.user_id,
            features::MISSION_ORDERS,
            Action::Read,
        )
        .await?;

        Ok(order.into())
    }

    /// Update a mission order
    pub async fn update_mission_order(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateMissionOrderRequest,
    ) -> AppResult<MissionOrderResponse> {
        let current = Self::find(pool, company_id, id).await?;
        let access = Self::edit_access(pool, session, &current, Action::Update).await?;
        validate_date_range(
            payload.start_date.unwrap_or(current.start_date),
            Some(payload.end_date.unwrap_or(current.end_date)),
        )?;

        let order =
            MissionOrderRepository::update(pool, company_id, id, &payload, access.required_status())
                .await?
                .ok_or_else(|| Self::vanished(access))?;

        info!(mission_order_id = %order.id, updated_by = %session.id, "Mission order updated");
        Ok(order.into())
    }

    /// Delete a mission order
    pub async fn delete_mission_order(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        let current = Self::find(pool, company_id, id).await?;
        let access = Self::edit_access(pool, session, &current, Action::Delete).await?;

        let deleted =
            MissionOrderRepository::delete(pool, company_id, id, access.required_status()).await?;
        if !deleted {
            return Err(Self::vanished(access));
        }

        info!(mission_order_id = %id, deleted_by = %session.id, "Mission order deleted");
        Ok(())
    }

    /// Accept or reject a pending mission order and notify its owner
    pub async fn decide(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: DecisionRequest,
    ) -> AppResult<MissionOrderResponse> {
        PermissionService::require(pool, session, features::MISSION_ORDERS, Action::Update).await?;

        let current = Self::find(pool, company_id, id).await?;
        check_decision(&current.status, &payload.status)?;

        let mut tx = pool.begin().await?;
        let order =
            MissionOrderRepository::decide(&mut *tx, company_id, id, &payload.status, &session.id)
                .await?
                .ok_or_else(|| AppError::Conflict("Mission order was already decided".to_string()))?;

        let content = format!(
            "Your mission order to {} was {}",
            order.destination, order.status
        );
        let link = format!(
            "/companies/{}/mission-orders/{}",
            order.company_id, order.id
        );
        NotificationRepository::create(
            &mut *tx,
            company_id,
            &order.user_id,
            NewNotification {
                title: "Mission order decided",
                content: &content,
                link: Some(&link),
            },
        )
        .await?;
        tx.commit().await?;

        info!(
            mission_order_id = %order.id,
            status = %order.status,
            decided_by = %session.id,
            "Mission order decided"
        );
        Ok(order.into())
    }

    async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: Option<&Uuid>,
        query: ListMissionOrdersQuery,
    ) -> AppResult<Page<MissionOrderResponse>> {
        if let Some(status) = query.status.as_deref() {
            validate_status(status, request_statuses::ALL)?;
        }

        let page = PageQuery::new(query.page, query.page_size);
        let (orders, total) = MissionOrderRepository::list(
            pool,
            company_id,
            user_id,
            query.status.as_deref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(orders, &page, total).map(Into::into))
    }

    async fn find(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<MissionOrder> {
        MissionOrderRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Mission order"))
    }

    /// Owners may change their mission order until it is decided; everyone else needs the permission
    async fn edit_access(
        pool: &PgPool,
        session: &AuthenticatedUser,
        order: &MissionOrder,
        action: Action,
    ) -> AppResult<EditAccess> {
        if let Some(access) = EditAccess::for_owner(&order.user_id, &order.status, &session.id) {
            return Ok(access);
        }
        PermissionService::require(pool, session, features::MISSION_ORDERS, action).await?;
        Ok(EditAccess::Permission)
    }

    /// The row changed between the access check and the write
    fn vanished(access: EditAccess) -> AppError {
        match access {
            EditAccess::OwnerWhilePending => {
                AppError::Conflict("Mission order was decided in the meantime".to_string())
            }
            EditAccess::Permission => AppError::not_found("Mission order"),
        }
    }
}
