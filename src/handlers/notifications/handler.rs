//! Notification handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    middleware::{CompanyScope, SessionScope},
    response::{ApiResponse, ApiResult},
    services::NotificationService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{ListNotificationsQuery, SendNotificationRequest},
    response::{CountResponse, NotificationResponse},
};

/// Notify one user, or broadcast to the whole company
pub async fn send_notification(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<SendNotificationRequest>,
) -> ApiResult<CountResponse> {
    let sent =
        NotificationService::send(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("Notification sent", sent))
}

pub async fn list_notifications(
    State(state): State<AppState>,
    scope: SessionScope,
    ApiQuery(query): ApiQuery<ListNotificationsQuery>,
) -> ApiResult<Page<NotificationResponse>> {
    let page = NotificationService::list_notifications(
        state.db(),
        &scope.company_id,
        &scope.user_id,
        query,
    )
    .await?;
    Ok(ApiResponse::ok("OK", page))
}

pub async fn unseen_count(
    State(state): State<AppState>,
    scope: SessionScope,
) -> ApiResult<CountResponse> {
    let count =
        NotificationService::unseen_count(state.db(), &scope.company_id, &scope.user_id).await?;
    Ok(ApiResponse::ok("OK", count))
}

pub async fn mark_seen(
    State(state): State<AppState>,
    scope: SessionScope,
    IdPath(id): IdPath,
) -> ApiResult<NotificationResponse> {
    let notification =
        NotificationService::mark_seen(state.db(), &scope.company_id, &scope.user_id, &id).await?;
    Ok(ApiResponse::ok("Notification marked as seen", notification))
}

pub async fn mark_all_seen(
    State(state): State<AppState>,
    scope: SessionScope,
) -> ApiResult<CountResponse> {
    let count =
        NotificationService::mark_all_seen(state.db(), &scope.company_id, &scope.user_id).await?;
    Ok(ApiResponse::ok("Notifications marked as seen", count))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    scope: SessionScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    NotificationService::delete_notification(state.db(), &scope.company_id, &scope.user_id, &id)
        .await?;
    Ok(ApiResponse::message("Notification deleted"))
}
