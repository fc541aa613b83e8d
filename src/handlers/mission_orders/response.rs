//! Mission order response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::MissionOrder;

/// Mission order response
#[derive(Debug, Serialize)]
pub struct MissionOrderResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_id: Uuid,
    pub object: String,
    pub destination: String,
    pub transport: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MissionOrder> for MissionOrderResponse {
    fn from(order: MissionOrder) -> Self {
        Self {
            id: order.id,
            company_id: order.company_id,
            user_id: order.user_id,
            object: order.object,
            destination: order.destination,
            transport: order.transport,
            start_date: order.start_date,
            end_date: order.end_date,
            status: order.status,
            decided_by: order.decided_by,
            decided_at: order.decided_at,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
