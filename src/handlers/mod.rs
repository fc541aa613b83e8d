//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Everything under `/companies/{company_id}` resolves a tenancy scope
//! extractor before touching the body or the database.

pub mod auth;
pub mod companies;
pub mod condidats;
pub mod experiences;
pub mod health;
pub mod interns;
pub mod mission_orders;
pub mod notifications;
pub mod presences;
pub mod projects;
pub mod questions;
pub mod roles;
pub mod tests;
pub mod training_requests;
pub mod users;

use axum::{Router, middleware};

use crate::{middleware::auth_middleware, state::AppState};

const COMPANY: &str = "/companies/{company_id}";
const EMPLOYEE: &str = "/companies/{company_id}/users/{user_id}";

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(auth::session_routes())
        .merge(roles::feature_routes())
        .nest("/companies", companies::routes())
        // Company resources
        .nest(&format!("{COMPANY}/users"), users::routes())
        .nest(&format!("{COMPANY}/roles"), roles::routes())
        .nest(&format!("{COMPANY}/condidats"), condidats::routes())
        .nest(&format!("{COMPANY}/interns"), interns::routes())
        .nest(&format!("{COMPANY}/projects"), projects::routes())
        .nest(&format!("{COMPANY}/questions"), questions::routes())
        .nest(&format!("{COMPANY}/tests"), tests::routes())
        .nest(&format!("{COMPANY}/presences"), presences::routes())
        .nest(&format!("{COMPANY}/mission-orders"), mission_orders::routes())
        .nest(&format!("{COMPANY}/training-requests"), training_requests::routes())
        .nest(&format!("{COMPANY}/notifications"), notifications::routes())
        // Employee resources
        .nest(&format!("{EMPLOYEE}/presences"), presences::user_routes())
        .nest(&format!("{EMPLOYEE}/mission-orders"), mission_orders::user_routes())
        .nest(&format!("{EMPLOYEE}/training-requests"), training_requests::user_routes())
        .nest(&format!("{EMPLOYEE}/notifications"), notifications::user_routes())
        .nest(&format!("{EMPLOYEE}/experiences"), experiences::user_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected)
}
