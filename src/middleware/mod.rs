//! HTTP middleware

pub mod auth;
pub mod logging;
pub mod tenancy;

pub use auth::{AuthenticatedUser, auth_middleware};
pub use logging::logging_middleware;
pub use tenancy::{
    CompanyScope, EmployeeScope, SessionScope, check_employee_belonging, check_employee_session,
};
