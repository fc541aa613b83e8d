//! Utility functions

pub mod crypto;
pub mod pagination;
pub mod validation;

pub use crypto::{hash_password, verify_password};
pub use pagination::{Page, PageQuery};
pub use validation::{
    check_phone, sanitize_string, validate_date_range, validate_phone, validate_status,
};
