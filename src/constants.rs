//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default maximum request body size (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Seconds to wait for a pooled connection before failing the request
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Default name of the seeded root company
pub const DEFAULT_ROOT_COMPANY_NAME: &str = "Root";

/// Name of the role created for every new company's first user
pub const ADMIN_ROLE_NAME: &str = "admin";

/// Name of the role created for the seeded root user
pub const ROOT_ROLE_NAME: &str = "root";

// =============================================================================
// PERMISSION FEATURES
// =============================================================================

/// Features guarded by the per-role CRUD permission bits
pub mod features {
    pub const USERS: &str = "users";
    pub const ROLES: &str = "roles";
    pub const CONDIDATS: &str = "condidats";
    pub const INTERNS: &str = "interns";
    pub const PROJECTS: &str = "projects";
    pub const TESTS: &str = "tests";
    pub const QUESTIONS: &str = "questions";
    pub const PRESENCES: &str = "presences";
    pub const MISSION_ORDERS: &str = "mission_orders";
    pub const TRAINING_REQUESTS: &str = "training_requests";
    pub const NOTIFICATIONS: &str = "notifications";

    /// All features, in display order
    pub const ALL: &[&str] = &[
        USERS,
        ROLES,
        CONDIDATS,
        INTERNS,
        PROJECTS,
        TESTS,
        QUESTIONS,
        PRESENCES,
        MISSION_ORDERS,
        TRAINING_REQUESTS,
        NOTIFICATIONS,
    ];
}

// =============================================================================
// STATUSES
// =============================================================================

/// Condidat pipeline statuses
pub mod condidat_statuses {
    pub const NEW: &str = "new";
    pub const TESTING: &str = "testing";
    pub const INTERVIEW: &str = "interview";
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";

    pub const ALL: &[&str] = &[NEW, TESTING, INTERVIEW, ACCEPTED, REJECTED];
}

/// Intern statuses
pub mod intern_statuses {
    pub const ACTIVE: &str = "active";
    pub const COMPLETED: &str = "completed";
    pub const CANCELLED: &str = "cancelled";

    pub const ALL: &[&str] = &[ACTIVE, COMPLETED, CANCELLED];
}

/// Project statuses
pub mod project_statuses {
    pub const PLANNED: &str = "planned";
    pub const IN_PROGRESS: &str = "in_progress";
    pub const COMPLETED: &str = "completed";
    pub const CANCELLED: &str = "cancelled";

    pub const ALL: &[&str] = &[PLANNED, IN_PROGRESS, COMPLETED, CANCELLED];
}

/// Question difficulty levels
pub mod question_levels {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

/// Test statuses
pub mod test_statuses {
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";

    pub const ALL: &[&str] = &[PENDING, COMPLETED];
}

/// Presence statuses
pub mod presence_statuses {
    pub const PRESENT: &str = "present";
    pub const ABSENT: &str = "absent";
    pub const LATE: &str = "late";
    pub const REMOTE: &str = "remote";

    pub const ALL: &[&str] = &[PRESENT, ABSENT, LATE, REMOTE];
}

/// Statuses shared by mission orders and training requests
pub mod request_statuses {
    pub const PENDING: &str = "pending";
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";

    pub const ALL: &[&str] = &[PENDING, ACCEPTED, REJECTED];

    /// Statuses a reviewer may set
    pub const DECISIONS: &[&str] = &[ACCEPTED, REJECTED];
}

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum length for names and titles
pub const MAX_NAME_LENGTH: u64 = 128;

/// Maximum length for free-text descriptions
pub const MAX_DESCRIPTION_LENGTH: u64 = 10_000;

/// Maximum number of questions a single test may sample per technology
pub const MAX_QUESTIONS_PER_TECHNOLOGY: u32 = 100;

/// Minimum number of options a question must offer
pub const MIN_QUESTION_OPTIONS: usize = 2;
