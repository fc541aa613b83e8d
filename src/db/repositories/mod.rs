//! Database repositories
//!
//! Repositories handle all direct database interactions. Every lookup of a
//! company-owned row is filtered by `company_id`.

pub mod company_repo;
pub mod condidat_repo;
pub mod experience_repo;
pub mod intern_repo;
pub mod mission_order_repo;
pub mod notification_repo;
pub mod permission_repo;
pub mod presence_repo;
pub mod project_repo;
pub mod question_repo;
pub mod role_repo;
pub mod test_repo;
pub mod training_request_repo;
pub mod user_repo;

pub use company_repo::CompanyRepository;
pub use condidat_repo::CondidatRepository;
pub use experience_repo::ExperienceRepository;
pub use intern_repo::InternRepository;
pub use mission_order_repo::MissionOrderRepository;
pub use notification_repo::{NewNotification, NotificationRepository};
pub use permission_repo::PermissionRepository;
pub use presence_repo::{PresenceFilter, PresenceRepository};
pub use project_repo::ProjectRepository;
pub use question_repo::{NewQuestion, QuestionChanges, QuestionRepository};
pub use role_repo::RoleRepository;
pub use test_repo::{NewTest, TestRepository};
pub use training_request_repo::TrainingRequestRepository;
pub use user_repo::{NewUser, UserChanges, UserRepository};
