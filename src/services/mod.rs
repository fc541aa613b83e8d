//! Business logic services

pub mod auth_service;
pub mod company_service;
pub mod condidat_service;
pub mod experience_service;
pub mod intern_service;
pub mod mission_order_service;
pub mod notification_service;
pub mod permission_service;
pub mod presence_service;
pub mod project_service;
pub mod question_service;
pub mod role_service;
pub mod test_service;
pub mod training_request_service;
pub mod user_service;

pub use auth_service::{AuthService, TokenKeys};
pub use company_service::CompanyService;
pub use condidat_service::CondidatService;
pub use experience_service::ExperienceService;
pub use intern_service::InternService;
pub use mission_order_service::MissionOrderService;
pub use notification_service::NotificationService;
pub use permission_service::PermissionService;
pub use presence_service::PresenceService;
pub use project_service::ProjectService;
pub use question_service::QuestionService;
pub use role_service::RoleService;
pub use test_service::TestService;
pub use training_request_service::TrainingRequestService;
pub use user_service::UserService;
