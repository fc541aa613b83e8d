//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod company;
pub mod condidat;
pub mod experience;
pub mod intern;
pub mod notification;
pub mod permission;
pub mod presence;
pub mod project;
pub mod question;
pub mod request;
pub mod role;
pub mod skill_test;
pub mod user;

pub use company::*;
pub use condidat::*;
pub use experience::*;
pub use intern::*;
pub use notification::*;
pub use permission::*;
pub use presence::*;
pub use project::*;
pub use question::*;
pub use request::*;
pub use role::*;
pub use skill_test::*;
pub use user::*;
