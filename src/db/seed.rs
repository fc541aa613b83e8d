//! Root tenant seeding
//!
//! Runs once after migrations. The root company's users administer every
//! other tenant; restarting the server never creates a second one.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::{
    config::SeedConfig,
    constants::ROOT_ROLE_NAME,
    db::repositories::CompanyRepository,
    error::AppResult,
    services::company_service::{CompanyBootstrap, CompanyService},
    utils::hash_password,
};

/// What [`seed_root`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadySeeded,
    Skipped,
}

/// Create the root company, its `root` role and user if none exist yet
pub async fn seed_root(pool: &PgPool, config: &SeedConfig) -> AppResult<SeedOutcome> {
    let (Some(user_email), Some(user_password)) =
        (config.user_email.as_deref(), config.user_password.as_deref())
    else {
        warn!("ROOT_USER_EMAIL or ROOT_USER_PASSWORD not set, skipping root seeding");
        return Ok(SeedOutcome::Skipped);
    };

    if let Some(root) = CompanyRepository::find_root(pool).await? {
        info!(company_id = %root.id, "Root company already present");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let password_hash = hash_password(user_password)?;
    let company_email = config.company_email.as_deref().unwrap_or(user_email);

    let mut tx = pool.begin().await?;
    let (company, _role, user) = CompanyService::bootstrap(
        &mut tx,
        &CompanyBootstrap {
            name: &config.company_name,
            email: company_email,
            phone: None,
            address: None,
            is_root: true,
            role_name: ROOT_ROLE_NAME,
            admin_first_name: &config.user_first_name,
            admin_last_name: &config.user_last_name,
            admin_email: user_email,
            admin_password_hash: &password_hash,
        },
    )
    .await?;
    tx.commit().await?;

    info!(company_id = %company.id, user_id = %user.id, email = %user.email, "Root company seeded");
    Ok(SeedOutcome::Created)
}
