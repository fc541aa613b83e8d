//! Project service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{features, project_statuses},
    db::repositories::{InternRepository, ProjectRepository},
    error::{AppError, AppResult},
    handlers::{
        interns::response::InternResponse,
        projects::{
            request::{CreateProjectRequest, ListProjectsQuery, UpdateProjectRequest},
            response::ProjectResponse,
        },
    },
    middleware::AuthenticatedUser,
    models::{Action, Project, normalize_technology},
    services::PermissionService,
    utils::{Page, PageQuery, validate_date_range, validate_status},
};

/// Project service for business logic
pub struct ProjectService;

impl ProjectService {
    /// List projects of a company
    pub async fn list_projects(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListProjectsQuery,
    ) -> AppResult<Page<ProjectResponse>> {
        PermissionService::require(pool, session, features::PROJECTS, Action::Read).await?;

        if let Some(status) = query.status.as_deref() {
            validate_status(status, project_statuses::ALL)?;
        }

        let page = PageQuery::new(query.page, query.page_size);
        let (projects, total) = ProjectRepository::list(
            pool,
            company_id,
            query.search.as_deref(),
            query.status.as_deref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(projects, &page, total).map(Into::into))
    }

    /// Create a project
    pub async fn create_project(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateProjectRequest,
    ) -> AppResult<ProjectResponse> {
        PermissionService::require(pool, session, features::PROJECTS, Action::Create).await?;
        validate_date_range(payload.start_date, payload.end_date)?;

        let status = payload
            .status
            .as_deref()
            .unwrap_or(project_statuses::PLANNED);
        validate_status(status, project_statuses::ALL)?;

        let technologies = normalize_technologies(&payload.technologies);
        let project =
            ProjectRepository::create(pool, company_id, &payload, &technologies, status).await?;

        info!(project_id = %project.id, company_id = %company_id, "Project created");
        Ok(project.into())
    }

    /// Get a project
    pub async fn get_project(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<ProjectResponse> {
        PermissionService::require(pool, session, features::PROJECTS, Action::Read).await?;
        Ok(Self::find_project(pool, company_id, id).await?.into())
    }

    /// Update a project
    pub async fn update_project(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateProjectRequest,
    ) -> AppResult<ProjectResponse> {
        PermissionService::require(pool, session, features::PROJECTS, Action::Update).await?;

        if let Some(status) = payload.status.as_deref() {
            validate_status(status, project_statuses::ALL)?;
        }

        let current = Self::find_project(pool, company_id, id).await?;
        validate_date_range(
            payload.start_date.unwrap_or(current.start_date),
            payload.end_date.or(current.end_date),
        )?;

        let technologies = payload.technologies.as_deref().map(normalize_technologies);
        let project =
            ProjectRepository::update(pool, company_id, id, &payload, technologies.as_deref())
                .await?
                .ok_or_else(|| AppError::not_found("Project"))?;

        info!(project_id = %project.id, updated_by = %session.id, "Project updated");
        Ok(project.into())
    }

    /// Delete a project; its interns are unassigned
    pub async fn delete_project(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::PROJECTS, Action::Delete).await?;

        if !ProjectRepository::delete(pool, company_id, id).await? {
            return Err(AppError::not_found("Project"));
        }

        info!(project_id = %id, deleted_by = %session.id, "Project deleted");
        Ok(())
    }

    /// Interns working on a project
    pub async fn list_project_interns(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Vec<InternResponse>> {
        PermissionService::require(pool, session, features::PROJECTS, Action::Read).await?;
        Self::find_project(pool, company_id, id).await?;

        let interns = InternRepository::list_by_project(pool, company_id, id).await?;
        Ok(interns.into_iter().map(Into::into).collect())
    }

    async fn find_project(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Project> {
        ProjectRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Project"))
    }
}

/// Lowercase, trim and dedupe while keeping the first occurrence order
fn normalize_technologies(technologies: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(technologies.len());
    for technology in technologies {
        let technology = normalize_technology(technology);
        if !technology.is_empty() && !normalized.contains(&technology) {
            normalized.push(technology);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_technologies() {
        let input = vec![
            "Rust".to_string(),
            " rust ".to_string(),
            "".to_string(),
            "PostgreSQL".to_string(),
        ];
        assert_eq!(normalize_technologies(&input), vec!["rust", "postgresql"]);
    }
}
