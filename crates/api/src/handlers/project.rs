//! Handlers for the `/projects` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use collab_core::error::CoreError;
use collab_core::roles::resolve_user_role;
use collab_core::types::DbId;
use collab_core::validation::ProjectSubmission;
use collab_db::models::project::Project;
use collab_db::repositories::{ProjectRepo, RequestRepo, VacancyRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views::{build_project_list, sanitize_project, ProjectDetailView, ProjectView};

/// GET /api/projects
///
/// Public: listing needs no credentials.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectView>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    with_vacancies(&state, projects).await.map(Json)
}

/// GET /api/projects/user
pub async fn list_for_user(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ProjectView>>> {
    let projects = ProjectRepo::list_by_creator(&state.pool, user.user_id).await?;
    with_vacancies(&state, projects).await.map(Json)
}

/// GET /api/projects/{handle}
pub async fn get_by_handle(
    State(state): State<AppState>,
    user: AuthUser,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ProjectDetailView>> {
    let Path(handle) = path?;
    let project = ProjectRepo::find_by_handle(&state.pool, &handle)
        .await?
        .ok_or_else(|| CoreError::project_not_found("handle", &handle))?;

    // Owners need no lookup.
    let request_status = if project.creator_id == user.user_id {
        None
    } else {
        RequestRepo::latest_status(&state.pool, project.id, user.user_id).await?
    };
    let user_role = resolve_user_role(user.user_id, project.creator_id, request_status);

    let vacancies = VacancyRepo::list_by_project(&state.pool, project.id).await?;
    Ok(Json(ProjectDetailView {
        project: ProjectView::new(project, vacancies),
        user_role,
    }))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<ProjectSubmission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(submission) = payload?;
    let input = submission.validate()?;

    if ProjectRepo::handle_exists(&state.pool, &input.handle).await? {
        return Err(handle_taken(&input.handle));
    }

    let project = ProjectRepo::create(&state.pool, user.user_id, &input)
        .await
        .map_err(|e| project_insert_error(e, &input.handle))?;
    tracing::info!(
        project_id = project.id,
        handle = %project.handle,
        user_id = user.user_id,
        username = %user.username,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(sanitize_project(project))))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::project_not_found("id", id))?;

    if project.creator_id != user.user_id {
        tracing::warn!(
            project_id = id,
            user_id = user.user_id,
            username = %user.username,
            "Refusing delete by non-owner"
        );
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner can delete this project".into(),
        )));
    }

    if !ProjectRepo::delete(&state.pool, id).await? {
        // Removed by a concurrent request between lookup and delete.
        return Err(CoreError::project_not_found("id", id).into());
    }
    tracing::info!(
        project_id = id,
        user_id = user.user_id,
        username = %user.username,
        "Project deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Load the vacancies of `projects` in one query and build the list views.
async fn with_vacancies(state: &AppState, projects: Vec<Project>) -> AppResult<Vec<ProjectView>> {
    let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
    let vacancies = VacancyRepo::list_for_projects(&state.pool, &ids).await?;
    Ok(build_project_list(projects, vacancies))
}

/// Map an insert failure on `uq_projects_handle` to the same conflict the
/// pre-check reports. A concurrent create can slip past `handle_exists`.
pub fn project_insert_error(err: sqlx::Error, handle: &str) -> AppError {
    let clash = matches!(
        &err,
        sqlx::Error::Database(db) if db.constraint() == Some("uq_projects_handle")
    );
    if clash {
        handle_taken(handle)
    } else {
        AppError::Database(err)
    }
}

fn handle_taken(handle: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "A project with handle {handle} already exists"
    )))
}
