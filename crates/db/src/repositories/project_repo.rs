//! Repository for the `projects` table.

use collab_core::types::DbId;
use collab_core::validation::ValidProject;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, handle, description, creator_id, date_created, tags, \
                       live_url, trello_url, github_url";

/// Provides create, read and delete operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a validated project owned by `creator_id`, returning the row.
    ///
    /// `date_created` is always the database's `NOW()`.
    pub async fn create(
        pool: &PgPool,
        creator_id: DbId,
        input: &ValidProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (name, handle, description, creator_id, tags, live_url, trello_url, github_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.handle)
            .bind(&input.description)
            .bind(creator_id)
            .bind(&input.tags)
            .bind(&input.live_url)
            .bind(&input.trello_url)
            .bind(&input.github_url)
            .fetch_one(pool)
            .await
    }

    /// List every project in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List the projects created by `creator_id` in id order.
    pub async fn list_by_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE creator_id = $1 ORDER BY id");
        sqlx::query_as::<_, Project>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_handle(
        pool: &PgPool,
        handle: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE handle = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(handle)
            .fetch_optional(pool)
            .await
    }

    pub async fn handle_exists(pool: &PgPool, handle: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE handle = $1)")
            .bind(handle)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a project. Vacancies, requests, posts, chats,
    /// messages and notifications go with it through `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(project_id = id, rows = result.rows_affected(), "Deleted project");
        Ok(result.rows_affected() > 0)
    }
}
