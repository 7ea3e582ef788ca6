//! Repository for the `vacancies` table.

use collab_core::types::DbId;
use sqlx::PgPool;

use crate::models::vacancy::{CreateVacancy, Vacancy};

const COLUMNS: &str = "id, project_id, title, description, skills, user_id";

pub struct VacancyRepo;

impl VacancyRepo {
    pub async fn create(pool: &PgPool, input: &CreateVacancy) -> Result<Vacancy, sqlx::Error> {
        let query = format!(
            "INSERT INTO vacancies (project_id, title, description, skills, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.skills)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Vacancy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vacancies WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch the vacancies of several projects in one round trip, in id order.
    pub async fn list_for_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Vacancy>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query =
            format!("SELECT {COLUMNS} FROM vacancies WHERE project_id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }
}
