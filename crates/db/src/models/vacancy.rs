//! Vacancy entity model and DTO.

use collab_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A vacancy row from the `vacancies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Vacancy {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub user_id: Option<DbId>,
}

/// DTO for opening a vacancy on a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVacancy {
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub user_id: Option<DbId>,
}
