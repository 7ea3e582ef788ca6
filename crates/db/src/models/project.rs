//! Project entity model.

use collab_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub handle: String,
    pub description: String,
    pub creator_id: DbId,
    pub date_created: Timestamp,
    pub tags: Vec<String>,
    pub live_url: Option<String>,
    pub trello_url: Option<String>,
    pub github_url: Option<String>,
}
