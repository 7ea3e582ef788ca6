//! Public view models for projects.
//!
//! Rows leave the API only through this module, so every outward-facing
//! project and vacancy text field goes through [`strip_markup`].

use std::collections::HashMap;

use collab_core::roles::UserRole;
use collab_core::sanitize::strip_markup;
use collab_core::types::{DbId, Timestamp};
use collab_db::models::project::Project;
use collab_db::models::vacancy::Vacancy;
use serde::Serialize;

/// A project together with its vacancies.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
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
    pub vacancies: Vec<Vacancy>,
}

/// Single-project view with the requester's role.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailView {
    #[serde(flatten)]
    pub project: ProjectView,
    #[serde(rename = "userRole")]
    pub user_role: Option<UserRole>,
}

impl ProjectView {
    pub fn new(project: Project, vacancies: Vec<Vacancy>) -> Self {
        let project = sanitize_project(project);
        Self {
            id: project.id,
            name: project.name,
            handle: project.handle,
            description: project.description,
            creator_id: project.creator_id,
            date_created: project.date_created,
            tags: project.tags,
            live_url: project.live_url,
            trello_url: project.trello_url,
            github_url: project.github_url,
            vacancies: vacancies.into_iter().map(sanitize_vacancy).collect(),
        }
    }
}

/// Return `project` with its free-text fields stripped of markup.
pub fn sanitize_project(mut project: Project) -> Project {
    project.name = strip_markup(&project.name);
    project.description = strip_markup(&project.description);
    project
}

pub fn sanitize_vacancy(mut vacancy: Vacancy) -> Vacancy {
    vacancy.title = strip_markup(&vacancy.title);
    vacancy.description = strip_markup(&vacancy.description);
    vacancy
}

/// Attach each project's vacancies, keeping both input orders.
///
/// `vacancies` may belong to any of `projects`; the ones that belong to none
/// are dropped.
pub fn build_project_list(projects: Vec<Project>, vacancies: Vec<Vacancy>) -> Vec<ProjectView> {
    let mut by_project: HashMap<DbId, Vec<Vacancy>> = HashMap::new();
    for vacancy in vacancies {
        by_project.entry(vacancy.project_id).or_default().push(vacancy);
    }

    projects
        .into_iter()
        .map(|project| {
            let own = by_project.remove(&project.id).unwrap_or_default();
            ProjectView::new(project, own)
        })
        .collect()
}
