pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                  list, create
/// /projects/user             requester's projects
/// /projects/{handle}         detail (GET)
/// /projects/{id}             delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
