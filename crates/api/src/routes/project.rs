//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /user        -> list_for_user
/// GET    /{handle}    -> get_by_handle
/// DELETE /{id}        -> delete
/// ```
///
/// Lookup by handle and deletion by id share one path segment; the static
/// `/user` route wins over it.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/user", get(project::list_for_user))
        .route(
            "/{project}",
            get(project::get_by_handle).delete(project::delete),
        )
}
