//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use collab_core::error::CoreError;
use collab_core::types::DbId;
use collab_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Body text of every 401. The reason is only logged.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";

/// Authenticated user resolved from `Authorization: Bearer <jwt>`.
///
/// The token must verify against the configured secret and its subject
/// must still exist in `users`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| unauthorized("missing or malformed Authorization header"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|e| unauthorized(&format!("token rejected: {e}")))?;

        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| unauthorized("token subject does not exist"))?;

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        })
    }
}

fn unauthorized(reason: &str) -> AppError {
    tracing::debug!(reason, "Rejecting unauthenticated request");
    AppError::Core(CoreError::Unauthorized(UNAUTHORIZED_MESSAGE.into()))
}
