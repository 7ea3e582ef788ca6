//! Read access to the `requests` table (applications to vacancies).

use collab_core::types::DbId;
use sqlx::PgPool;

pub struct RequestRepo;

impl RequestRepo {
    /// Status of the most recent request `user_id` made on any vacancy of
    /// `project_id`, or `None` if the user never applied.
    pub async fn latest_status(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT r.status
             FROM requests r
             JOIN vacancies v ON v.id = r.vacancy_id
             WHERE v.project_id = $1 AND r.user_id = $2
             ORDER BY r.date_created DESC, r.id DESC
             LIMIT 1",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
