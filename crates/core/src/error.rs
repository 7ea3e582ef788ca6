#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup miss. Rendered as `No {entity} found with {field} {value}`.
    #[error("No {entity} found with {field} {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a project lookup miss keyed by `field`.
    pub fn project_not_found(field: &'static str, value: impl ToString) -> Self {
        CoreError::NotFound {
            entity: "project",
            field,
            value: value.to_string(),
        }
    }
}
