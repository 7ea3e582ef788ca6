//! Requester-relative project roles.

use serde::{Serialize, Serializer};

use crate::types::DbId;

/// The requesting user's relationship to a project.
///
/// Only ownership is decided here. Any other relationship is whatever
/// classification the vacancy request records carry for that user, passed
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    Owner,
    Other(String),
}

impl UserRole {
    pub const OWNER: &'static str = "owner";

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Owner => Self::OWNER,
            UserRole::Other(role) => role,
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Compute the role of `user_id` on a project created by `creator_id`.
///
/// `request_status` is the user's most recent request status on the
/// project's vacancies, if any. Creators are always owners; a user with no
/// relationship has no role.
pub fn resolve_user_role(
    user_id: DbId,
    creator_id: DbId,
    request_status: Option<String>,
) -> Option<UserRole> {
    if user_id == creator_id {
        return Some(UserRole::Owner);
    }
    request_status.map(UserRole::Other)
}
