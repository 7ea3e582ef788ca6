//! Project submission validation.
//!
//! A submission is checked against [`rules::PROJECT_RULES`] in order and the
//! first violation is returned as [`CoreError::Validation`]. Nothing is
//! aggregated: callers surface exactly one message per rejected request.

pub mod rules;

use serde::Deserialize;

use crate::error::CoreError;
use crate::naming::handle_from_name;

/// Raw `POST /projects` body as sent by the client.
///
/// Every field is optional at the type level so that a missing field is
/// reported through the rule chain instead of a deserialization error.
/// Fields the server assigns (`id`, `handle`, `creator_id`, `date_created`)
/// are not read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSubmission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub trello_url: Option<String>,
    pub github_url: Option<String>,
}

/// A submission that passed every rule, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    pub name: String,
    pub handle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub live_url: Option<String>,
    pub trello_url: Option<String>,
    pub github_url: Option<String>,
}

impl ProjectSubmission {
    /// Run the rule chain, short-circuiting on the first failure.
    pub fn validate(self) -> Result<ValidProject, CoreError> {
        for (_, rule) in rules::PROJECT_RULES {
            rule(&self)?;
        }

        let name = self.name.unwrap_or_default();
        Ok(ValidProject {
            handle: handle_from_name(&name),
            name,
            description: self.description.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            live_url: present(self.live_url),
            trello_url: present(self.trello_url),
            github_url: present(self.github_url),
        })
    }
}

/// Optional fields are stored trimmed; blank ones as NULL.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
