//! Named rule checks for project submissions, in evaluation order.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::ProjectSubmission;
use crate::error::CoreError;
use crate::naming::handle_from_name;

/// Minimum project name length in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum project name length in characters.
pub const MAX_NAME_LENGTH: usize = 30;

/// Minimum description length in characters.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Maximum number of tags on a project.
pub const MAX_TAGS_COUNT: usize = 10;

/// Alphanumeric runs joined by a single hyphen, underscore or space.
pub const NAME_PATTERN: &str = r"^[A-Za-z0-9]+(?:[-_ ][A-Za-z0-9]+)*$";

/// Handles that collide with static `/projects/...` route segments.
pub const RESERVED_HANDLES: &[&str] = &["user"];

/// Schemes a project link may use.
pub const URL_SCHEMES: &[&str] = &["http", "https"];

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("valid regex"));

/// A single check over a submission.
pub type Rule = fn(&ProjectSubmission) -> Result<(), CoreError>;

/// Every rule, in the order it is evaluated.
pub const PROJECT_RULES: &[(&str, Rule)] = &[
    ("required_fields", required_fields),
    ("name_length", name_length),
    ("name_characters", name_characters),
    ("reserved_handle", reserved_handle),
    ("description_length", description_length),
    ("tag_count", tag_count),
    ("live_url", live_url),
    ("trello_url", trello_url),
    ("github_url", github_url),
];

pub fn required_fields(submission: &ProjectSubmission) -> Result<(), CoreError> {
    for (field, value) in [
        ("name", &submission.name),
        ("description", &submission.description),
    ] {
        if value.is_none() {
            return Err(invalid(format!("Missing '{field}' in request body")));
        }
    }
    Ok(())
}

pub fn name_length(submission: &ProjectSubmission) -> Result<(), CoreError> {
    let len = char_len(&submission.name);
    if len < MIN_NAME_LENGTH {
        return Err(invalid(format!(
            "Project name must be {MIN_NAME_LENGTH} or more characters"
        )));
    }
    if len > MAX_NAME_LENGTH {
        return Err(invalid(format!(
            "Project name must be less than {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn name_characters(submission: &ProjectSubmission) -> Result<(), CoreError> {
    let name = submission.name.as_deref().unwrap_or_default();
    if !NAME_RE.is_match(name) {
        return Err(invalid(
            "Project name must contain only alphabetic characters or numbers and only 1 hyphen, underscore or space between them",
        ));
    }
    Ok(())
}

pub fn reserved_handle(submission: &ProjectSubmission) -> Result<(), CoreError> {
    let handle = handle_from_name(submission.name.as_deref().unwrap_or_default());
    if RESERVED_HANDLES.contains(&handle.as_str()) {
        return Err(invalid(format!("Project name '{handle}' is reserved")));
    }
    Ok(())
}

pub fn description_length(submission: &ProjectSubmission) -> Result<(), CoreError> {
    let len = char_len(&submission.description);
    if len < MIN_DESCRIPTION_LENGTH {
        return Err(invalid(format!(
            "Description must be {MIN_DESCRIPTION_LENGTH} or more characters"
        )));
    }
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(invalid(format!(
            "Description must be {MAX_DESCRIPTION_LENGTH} characters or less"
        )));
    }
    Ok(())
}

pub fn tag_count(submission: &ProjectSubmission) -> Result<(), CoreError> {
    let count = submission.tags.as_ref().map_or(0, Vec::len);
    if count > MAX_TAGS_COUNT {
        return Err(invalid(format!(
            "You may only enter up to {MAX_TAGS_COUNT} tags!"
        )));
    }
    Ok(())
}

pub fn live_url(submission: &ProjectSubmission) -> Result<(), CoreError> {
    check_url("live_url", &submission.live_url)
}

pub fn trello_url(submission: &ProjectSubmission) -> Result<(), CoreError> {
    check_url("trello_url", &submission.trello_url)
}

pub fn github_url(submission: &ProjectSubmission) -> Result<(), CoreError> {
    check_url("github_url", &submission.github_url)
}

/// Absent or blank values pass; anything else must parse as an absolute
/// http(s) URL that carries a host.
fn check_url(field: &str, value: &Option<String>) -> Result<(), CoreError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(()),
        Some(v) if is_absolute_url(v) => Ok(()),
        Some(_) => Err(invalid(format!("{field} is an invalid URL"))),
    }
}

pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host() && URL_SCHEMES.contains(&url.scheme()))
}

fn char_len(value: &Option<String>) -> usize {
    value.as_deref().map_or(0, |v| v.chars().count())
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::Validation(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ProjectSubmission {
        ProjectSubmission {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(name_length(&named("ab")).is_ok());
        assert!(name_length(&named(&"a".repeat(30))).is_ok());
        assert!(name_length(&named("a")).is_err());
        assert!(name_length(&named(&"a".repeat(31))).is_err());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 15 two-byte characters.
        assert!(name_length(&named(&"é".repeat(15))).is_ok());
    }

    #[test]
    fn name_pattern_accepts_single_separators() {
        for name in ["new name", "valid-name", "snake_case", "v2", "a b-c_d"] {
            assert!(name_characters(&named(name)).is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn name_pattern_rejects_doubled_edge_and_foreign_characters() {
        for name in [
            "invalid@project@name!",
            "double  space",
            "mixed-_sep",
            "-leading",
            "trailing_",
            "<script>",
        ] {
            assert!(name_characters(&named(name)).is_err(), "{name} should fail");
        }
    }

    #[test]
    fn description_bounds_are_inclusive() {
        let with = |d: String| ProjectSubmission {
            description: Some(d),
            ..Default::default()
        };
        assert!(description_length(&with("1234567890".into())).is_ok());
        assert!(description_length(&with("a".repeat(255))).is_ok());
        assert!(description_length(&with("a".repeat(256))).is_err());
    }

    #[test]
    fn url_check_requires_scheme_and_host() {
        assert!(is_absolute_url("https://github.com/some-github-repo"));
        assert!(is_absolute_url("http://localhost:8000/path"));
        assert!(!is_absolute_url("b@d_url"));
        assert!(!is_absolute_url("www.my-app.com"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
    }

    #[test]
    fn url_check_rejects_non_http_schemes() {
        assert!(!is_absolute_url("javascript://x/%0Aalert(1)"));
        assert!(!is_absolute_url("ftp://files.example.com/app.zip"));
        assert!(is_absolute_url("HTTPS://GITHUB.COM/repo"));
    }

    #[test]
    fn reserved_handles_are_rejected_whatever_the_case() {
        for name in ["user", "User", "USER"] {
            assert_eq!(
                reserved_handle(&named(name)).unwrap_err().to_string(),
                "Project name 'user' is reserved"
            );
        }
        assert!(reserved_handle(&named("user-hub")).is_ok());
        assert!(reserved_handle(&named("users")).is_ok());
    }

    #[test]
    fn rules_run_in_declared_order() {
        let names: Vec<_> = PROJECT_RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "required_fields",
                "name_length",
                "name_characters",
                "reserved_handle",
                "description_length",
                "tag_count",
                "live_url",
                "trello_url",
                "github_url",
            ]
        );
    }
}
