//! Output sanitization for user-supplied project text.
//!
//! Applied to every outward-facing `name` and `description`, whatever the
//! endpoint. Tags are removed and their inner text kept; a leftover `<` or
//! `>` that was not part of a tag is escaped so nothing reaches a client as
//! markup.

use std::sync::LazyLock;

use regex::Regex;

/// Any opening, closing or self-closing tag, including HTML comments.
const TAG_PATTERN: &str = r"(?s)<!--.*?-->|</?[A-Za-z][^<>]*>";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TAG_PATTERN).expect("valid regex"));

/// Strip markup from `input`, keeping its text content.
///
/// # Examples
///
/// ```
/// use collab_core::sanitize::strip_markup;
///
/// assert_eq!(
///     strip_markup(r#"Naughty <script>alert("xss");</script>"#),
///     r#"Naughty alert("xss");"#
/// );
/// assert_eq!(strip_markup("plain text"), "plain text");
/// ```
pub fn strip_markup(input: &str) -> String {
    if !input.contains(['<', '>']) {
        return input.to_string();
    }
    TAG_RE
        .replace_all(input, "")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
