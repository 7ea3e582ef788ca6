//! Project handle derivation.

/// Derive a project's URL handle from its (already validated) name.
///
/// Lower-cases ASCII letters and turns every space or underscore into a
/// hyphen, so validated names always produce URL-safe slugs.
///
/// # Examples
///
/// ```
/// use collab_core::naming::handle_from_name;
///
/// assert_eq!(handle_from_name("new name"), "new-name");
/// assert_eq!(handle_from_name("My_Cool-App 2"), "my-cool-app-2");
/// ```
pub fn handle_from_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
