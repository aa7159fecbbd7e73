//! Slug derivation for stable, URL-safe service identifiers.

use regex::Regex;

/// Derives the slug for a display title.
///
/// The title is case-folded, runs of non-alphanumeric characters are
/// collapsed into a single `-`, and leading/trailing separators are
/// trimmed. The result is deterministic, so a slug computed from a title
/// always resolves back to the same record.
///
/// # Examples
///
/// ```
/// use obscura::models::slug;
///
/// assert_eq!(slug("Wedding & Engagement"), "wedding-engagement");
/// assert_eq!(slug("Portrait"), "portrait");
/// ```
#[must_use]
pub fn slug(title: &str) -> String {
    let non_alphanumeric = Regex::new(r"[^a-z0-9]+").unwrap();
    let lowered = title.to_lowercase();
    let collapsed = non_alphanumeric.replace_all(&lowered, "-");
    collapsed.trim_matches('-').to_string()
}
