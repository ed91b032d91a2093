//! Slug utilities.
//!
//! Slugs are the URL-safe identifiers used for post paths, heading anchors,
//! and keyword tag links. They are ASCII-only so they can be dropped into a
//! path without percent-encoding. Non-ASCII letters are transliterated first,
//! so accented words keep their letters.

use deunicode::deunicode;

/// Compute a URL-safe slug from arbitrary text.
///
/// Performs the following transformations:
/// 1. Transliterates to ASCII (`é` becomes `e`, `ß` becomes `ss`)
/// 2. Converts to lowercase
/// 3. Keeps ASCII letters and digits
/// 4. Collapses every run of other characters into a single hyphen
/// 5. Drops leading and trailing hyphens
///
/// # Examples
///
/// ```
/// use scrivo_core::util::ids::slugify;
///
/// assert_eq!(slugify("Top 10 Retail Tips!"), "top-10-retail-tips");
/// assert_eq!(slugify("  Summer -- Sale  "), "summer-sale");
/// assert_eq!(slugify("Café Culture"), "cafe-culture");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in deunicode(text).chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
