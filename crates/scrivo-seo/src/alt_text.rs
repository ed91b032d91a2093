//! Alt text synthesis for images without one.

/// The label an image file contributes to its alt text: the last path
/// segment of `src`, cut at its first `.`.
///
/// # Example
///
/// ```rust
/// use scrivo_seo::alt_text::file_label;
///
/// assert_eq!(file_label("/img/shoes-sale.png"), "shoes-sale");
/// assert_eq!(file_label("banner.min.jpg"), "banner");
/// ```
pub fn file_label(src: &str) -> &str {
    let file = src.rsplit('/').next().unwrap_or(src);
    file.split('.').next().unwrap_or(file)
}

/// Alt text for an image, from the post title and the keywords found in the
/// image's file name.
///
/// Keywords that appear (case-insensitively) anywhere in the file label are
/// listed after the title; with no such keyword the label itself is used.
///
/// # Example
///
/// ```rust
/// use scrivo_seo::alt_text::alt_text;
///
/// let keywords = vec!["shoes".to_string()];
/// assert_eq!(
///     alt_text("/img/shoes-sale.png", &keywords, "Summer Sale"),
///     "Summer Sale - shoes"
/// );
/// assert_eq!(
///     alt_text("/img/hero.png", &keywords, "Summer Sale"),
///     "Summer Sale - hero"
/// );
/// ```
pub fn alt_text(src: &str, keywords: &[String], title: &str) -> String {
    let label = file_label(src);
    let label_lower = label.to_lowercase();

    let matching: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty() && label_lower.contains(&k.to_lowercase()))
        .collect();

    if matching.is_empty() {
        format!("{title} - {label}")
    } else {
        format!("{title} - {}", matching.join(", "))
    }
}
