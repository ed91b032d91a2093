//! SEO enrichment of formatted HTML.
//!
//! Enrichment runs in two phases over a parsed document:
//!
//! 1. **Plan** (read-only): collect paragraph texts in document order and
//!    decide the meta description and which paragraph gets a synthetic
//!    subheading. Keyword links are planned over the linkable text runs
//!    (text inside a `<p>`, outside any anchor), so each keyword lands on its
//!    first occurrence that can actually be wrapped.
//! 2. **Emit**: walk the parsed tree once and serialize a new document,
//!    inserting the subheading, missing alt attributes, and keyword anchors
//!    as the walk passes the planned positions.
//!
//! The parsed tree is never modified.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use scrivo_seo::optimize_at;
//!
//! let published = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
//! let keywords = vec!["shoes".to_string()];
//! let result = optimize_at(
//!     "<p>Our shoes are on sale.</p>",
//!     "Summer Sale",
//!     &keywords,
//!     published,
//! );
//!
//! assert_eq!(result.metadata.slug, "summer-sale");
//! assert_eq!(result.metadata.meta_description, "Our shoes are on sale.");
//! assert!(result
//!     .processed_content
//!     .contains(r#"<p>Our <a href="/tag/shoes">shoes</a> are on sale.</p>"#));
//! ```

use crate::alt_text::alt_text;
use crate::keywords::keyword_pattern;
use crate::metadata::{ArticleSchema, OptimizedContent, SchemaPerson, SeoMetadata};
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Node, Selector};
use scrivo_core::{iso_timestamp, slugify, truncate_chars, SeoConfig};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("Invalid paragraph selector"));

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "xmp", "iframe", "noembed", "noframes"];

const ELLIPSIS: &str = "...";

// ============================================================================
// Public API
// ============================================================================

/// Enrich `html` using default settings and the current time.
pub fn optimize(html: &str, title: &str, keywords: &[String]) -> OptimizedContent {
    optimize_with(&SeoConfig::default(), html, title, keywords, Utc::now())
}

/// Enrich `html` using default settings and an explicit publication time.
pub fn optimize_at(
    html: &str,
    title: &str,
    keywords: &[String],
    published: DateTime<Utc>,
) -> OptimizedContent {
    optimize_with(&SeoConfig::default(), html, title, keywords, published)
}

/// Enrich `html` with explicit settings and publication time.
///
/// Never fails: an empty title yields an empty slug, and an empty keyword
/// list disables alt-text synthesis and keyword linking.
pub fn optimize_with(
    config: &SeoConfig,
    html: &str,
    title: &str,
    keywords: &[String],
    published: DateTime<Utc>,
) -> OptimizedContent {
    let document = Html::parse_document(html);
    let slug = slugify(title);

    let paragraph_texts: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect())
        .collect();

    let meta_description = paragraph_texts
        .first()
        .map(|text| truncate_chars(text, config.meta_description_max, ELLIPSIS))
        .unwrap_or_default();

    let subheading = paragraph_texts
        .iter()
        .position(|text| text.chars().count() > config.subheading_min_chars)
        .map(|idx| {
            (
                idx,
                subheading_text(&paragraph_texts[idx], config.subheading_words),
            )
        });

    let links = plan_links(&linkable_runs(&document), keywords, &config.tag_path_prefix);

    let emitter = Emitter {
        title,
        keywords,
        subheading,
        links,
        out: String::with_capacity(html.len() + 256),
        paragraph_index: 0,
        paragraph_depth: 0,
        run_index: 0,
        anchor_depth: 0,
        raw_text_depth: 0,
    };
    let processed_content = emitter.serialize(&document);

    let schema = ArticleSchema {
        context: config.schema_context.clone(),
        kind: "Article".to_string(),
        headline: title.to_string(),
        description: meta_description.clone(),
        keywords: keywords.join(", "),
        date_published: iso_timestamp(&published),
        author: SchemaPerson::named(config.author_name.clone()),
    };

    OptimizedContent {
        processed_content,
        metadata: SeoMetadata {
            slug,
            meta_description,
            schema: schema.to_json(),
        },
    }
}

/// The first `words` space-separated words of `text` followed by `...`.
///
/// # Example
///
/// ```rust
/// use scrivo_seo::enrich::subheading_text;
///
/// assert_eq!(
///     subheading_text("Retail trends are shifting fast this season", 5),
///     "Retail trends are shifting fast..."
/// );
/// ```
pub fn subheading_text(text: &str, words: usize) -> String {
    let mut heading = text.split(' ').take(words).collect::<Vec<_>>().join(" ");
    heading.push_str(ELLIPSIS);
    heading
}

// ============================================================================
// Planning
// ============================================================================

/// A keyword anchor placed at a byte range of one text run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placement {
    start: usize,
    end: usize,
    href: String,
}

/// Text runs that can take a keyword link, in document order: text nodes
/// inside a `<p>` with no `<a>` or raw-text ancestor.
fn linkable_runs(document: &Html) -> Vec<&str> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let mut in_paragraph = false;
            for ancestor in node.ancestors() {
                if let Some(element) = ancestor.value().as_element() {
                    let name = element.name();
                    if name == "a" || RAW_TEXT_ELEMENTS.contains(&name) {
                        return None;
                    }
                    in_paragraph |= name == "p";
                }
            }
            in_paragraph.then_some(&**text)
        })
        .collect()
}

/// For each linkable run (by index into `runs`), the anchors it receives,
/// sorted by position.
///
/// Each keyword takes its first whole-word match that does not overlap an
/// anchor already planned for an earlier keyword.
fn plan_links(runs: &[&str], keywords: &[String], prefix: &str) -> BTreeMap<usize, Vec<Placement>> {
    let mut plan: BTreeMap<usize, Vec<Placement>> = BTreeMap::new();
    let mut seen = HashSet::new();

    for keyword in keywords {
        if !seen.insert(keyword.trim().to_lowercase()) {
            continue;
        }
        let Some(pattern) = keyword_pattern(keyword) else {
            continue;
        };

        let found = runs.iter().enumerate().find_map(|(idx, run)| {
            let taken = plan.get(&idx).map(Vec::as_slice).unwrap_or_default();
            pattern
                .find_iter(run)
                .find(|m| taken.iter().all(|p| m.end() <= p.start || m.start() >= p.end))
                .map(|m| (idx, m.start(), m.end()))
        });
        let Some((idx, start, end)) = found else {
            log::debug!("Keyword {keyword:?} has no linkable occurrence in any paragraph");
            continue;
        };

        let placements = plan.entry(idx).or_default();
        placements.push(Placement {
            start,
            end,
            href: format!("{prefix}{}", slugify(keyword)),
        });
        placements.sort_by_key(|p| p.start);
    }

    plan
}

// ============================================================================
// Emission
// ============================================================================

struct Emitter<'a> {
    title: &'a str,
    keywords: &'a [String],
    subheading: Option<(usize, String)>,
    links: BTreeMap<usize, Vec<Placement>>,
    out: String,
    /// Number of `<p>` elements entered so far.
    paragraph_index: usize,
    paragraph_depth: usize,
    /// Number of linkable text runs written so far.
    run_index: usize,
    anchor_depth: usize,
    raw_text_depth: usize,
}

impl Emitter<'_> {
    fn serialize(mut self, document: &Html) -> String {
        for child in document.tree.root().children() {
            match child.value() {
                Node::Doctype(doctype) => {
                    self.out.push_str("<!DOCTYPE ");
                    self.out.push_str(doctype.name());
                    self.out.push('>');
                }
                Node::Comment(comment) => self.write_comment(comment),
                Node::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        self.write_element(element);
                    }
                }
                _ => {}
            }
        }
        self.out
    }

    fn write_element(&mut self, element: ElementRef<'_>) {
        let data = element.value();
        let name = data.name();
        let is_paragraph = name == "p";

        if is_paragraph {
            self.enter_paragraph();
        }

        self.out.push('<');
        self.out.push_str(name);

        let needs_alt = name == "img"
            && !self.keywords.is_empty()
            && data.attr("alt").is_none_or(str::is_empty);
        for (attr, value) in data.attrs() {
            if needs_alt && attr == "alt" {
                continue;
            }
            self.write_attr(attr, value);
        }
        if needs_alt {
            let alt = alt_text(data.attr("src").unwrap_or_default(), self.keywords, self.title);
            log::debug!("Synthesized alt text {alt:?}");
            self.write_attr("alt", &alt);
        }
        self.out.push('>');

        if VOID_ELEMENTS.contains(&name) {
            return;
        }

        let raw_text = RAW_TEXT_ELEMENTS.contains(&name);
        let anchor = name == "a";
        if raw_text {
            self.raw_text_depth += 1;
        }
        if anchor {
            self.anchor_depth += 1;
        }

        for child in element.children() {
            match child.value() {
                Node::Text(text) => self.write_text(text),
                Node::Comment(comment) => self.write_comment(comment),
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        self.write_element(child);
                    }
                }
                _ => {}
            }
        }

        if raw_text {
            self.raw_text_depth -= 1;
        }
        if anchor {
            self.anchor_depth -= 1;
        }

        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');

        if is_paragraph {
            self.paragraph_depth -= 1;
        }
    }

    fn enter_paragraph(&mut self) {
        let idx = self.paragraph_index;
        self.paragraph_index += 1;
        self.paragraph_depth += 1;

        if let Some((target, heading)) = &self.subheading {
            if *target == idx {
                log::debug!("Inserting subheading {heading:?} before paragraph {idx}");
                self.out.push_str("<h2>");
                self.out.push_str(&escape_text(heading));
                self.out.push_str("</h2>");
            }
        }
    }

    /// Write a text node, wrapping any planned keyword ranges in anchors.
    fn write_text(&mut self, text: &str) {
        if self.raw_text_depth > 0 {
            self.out.push_str(text);
            return;
        }
        if self.paragraph_depth == 0 || self.anchor_depth > 0 {
            self.out.push_str(&escape_text(text));
            return;
        }

        let run = self.run_index;
        self.run_index += 1;
        let Some(placements) = self.links.remove(&run) else {
            self.out.push_str(&escape_text(text));
            return;
        };

        let mut cursor = 0;
        for placement in placements {
            self.out.push_str(&escape_text(&text[cursor..placement.start]));
            self.out.push_str("<a href=\"");
            self.out.push_str(&escape_attr(&placement.href));
            self.out.push_str("\">");
            self.out.push_str(&escape_text(&text[placement.start..placement.end]));
            self.out.push_str("</a>");
            cursor = placement.end;
        }
        self.out.push_str(&escape_text(&text[cursor..]));
    }

    fn write_attr(&mut self, name: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&escape_attr(value));
        self.out.push('"');
    }

    fn write_comment(&mut self, comment: &str) {
        self.out.push_str("<!--");
        self.out.push_str(comment);
        self.out.push_str("-->");
    }
}

/// Escape element text the way HTML serializers do.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a double-quoted attribute value.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Tests
// ============================================================================
