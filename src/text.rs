//! Small text clean-up helpers for recipe display.

use regex::Regex;
use std::sync::OnceLock;

const RECIPE_PAGE_BASE: &str = "https://spoonacular.com/recipes";

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

fn hyphen_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-{2,}").expect("hyphen regex"))
}

fn html_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("html tag regex"))
}

/// Builds a URL slug from a recipe title: `"Tom's Spicy Soup!"` → `"toms-spicy-soup"`.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    let hyphenated = whitespace_runs().replace_all(kept.trim(), "-");
    hyphen_runs()
        .replace_all(&hyphenated, "-")
        .trim_matches('-')
        .to_string()
}

/// Display URL of a recipe on the upstream site.
pub fn recipe_url(title: &str, id: i64) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{}/{}", RECIPE_PAGE_BASE, id)
    } else {
        format!("{}/{}-{}", RECIPE_PAGE_BASE, slug, id)
    }
}

/// Removes every `<...>` tag. Entities are left encoded and paragraph
/// breaks are not reinserted.
pub fn strip_html(text: &str) -> String {
    html_tag().replace_all(text, "").trim().to_string()
}
