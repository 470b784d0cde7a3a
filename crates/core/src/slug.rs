//! Project slug generation.
//!
//! A slug is the URL key of a project. It is derived once from the title
//! when the project is created and never changes afterwards, even if the
//! title is edited.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Slug used when a title contains no usable characters.
pub const FALLBACK_SLUG: &str = "project";

/// Normalize a title into a URL-safe base slug.
///
/// Accented letters are reduced to their base letter (compatibility
/// decomposition with combining marks dropped). ASCII letters are lowercased
/// and digits kept; every run of any other character becomes a single
/// hyphen. Leading and trailing hyphens are trimmed.
///
/// # Examples
///
/// ```
/// use folio_core::slug::slugify;
///
/// assert_eq!(slugify("My Project"), "my-project");
/// assert_eq!(slugify("  Rust & Axum!  "), "rust-axum");
/// assert_eq!(slugify("Café Über"), "cafe-uber");
/// assert_eq!(slugify("???"), "project");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut prev_hyphen = false;

    for c in title.nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen && !slug.is_empty() {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Allocate a slug for `title` that `is_taken` does not report as used.
///
/// Tries the base slug first, then `base-1`, `base-2`, ... until a free key
/// turns up. The caller decides what "taken" means (a set of keys, a map
/// lookup, a database probe).
pub fn allocate_slug(title: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let base = slugify(title);
    if !is_taken(&base) {
        return base;
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{base}-{counter}");
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
