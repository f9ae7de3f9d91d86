//! Slug Module
//!
//! URL-safe slugs for free text and for paths. Both functions run the text
//! through the transliterating clean first, then keep only ASCII alphanumerics,
//! turning each run of "breaker" characters into one separator.
//!
//! Path slugs additionally keep the structural characters of a URL path and
//! query (`/ ? & : = .`) so that each segment is slugified on its own.

use std::borrow::Cow;

use log::trace;

use crate::NormalizeError;
use crate::clean::{normalize_with, strip_tags};
use crate::translit::{Transliterate, default_transliterator};

/// Characters that mark a word boundary and collapse into the separator.
pub const BREAKERS: &[char] = &['\\', '/', '_', '|', '+', ' ', '-'];

/// Characters `slugify_path` keeps verbatim.
pub const GUARDED: &[char] = &['/', '?', '&', ':', '=', '.'];

/// Characters a configured separator may be built from.
pub const SEPARATOR_CHARS: &str = "-_~+|";

pub const DEFAULT_SEPARATOR: &str = "-";

/// Slugify with the default `-` separator.
pub fn slugify(input: &str) -> String {
    slugify_string(input, DEFAULT_SEPARATOR)
}

/// Turn arbitrary text into a lowercase ASCII slug joined by `separator`.
///
/// The result is empty or matches `^[0-9a-z]+(SEP[0-9a-z]+)*$`. The characters of
/// `separator` count as breakers, so for a separator built from [`SEPARATOR_CHARS`]
/// slugifying a slug returns it unchanged. Other separators are not checked here and
/// may be consumed by the clean step (`<`, `&`, line breaks); [`crate::Normalizer`]
/// rejects them.
///
/// ```
/// use textnorm::slugify_string;
///
/// assert_eq!(slugify_string("Héllo, World!!  Foo_Bar", "-"), "hello-world-foo-bar");
/// assert_eq!(slugify_string("<h1>Top 10 Tips</h1>", "_"), "top_10_tips");
/// ```
pub fn slugify_string(input: &str, separator: &str) -> String {
    slugify_with(input, separator, default_transliterator())
}

pub(crate) fn slugify_with(input: &str, separator: &str, fold: &dyn Transliterate) -> String {
    let normalized = normalize_with(input, Some(fold)).to_lowercase();

    let mut slug = String::with_capacity(normalized.len());
    let mut pending_break = false;
    for ch in normalized.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_break && !slug.is_empty() {
                slug.push_str(separator);
            }
            slug.push(ch);
            pending_break = false;
        } else if BREAKERS.contains(&ch) || separator.contains(ch) {
            pending_break = true;
        }
    }

    trace!("slugify: {input:?} -> {slug:?}");
    slug
}

/// Slugify a URL or filesystem path while keeping its structure.
///
/// Percent escapes are decoded first (`+` reads as a space), backslashes become
/// `/`, and leading or trailing slashes are dropped. Every textual segment is
/// slugified; the separator never touches a guarded character or either end.
///
/// Fails only when a percent escape decodes to invalid UTF-8.
///
/// ```
/// use textnorm::slugify_path;
///
/// assert_eq!(slugify_path("/Some Café/Path?x=1&y=2", "-").unwrap(), "some-cafe/path?x=1&y=2");
/// assert_eq!(slugify_path("docs\\User%20Guide\\", "-").unwrap(), "docs/user-guide");
/// ```
pub fn slugify_path(uri: &str, separator: &str) -> Result<String, NormalizeError> {
    slugify_path_with(uri, separator, default_transliterator())
}

pub(crate) fn slugify_path_with(uri: &str, separator: &str, fold: &dyn Transliterate) -> Result<String, NormalizeError> {
    let decoded = percent_decode(uri)?;
    let stripped = strip_tags(&decoded.to_lowercase());
    let slashed = stripped.replace('\\', "/");
    let normalized = normalize_with(slashed.trim_matches('/'), Some(fold)).to_lowercase();
    // The clean decodes entities once more, which can surface new edge slashes.
    let normalized = normalized.trim_matches('/');

    let mut slug = String::with_capacity(normalized.len());
    let mut pending_break = false;
    for ch in normalized.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_break && slug.ends_with(|prev: char| prev.is_ascii_alphanumeric()) {
                slug.push_str(separator);
            }
            slug.push(ch);
            pending_break = false;
        } else if GUARDED.contains(&ch) {
            slug.push(ch);
            pending_break = false;
        } else if BREAKERS.contains(&ch) || separator.contains(ch) {
            pending_break = true;
        }
    }

    trace!("slugify_path: {uri:?} -> {slug:?}");
    Ok(slug)
}

/// Clean a URL or path without slugifying it.
///
/// Decodes percent escapes, strips tags, lowercases, turns backslashes into `/`,
/// drops leading slashes and runs the transliterating clean. Spaces and
/// punctuation survive.
///
/// ```
/// assert_eq!(textnorm::normalize_path("/Blog/Été%202024/").unwrap(), "blog/ete 2024/");
/// ```
pub fn normalize_path(uri: &str) -> Result<String, NormalizeError> {
    normalize_path_with(uri, default_transliterator())
}

pub(crate) fn normalize_path_with(uri: &str, fold: &dyn Transliterate) -> Result<String, NormalizeError> {
    let decoded = percent_decode(uri)?;
    let stripped = strip_tags(&decoded).to_lowercase();
    let slashed = stripped.replace('\\', "/");
    Ok(normalize_with(slashed.trim_start_matches('/'), Some(fold)))
}

/// Form-style percent decoding: `+` is a space, `%2B` is a literal plus.
fn percent_decode(uri: &str) -> Result<Cow<'_, str>, NormalizeError> {
    if !uri.contains(['%', '+']) {
        return Ok(Cow::Borrowed(uri));
    }

    let spaced = uri.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map_err(|err| NormalizeError::Encoding {
        context: "percent-encoded path",
        source: err.utf8_error(),
    })?;
    Ok(Cow::Owned(decoded.into_owned()))
}
