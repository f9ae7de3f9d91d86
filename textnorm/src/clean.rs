//! Clean Module
//!
//! The lowest layer of the pipeline: entity decoding and tag removal, line
//! flattening, and the `normalize_string` composition the slug functions build on.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::NormalizeError;
use crate::translit::{Transliterate, default_transliterator};

lazy_static! {
    // Comments go first so a `>` inside one cannot end the match early.
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?(?:-->|$)").expect("comment pattern is valid");
    // A tag opens with a letter, `/`, `!` or `?`; an unterminated one runs to the end.
    static ref TAG: Regex = Regex::new(r"<[a-zA-Z/!?][^>]*(?:>|$)").expect("tag pattern is valid");
}

/// Decode HTML entities, remove tag markup, and trim surrounding whitespace.
///
/// Entities are decoded before tags are removed, so escaped markup such as
/// `&lt;b&gt;` is removed as well. A `<` that does not open a tag (`a < b`) is kept.
///
/// ```
/// assert_eq!(textnorm::strip_tags("<p>Fish &amp; <i>chips</i></p>\n"), "Fish & chips");
/// ```
pub fn strip_tags(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let decoded = html_escape::decode_html_entities(input);
    let without_comments = COMMENT.replace_all(&decoded, "");
    let without_tags = TAG.replace_all(&without_comments, "");
    without_tags.trim().to_string()
}

/// Remove tabs and line breaks (`\n`, `\r\n` and a lone `\r`), leaving every
/// other character in place. Runs of spaces are not collapsed.
pub fn strip_lines(input: &str) -> String {
    input.chars().filter(|ch| !matches!(ch, '\t' | '\n' | '\r')).collect()
}

/// The canonical clean: `strip_tags`, then optional transliteration, then `strip_lines`.
///
/// With `transliterate` off, non-ASCII letters pass through untouched.
pub fn normalize_string(input: &str, transliterate: bool) -> String {
    let fold = transliterate.then(default_transliterator);
    normalize_with(input, fold)
}

pub(crate) fn normalize_with(input: &str, fold: Option<&dyn Transliterate>) -> String {
    let stripped = strip_tags(input);
    trace!("strip_tags: {input:?} -> {stripped:?}");

    let folded = match fold {
        Some(fold) => {
            let folded = fold.transliterate(&stripped);
            trace!("{}: {stripped:?} -> {folded:?}", fold.name());
            folded
        },
        None => stripped,
    };

    strip_lines(&folded)
}

/// Validate raw bytes as UTF-8 before handing them to the string transforms.
///
/// This is the only place bytes enter the crate; malformed input fails here
/// rather than being repaired.
pub fn decode_input(bytes: &[u8]) -> Result<&str, NormalizeError> {
    std::str::from_utf8(bytes).map_err(|source| NormalizeError::Encoding {
        context: "input",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strip_tags_decodes_then_strips() {
        assert_eq!(strip_tags("<b>Hello</b> &amp; World"), "Hello & World");
    }

    #[test]
    fn strip_tags_removes_escaped_markup() {
        assert_eq!(strip_tags("&lt;em&gt;loud&lt;/em&gt;"), "loud");
    }

    #[test]
    fn strip_tags_decodes_named_and_numeric_entities() {
        assert_eq!(strip_tags("&quot;A&quot; &#39;B&#39; &#x43; &eacute;"), "\"A\" 'B' C é");
    }

    #[test]
    fn strip_tags_handles_comments_and_attributes() {
        let html = r#"<div class="x" data-y="1">one<!-- <b>two</b> -->three<br/></div>"#;
        assert_eq!(strip_tags(html), "onethree");
    }

    #[test]
    fn strip_tags_drops_unterminated_trailing_tag() {
        assert_eq!(strip_tags("kept <span class=\"never closed"), "kept");
    }

    #[test]
    fn strip_tags_keeps_comparison_operators() {
        assert_eq!(strip_tags("1 &lt; 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn strip_lines_removes_breaks_and_tabs_only() {
        assert_eq!(strip_lines("a\tb\r\nc\nd\re  f"), "abcde  f");
    }

    #[test]
    fn normalize_without_transliteration_keeps_accents() {
        assert_eq!(normalize_string("<p>Crème\n brûlée</p>", false), "Crème brûlée");
    }

    #[test]
    fn normalize_with_transliteration_folds_accents() {
        assert_eq!(normalize_string("<p>Crème\n brûlée</p>", true), "Creme brulee");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_tags(""), "");
        assert_eq!(strip_lines(""), "");
        assert_eq!(normalize_string("", true), "");
    }

    #[test]
    fn decode_input_rejects_invalid_utf8() {
        assert_eq!(decode_input(b"caf\xc3\xa9").unwrap(), "café");
        let err = decode_input(b"caf\xe9").unwrap_err();
        assert!(matches!(err, NormalizeError::Encoding { context: "input", .. }));
    }
}
