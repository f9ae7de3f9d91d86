//! Preferred fold built on Unicode normalization.

use any_ascii::any_ascii_char;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::{DASHES, DOUBLE_QUOTES, NO_BREAK_SPACE, SINGLE_QUOTES, Transliterate};

/// NFD, drop combining marks on Latin bases, NFC, then map remaining Latin letters to ASCII.
///
/// Only Latin letters are romanized or lose their marks; other scripts pass
/// through unchanged (`Й` stays `Й`, Devanagari keeps its vowel signs), so the
/// output stays in the same class as [`super::TableFold`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeFold;

impl Transliterate for UnicodeFold {
    fn transliterate(&self, input: &str) -> String {
        let punctuated: String = input.chars().map(fold_punctuation).collect();
        let mut latin_base = false;
        let stripped: String = punctuated
            .nfd()
            .filter(|&ch| {
                if is_combining_mark(ch) {
                    return !latin_base;
                }
                latin_base = ch.is_ascii() || is_foldable_latin(ch);
                true
            })
            .nfc()
            .collect();

        let mut out = String::with_capacity(stripped.len());
        for ch in stripped.chars() {
            if is_foldable_latin(ch) {
                out.push_str(any_ascii_char(ch));
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

fn fold_punctuation(ch: char) -> char {
    if SINGLE_QUOTES.contains(ch) || DOUBLE_QUOTES.contains(ch) || ch == NO_BREAK_SPACE {
        ' '
    } else if DASHES.contains(ch) {
        '-'
    } else {
        ch
    }
}

/// Non-ASCII letters from the Latin blocks, plus the ordinal indicators `ª` and `º`.
fn is_foldable_latin(ch: char) -> bool {
    matches!(ch,
        '\u{00AA}' | '\u{00BA}'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{024F}'
        | '\u{1E00}'..='\u{1EFF}'
        | '\u{2C60}'..='\u{2C7F}'
        | '\u{A720}'..='\u{A7FF}'
        | '\u{FB00}'..='\u{FB06}'
    )
}
