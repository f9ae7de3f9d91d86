//! Fallback fold: an ordered regex substitution table.

use lazy_static::lazy_static;
use regex::Regex;

use super::{DASHES, DOUBLE_QUOTES, NO_BREAK_SPACE, SINGLE_QUOTES, Transliterate};

/// Character classes and their ASCII replacement, applied top to bottom.
const CLASSES: &[(&str, &str)] = &[
    ("áàâãªäå", "a"),
    ("ÁÀÂÃÄÅ", "A"),
    ("ÍÌÎÏ", "I"),
    ("íìîï", "i"),
    ("éèêë", "e"),
    ("ÉÈÊË", "E"),
    ("óòôõºöő", "o"),
    ("ÓÒÔÕÖŐ", "O"),
    ("úùûüű", "u"),
    ("ÚÙÛÜŰ", "U"),
    ("ýÿ", "y"),
    ("ÝŸ", "Y"),
    ("ç", "c"),
    ("Ç", "C"),
    ("ñ", "n"),
    ("Ñ", "N"),
    (DASHES, "-"),
    (SINGLE_QUOTES, " "),
    (DOUBLE_QUOTES, " "),
];

lazy_static! {
    static ref RULES: Vec<(Regex, &'static str)> = {
        let mut rules: Vec<(Regex, &'static str)> = CLASSES
            .iter()
            .map(|(class, replacement)| (class_regex(class), *replacement))
            .collect();
        rules.push((class_regex(&NO_BREAK_SPACE.to_string()), " "));
        rules
    };
}

fn class_regex(chars: &str) -> Regex {
    let escaped: String = chars.chars().map(|ch| regex::escape(&ch.to_string())).collect();
    Regex::new(&format!("[{escaped}]")).expect("substitution class is valid")
}

/// Table-driven fold for builds without Unicode normalization support.
///
/// Covers the common Western-European accents, `ç`/`ñ`, dashes and smart quotes.
/// Letters outside the table (and decomposed combining sequences) pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFold;

impl Transliterate for TableFold {
    fn transliterate(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (pattern, replacement) in RULES.iter() {
            if pattern.is_match(&out) {
                out = pattern.replace_all(&out, *replacement).into_owned();
            }
        }
        out
    }

    fn name(&self) -> &'static str {
        "table"
    }
}
