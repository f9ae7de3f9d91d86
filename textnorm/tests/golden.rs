use pretty_assertions::assert_eq;
use textnorm::{Normalizer, NormalizerConfig, Strategy, TableFold, Transliterate};

/// Western-European inputs both strategies must fold identically.
const TRANSLITERATE_GOLDEN: &[(&str, &str)] = &[
    ("café naïve", "cafe naive"),
    ("Crème brûlée", "Creme brulee"),
    ("Ça va, señor? Ñandú", "Ca va, senor? Nandu"),
    ("São Paulo", "Sao Paulo"),
    ("Zoë Ångström", "Zoe Angstrom"),
    ("Őrség és Űrhajó", "Orseg es Urhajo"),
    ("ÉCOLE ÎLE ÔTER ÙNE", "ECOLE ILE OTER UNE"),
    ("1ª 2º", "1a 2o"),
    ("Ÿvette ýes", "Yvette yes"),
    ("pages 10–20 — done", "pages 10-20 - done"),
    ("“Hello” ‘there’", " Hello   there "),
    ("«Bonjour» ‹salut›", " Bonjour   salut "),
    ("„Guten Tag“ ‚hallo‘", " Guten Tag   hallo "),
    ("no\u{a0}break", "no break"),
    ("plain ASCII stays", "plain ASCII stays"),
    ("Йошкар-Ола", "Йошкар-Ола"),
    ("हिन्दी", "हिन्दी"),
    ("Ёлка и café", "Ёлка и cafe"),
    ("", ""),
];

const SLUG_GOLDEN: &[(&str, &str)] = &[
    ("Héllo, World!!  Foo_Bar", "hello-world-foo-bar"),
    ("<h2>Crème &amp; Brûlée</h2>", "creme-brulee"),
    ("“Smart” quotes – and dashes", "smart-quotes-and-dashes"),
    ("  already-a-slug  ", "already-a-slug"),
    ("C:\\Program Files\\App", "c-program-files-app"),
    ("a|b+c d", "a-b-c-d"),
    ("", ""),
];

const PATH_GOLDEN: &[(&str, &str)] = &[
    ("/Some Café/Path?x=1&y=2", "some-cafe/path?x=1&y=2"),
    ("/blog/2024/Été à Paris/", "blog/2024/ete-a-paris"),
    ("/files/My%20R%C3%A9sum%C3%A9.PDF", "files/my-resume.pdf"),
    ("http://example.com/a_b/C+D", "http://example.com/a-b/c-d"),
    ("\\Windows\\System Folder\\", "windows/system-folder"),
    ("/<b>Bold</b> Move", "bold-move"),
    ("", ""),
];

fn strategies() -> Vec<Normalizer> {
    let mut out = vec![
        Normalizer::new(NormalizerConfig {
            strategy: Strategy::Table,
            ..NormalizerConfig::default()
        })
        .expect("table strategy"),
    ];
    if cfg!(feature = "unicode") {
        out.push(
            Normalizer::new(NormalizerConfig {
                strategy: Strategy::Unicode,
                ..NormalizerConfig::default()
            })
            .expect("unicode strategy"),
        );
    }
    out
}

#[test]
fn transliterate_golden_for_every_strategy() {
    for normalizer in strategies() {
        for (input, expected) in TRANSLITERATE_GOLDEN {
            assert_eq!(
                normalizer.transliterate(input),
                *expected,
                "strategy {} on {input:?}",
                normalizer.strategy_name()
            );
        }
    }
}

#[test]
fn slug_golden_for_every_strategy() {
    for normalizer in strategies() {
        for (input, expected) in SLUG_GOLDEN {
            assert_eq!(
                normalizer.slugify(input),
                *expected,
                "strategy {} on {input:?}",
                normalizer.strategy_name()
            );
        }
    }
}

#[test]
fn path_golden_for_every_strategy() {
    for normalizer in strategies() {
        for (input, expected) in PATH_GOLDEN {
            assert_eq!(
                normalizer.slugify_path(input).expect("valid path"),
                *expected,
                "strategy {} on {input:?}",
                normalizer.strategy_name()
            );
        }
    }
}

#[test]
fn free_functions_follow_the_default_strategy() {
    for (input, expected) in TRANSLITERATE_GOLDEN {
        assert_eq!(textnorm::transliterate(input), *expected);
    }
    assert_eq!(textnorm::default_transliterator().transliterate("naïve"), "naive");
    assert_eq!(TableFold.transliterate("naïve"), "naive");
}

#[test]
fn decomposed_input_folds_only_with_unicode_but_slugs_agree() {
    let decomposed = "cafe\u{301} na\u{0308}ive";
    assert_eq!(TableFold.transliterate(decomposed), decomposed);
    if cfg!(feature = "unicode") {
        assert_eq!(textnorm::transliterate(decomposed), "cafe naive");
    }
    for normalizer in strategies() {
        assert_eq!(normalizer.slugify(decomposed), "cafe-naive", "strategy {}", normalizer.strategy_name());
    }
}

#[test]
fn documented_examples() {
    assert_eq!(textnorm::strip_tags("<b>Hello</b> &amp; World"), "Hello & World");
    assert_eq!(textnorm::transliterate("café naïve"), "cafe naive");
    assert_eq!(textnorm::slugify_string("Héllo, World!!  Foo_Bar", "-"), "hello-world-foo-bar");
    assert_eq!(
        textnorm::slugify_path("/Some Café/Path?x=1&y=2", "-").unwrap(),
        "some-cafe/path?x=1&y=2"
    );
}

#[test]
fn empty_input_everywhere() {
    assert_eq!(textnorm::strip_tags(""), "");
    assert_eq!(textnorm::strip_lines(""), "");
    assert_eq!(textnorm::transliterate(""), "");
    assert_eq!(textnorm::normalize_string("", false), "");
    assert_eq!(textnorm::normalize_string("", true), "");
    assert_eq!(textnorm::slugify_string("", "-"), "");
    assert_eq!(textnorm::slugify_path("", "-").unwrap(), "");
    assert_eq!(textnorm::normalize_path("").unwrap(), "");
}

#[test]
fn normalize_without_transliteration_keeps_non_ascii() {
    let out = textnorm::normalize_string("<em>Ångström</em> \r\n\tnaïve “quote”", false);
    assert_eq!(out, "Ångström naïve “quote”");
}

#[test]
fn lib_version_is_set() {
    assert!(!textnorm::TEXTNORM_VERSION.is_empty());
}
