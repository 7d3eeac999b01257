use log::trace;

use crate::classifier::CategoryGroup;
use crate::cleanup::cleanup;
use crate::normalizer::decompose;
use crate::transliteration::sanitize_text;
use crate::types::{Action, Variant};

/// Decide what happens to a single decomposed character. First match wins:
/// letters and numbers, the variant's literal extras, white space, dash
/// punctuation, the variant's literal dash set. Everything else is dropped.
pub fn classify(variant: Variant, c: char) -> Action {
    if CategoryGroup::Safe.contains(c) {
        Action::Lowercase
    } else if variant.allowed_extra().contains(&c) {
        Action::Keep
    } else if CategoryGroup::Space.contains(c)
        || CategoryGroup::Dash.contains(c)
        || variant.to_dash().contains(&c)
    {
        Action::Dash
    } else {
        Action::Drop
    }
}

/// Run the full pipeline: sanitize, decompose, classify, clean up.
pub fn transform(text: &str, variant: Variant) -> String {
    let decomposed = decompose(&sanitize_text(text));
    let mut buf = String::with_capacity(decomposed.len());

    for c in decomposed.chars() {
        match classify(variant, c) {
            Action::Lowercase => buf.extend(c.to_lowercase()),
            Action::Keep => buf.push(c),
            Action::Dash => buf.push('-'),
            Action::Drop => trace!("{variant}: dropping {c:?}"),
        }
    }

    let result = cleanup(&buf);
    trace!("{variant}: {text:?} -> {result:?}");
    result
}

/// Slugify a string.
///
/// The result only holds lowercase letters, digits, `-`, `_`, `~` and `.`.
/// It never starts or ends with a dash and never contains two dashes in a
/// row. It is not forced into ASCII: letters outside the transliteration
/// table that have no decomposition come through unchanged.
pub fn slugify(text: &str) -> String {
    transform(text, Variant::Slug)
}

/// Like [`slugify`], but `.` and `~` become dashes as well.
pub fn idify(text: &str) -> String {
    transform(text, Variant::Id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("a   b"), "a-b");
    }

    #[test]
    fn test_accents() {
        assert_eq!(slugify("Café au Lait"), "cafe-au-lait");
        assert_eq!(slugify("Ångström"), "aangstrom");
        assert_eq!(slugify("Łódź"), "lodz");
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Þór"), "thor");
        assert_eq!(slugify("Œuvre"), "oeuvre");
    }

    #[test]
    fn test_em_dash() {
        assert_eq!(slugify("Æther—Øyvind"), "aether-oeyvind");
        assert_eq!(slugify("pages 1–9"), "pages-1-9");
    }

    #[test]
    fn test_empty_and_dashes() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(" - / - "), "");
        assert_eq!(idify(""), "");
        assert_eq!(idify("..~.."), "");
    }

    #[test]
    fn test_slug_keeps_extras() {
        assert_eq!(slugify("~user/file.txt"), "~user-file.txt");
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("v1.2.3"), "v1.2.3");
        assert_eq!(slugify(r"dir\sub"), "dir-sub");
    }

    #[test]
    fn test_idify() {
        assert_eq!(idify("foo/bar.baz"), "foo-bar-baz");
        assert_eq!(idify("~user/file.txt"), "user-file-txt");
        assert_eq!(idify("snake_case"), "snake_case");
        assert_eq!(idify("v1.2.3"), "v1-2-3");
        assert_eq!(idify("Café au Lait"), "cafe-au-lait");
    }

    #[test]
    fn test_symbols_dropped() {
        assert_eq!(slugify("C++ & C#"), "c-c");
        assert_eq!(slugify("don't"), "dont");
        assert_eq!(slugify("a^b`c"), "abc");
        assert_eq!(slugify("5 \u{2212} 3"), "5-3");
        assert_eq!(slugify("½"), "12");
    }

    #[test]
    fn test_control_chars_dropped_not_dashed() {
        assert_eq!(slugify("a\0b"), "ab");
        assert_eq!(slugify("a\u{200b}b"), "ab");
        assert_eq!(slugify("a\u{7f}b"), "ab");
        assert_eq!(idify("a\u{feff}b"), "ab");
    }

    #[test]
    fn test_whitespace_kinds() {
        assert_eq!(slugify("a\tb\nc"), "a-b-c");
        assert_eq!(slugify("a\u{a0}b"), "a-b");
        assert_eq!(slugify("a\u{3000}b"), "a-b");
    }

    #[test]
    fn test_compatibility_forms() {
        assert_eq!(slugify("\u{fb01}le"), "file");
        assert_eq!(slugify("\u{ff21}\u{ff22}\u{ff23}"), "abc");
        assert_eq!(slugify("x²"), "x2");
        // Black-letter capital H decomposes to an uppercase H
        assert_eq!(slugify("\u{210c}i"), "hi");
    }

    #[test]
    fn test_non_latin_survives() {
        assert_eq!(slugify("日本語 テキスト"), "日本語-テキスト");
        assert_eq!(slugify("Σίσυφος"), "σισυφος");
        assert_eq!(slugify("İstanbul"), "istanbul");
    }

    #[test]
    fn test_case_insensitive() {
        for s in ["école", "Æther", "straße", "Hello World"] {
            assert_eq!(slugify(s), slugify(&s.to_uppercase()), "mismatch for {s:?}");
        }
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(classify(Variant::Slug, 'A'), Action::Lowercase);
        assert_eq!(classify(Variant::Slug, '-'), Action::Keep);
        assert_eq!(classify(Variant::Id, '-'), Action::Keep);
        assert_eq!(classify(Variant::Slug, '.'), Action::Keep);
        assert_eq!(classify(Variant::Id, '.'), Action::Dash);
        assert_eq!(classify(Variant::Slug, '~'), Action::Keep);
        assert_eq!(classify(Variant::Id, '~'), Action::Dash);
        assert_eq!(classify(Variant::Slug, ' '), Action::Dash);
        assert_eq!(classify(Variant::Slug, '\u{2010}'), Action::Dash);
        assert_eq!(classify(Variant::Slug, '/'), Action::Dash);
        assert_eq!(classify(Variant::Slug, '\u{301}'), Action::Drop);
        assert_eq!(classify(Variant::Slug, '!'), Action::Drop);
        assert_eq!(classify(Variant::Id, '\\'), Action::Dash);
    }
}
