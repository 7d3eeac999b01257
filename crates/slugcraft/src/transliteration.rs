use std::collections::HashMap;
use std::sync::LazyLock;

/// Replacement text for common European Latin characters.
///
/// Deliberately small: it only catches the accented names that show up in
/// URLs most often. Anything not listed here is left for NFKD decomposition
/// to strip, or survives untouched.
static TRANSLITERATIONS: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    [
        ('À', "A"),
        ('Á', "A"),
        ('Â', "A"),
        ('Ã', "A"),
        ('Ä', "A"),
        ('Å', "AA"),
        ('Æ', "AE"),
        ('Ç', "C"),
        ('È', "E"),
        ('É', "E"),
        ('Ê', "E"),
        ('Ë', "E"),
        ('Ì', "I"),
        ('Í', "I"),
        ('Î', "I"),
        ('Ï', "I"),
        ('Ð', "D"),
        ('Ł', "L"),
        ('Ñ', "N"),
        ('Ò', "O"),
        ('Ó', "O"),
        ('Ô', "O"),
        ('Õ', "O"),
        ('Ö', "O"),
        ('Ø', "OE"),
        ('Ù', "U"),
        ('Ú', "U"),
        ('Ü', "U"),
        ('Û', "U"),
        ('Ý', "Y"),
        ('Þ', "Th"),
        ('ß', "ss"),
        ('à', "a"),
        ('á', "a"),
        ('â', "a"),
        ('ã', "a"),
        ('ä', "a"),
        ('å', "aa"),
        ('æ', "ae"),
        ('ç', "c"),
        ('è', "e"),
        ('é', "e"),
        ('ê', "e"),
        ('ë', "e"),
        ('ì', "i"),
        ('í', "i"),
        ('î', "i"),
        ('ï', "i"),
        ('ð', "d"),
        ('ł', "l"),
        ('ñ', "n"),
        ('ń', "n"),
        ('ò', "o"),
        ('ó', "o"),
        ('ô', "o"),
        ('õ', "o"),
        ('ō', "o"),
        ('ö', "o"),
        ('ø', "oe"),
        ('ś', "s"),
        ('ù', "u"),
        ('ú', "u"),
        ('û', "u"),
        ('ū', "u"),
        ('ü', "u"),
        ('ý', "y"),
        ('þ', "th"),
        ('ÿ', "y"),
        ('ż', "z"),
        ('Œ', "OE"),
        ('œ', "oe"),
    ]
    .into_iter()
    .collect()
});

/// Look up the ASCII replacement for a single character, if it has one.
#[inline]
pub fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATIONS.get(&c).copied()
}

/// Lowercase the text, then swap every listed character for its replacement.
///
/// Lowercasing happens first, so the uppercase table entries are only
/// reachable through [`transliterate`].
pub fn sanitize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars().flat_map(char::to_lowercase) {
        match transliterate(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }

    result
}
