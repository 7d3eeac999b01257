use unicode_normalization::UnicodeNormalization;

/// NFKD decomposition.
///
/// Splits precomposed letters into base + combining marks so the marks can
/// be dropped later, and unfolds compatibility forms (ligatures, fullwidth,
/// superscripts) into their plain parts. Expects already-sanitized text: the
/// transliteration table is keyed on precomposed characters.
pub fn decompose(text: &str) -> String {
    text.nfkd().collect()
}
