use wasm_bindgen::prelude::*;

/// Slugify text: lowercase letters, digits, `-`, `_`, `~` and `.`.
#[wasm_bindgen]
pub fn slugify(text: &str) -> String {
    slugcraft::slugify(text)
}

/// Identifier form: lowercase letters, digits, `-` and `_`.
#[wasm_bindgen]
pub fn idify(text: &str) -> String {
    slugcraft::idify(text)
}

/// Lowercase and transliterate, without classification or cleanup.
#[wasm_bindgen(js_name = sanitizeText)]
pub fn sanitize_text(text: &str) -> String {
    slugcraft::sanitize_text(text)
}

/// Trim edge dashes and collapse dash runs.
#[wasm_bindgen]
pub fn cleanup(text: &str) -> String {
    slugcraft::cleanup(text)
}

/// Transform text with a variant named "slug" or "id".
#[wasm_bindgen]
pub fn transform(text: &str, variant: &str) -> Result<String, JsError> {
    let variant: slugcraft::Variant = variant
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid variant: {}", e)))?;
    Ok(slugcraft::transform(text, variant))
}
