//! slugcraft — turn arbitrary text into URL slugs and strict identifiers.
//!
//! Pure Rust library providing:
//! - Transliteration of common European Latin characters to ASCII
//! - NFKD decomposition to strip accents the table does not cover
//! - Unicode general-category classification of every character
//! - Two output alphabets: slugs (`- _ ~ .`) and identifiers (`- _`)

pub mod classifier;
pub mod cleanup;
pub mod error;
pub mod normalizer;
pub mod transform;
pub mod transliteration;
pub mod types;

// Re-export main types at crate root for convenience
pub use classifier::CategoryGroup;
pub use cleanup::cleanup;
pub use error::{Error, Result};
pub use normalizer::decompose;
pub use transform::{classify, idify, slugify, transform};
pub use transliteration::{sanitize_text, transliterate};
pub use types::{Action, Variant};
