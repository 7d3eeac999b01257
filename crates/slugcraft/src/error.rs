use thiserror::Error;

/// Errors produced when resolving a transform variant by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown variant `{0}` (expected `slug` or `id`)")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
