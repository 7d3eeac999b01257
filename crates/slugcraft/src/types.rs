use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which output alphabet a transform targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// URL slug: letters, digits, `-`, `_`, `~` and `.`.
    #[default]
    Slug,
    /// Identifier: letters, digits, `-` and `_` only.
    Id,
}

impl Variant {
    /// Characters copied to the output unchanged.
    pub const fn allowed_extra(self) -> &'static [char] {
        match self {
            Self::Slug => &['-', '_', '~', '.'],
            Self::Id => &['-', '_'],
        }
    }

    /// Characters replaced by `-` on top of white space and dash punctuation.
    pub const fn to_dash(self) -> &'static [char] {
        match self {
            Self::Slug => &['/', '\\', '\u{2014}', '\u{2013}'],
            Self::Id => &['/', '\\', '\u{2014}', '\u{2013}', '.', '~'],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slug" => Ok(Self::Slug),
            "id" | "identifier" => Ok(Self::Id),
            _ => Err(Error::UnknownVariant(s.to_owned())),
        }
    }
}

/// What the transform engine does with one decomposed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// Emit the lowercase form.
    Lowercase,
    /// Emit the character as is.
    Keep,
    /// Emit `-`.
    Dash,
    /// Emit nothing.
    Drop,
}
