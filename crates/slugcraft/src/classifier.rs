use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Groups of Unicode general categories the transform engine reacts to.
///
/// The groups are not mutually exclusive (modifier letters are both `Safe`
/// and `Skip`), so callers test them in a fixed order rather than asking
/// which single group a character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    /// Letters and numbers: kept, case-folded.
    Safe,
    /// Marks, modifier symbols and modifier letters: dropped.
    Skip,
    /// Dash punctuation (`Pd`).
    Dash,
    /// White space, including tabs and line breaks.
    Space,
}

impl CategoryGroup {
    /// Groups in the order they are tested by [`CategoryGroup::of`].
    pub const ALL: [CategoryGroup; 4] = [Self::Safe, Self::Space, Self::Dash, Self::Skip];

    #[inline]
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Safe => matches!(
                c.general_category_group(),
                GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
            ),
            Self::Skip => {
                c.general_category_group() == GeneralCategoryGroup::Mark
                    || matches!(
                        c.general_category(),
                        GeneralCategory::ModifierSymbol | GeneralCategory::ModifierLetter
                    )
            }
            Self::Dash => c.general_category() == GeneralCategory::DashPunctuation,
            Self::Space => c.is_whitespace(),
        }
    }

    /// First group containing `c`, or `None` for punctuation, symbols and
    /// control characters outside every group.
    pub fn of(c: char) -> Option<CategoryGroup> {
        Self::ALL.into_iter().find(|group| group.contains(c))
    }
}
