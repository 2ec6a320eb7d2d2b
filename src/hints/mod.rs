pub mod engine;
pub mod overrides;
pub mod policy;
pub mod rules;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub use self::engine::{classify, classify_line, classify_with};
pub use self::overrides::{parse_override_pattern, OverrideSlot, OverrideStore};

/// What the trainer should show for a single character.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    /// Typed with the character's own key.
    #[default]
    None,
    /// Typed with the magic key, driven by the previous character.
    Magic,
    /// Typed with the skip-magic key, driven by the character two back.
    SkipMagic,
}

/// Separators that end a word. Context rules never look across a line, so
/// these are the only ones the classifier sees in practice.
#[inline]
pub fn is_word_boundary(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
