use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KnownLayout {
    #[default]
    Qwerty,
    Colemak,
    ColemakDH,
    Dvorak,
    Workman,
    Canary,
    Graphite,
    Afterburner,
}

impl KnownLayout {
    /// Whether the layout has magic / skip-magic keys, i.e. whether hints apply.
    pub fn has_magic_keys(&self) -> bool {
        matches!(self, Self::Afterburner)
    }
}
