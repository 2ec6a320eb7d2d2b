use super::overrides::OverrideStore;
use super::policy::{would_use_magic, would_use_skip_magic, Nesting};
use super::Hint;
use crate::config::HintOptions;

/// Classifies `chars[index]` against the built-in override table.
///
/// Total: out-of-range indices and empty lines yield [`Hint::None`].
#[inline]
pub fn classify(chars: &[char], index: usize, opts: &HintOptions) -> Hint {
    classify_with(OverrideStore::builtin(), chars, index, opts)
}

/// Classifies `chars[index]` against a caller-supplied override table.
///
/// Priority: word override, then skip-magic, then magic. A forced override
/// slot wins outright and skips suppression entirely.
pub fn classify_with(
    store: &OverrideStore,
    chars: &[char],
    index: usize,
    opts: &HintOptions,
) -> Hint {
    if index >= chars.len() {
        return Hint::None;
    }

    if opts.use_word_overrides {
        if let Some(hint) = store.slot_at(chars, index).and_then(|s| s.forced()) {
            return hint;
        }
    }

    if would_use_skip_magic(chars, index, opts, Nesting::Top) {
        return Hint::SkipMagic;
    }
    if would_use_magic(chars, index, opts) {
        return Hint::Magic;
    }
    Hint::None
}

/// One hint per character of `chars`.
pub fn classify_line(store: &OverrideStore, chars: &[char], opts: &HintOptions) -> Vec<Hint> {
    (0..chars.len())
        .map(|i| classify_with(store, chars, i, opts))
        .collect()
}
