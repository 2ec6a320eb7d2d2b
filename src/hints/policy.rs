//! Suppression heuristics.
//!
//! A hint is only useful if it does not mislead. Each check below asks whether
//! a neighbouring position "would use" a magic key, which means re-running
//! rule matching there with suppression applied, but never full classification
//! (word overrides are not consulted).
//!
//! Recursion is bounded by [`Nesting`]: the skip-after-skip check descends one
//! level with itself disabled, and nothing else descends at all.

use super::is_word_boundary;
use super::rules::{direct_rule_matches, skip_rule_matches};
use crate::config::HintOptions;

/// Whether a skip-magic evaluation may look at its left neighbour's skip-magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// Outermost evaluation; the skip-after-skip check may recurse once.
    Top,
    /// Already one level down; the skip-after-skip check is off.
    Nested,
}

/// Skip-magic rule at `index`, minus suppression.
pub fn would_use_skip_magic(
    chars: &[char],
    index: usize,
    opts: &HintOptions,
    nesting: Nesting,
) -> bool {
    #[cfg(test)]
    probe::enter();

    if !skip_rule_matches(chars, index) {
        return false;
    }
    !skip_magic_suppressed(chars, index, opts, nesting)
}

/// Magic rule at `index`, minus suppression.
pub fn would_use_magic(chars: &[char], index: usize, opts: &HintOptions) -> bool {
    if !direct_rule_matches(chars, index) {
        return false;
    }
    !(opts.suppress_magic_after_skip_magic
        && would_use_skip_magic(chars, index - 1, opts, Nesting::Top))
}

// Caller guarantees index >= 2.
fn skip_magic_suppressed(
    chars: &[char],
    index: usize,
    opts: &HintOptions,
    nesting: Nesting,
) -> bool {
    // The key two back was already pressed as magic, so there is no
    // same-finger repeat for skip-magic to avoid.
    if opts.suppress_skip_magic_after_magic && direct_rule_matches(chars, index - 2) {
        return true;
    }

    if opts.suppress_skip_magic_after_skip_magic
        && nesting == Nesting::Top
        && would_use_skip_magic(chars, index - 1, opts, Nesting::Nested)
    {
        return true;
    }

    opts.suppress_skip_magic_after_space && is_word_boundary(chars[index - 1])
}
