//! Substitution tables for the Afterburner magic keys.
//!
//! The magic key repeats or substitutes based on the previous character; the
//! skip-magic key does the same based on the character two positions back.
//! A trigger with no explicit entry falls back to the repeat rule: the key
//! produces the trigger character again.

use fnv::FnvHashMap;
use std::sync::LazyLock;

/// Magic key: previous character -> produced character.
const DIRECT_ENTRIES: &[(char, char)] = &[
    ('a', 'o'),
    ('g', 's'),
    ('h', 'y'),
    ('u', 'e'),
    ('x', 't'),
    ('y', 'h'),
];

/// Skip-magic key: character two back -> produced character.
const SKIP_ENTRIES: &[(char, char)] = &[
    ('a', 'o'),
    ('b', 'n'),
    ('d', 't'),
    ('f', 's'),
    ('g', 's'),
    ('h', 'y'),
    ('j', 'y'),
    ('k', 't'),
    ('l', 'r'),
    ('m', 'k'),
    ('o', 'a'),
    ('p', 'n'),
    ('q', 'e'),
    ('r', 'l'),
    ('u', 'e'),
    ('v', 't'),
    ('x', 't'),
    ('y', 'h'),
    (',', 'i'),
    ('.', 'i'),
    ('-', 'i'),
    ('/', 'a'),
    (';', 'e'),
];

pub static DIRECT_RULES: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::from_entries(DIRECT_ENTRIES));

pub static SKIP_RULES: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::from_entries(SKIP_ENTRIES));

/// An immutable trigger -> output mapping. Keys and values are lowercase.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: FnvHashMap<char, char>,
}

impl RuleTable {
    /// Builds a table from literal entries. Panics on a self-mapping (that is
    /// the repeat rule's job) or a duplicate trigger.
    pub fn from_entries(entries: &[(char, char)]) -> Self {
        let mut rules = FnvHashMap::default();
        for &(trigger, output) in entries {
            assert_ne!(trigger, output, "rule '{}' maps to itself", trigger);
            let previous = rules.insert(fold(trigger), fold(output));
            assert!(previous.is_none(), "duplicate rule for '{}'", trigger);
        }
        Self { rules }
    }

    /// Explicit output for `trigger`, if the table defines one.
    #[inline]
    pub fn output_for(&self, trigger: char) -> Option<char> {
        self.rules.get(&fold(trigger)).copied()
    }

    /// True when pressing the rule's key after `trigger` yields `current`.
    #[inline]
    pub fn matches(&self, trigger: char, current: char) -> bool {
        let trigger = fold(trigger);
        let current = fold(current);
        match self.rules.get(&trigger) {
            Some(&output) => output == current,
            None => trigger == current,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Entries sorted by trigger, for display.
    pub fn entries(&self) -> Vec<(char, char)> {
        let mut entries: Vec<(char, char)> = self.rules.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_unstable();
        entries
    }
}

/// Simple lowercase; non-letters pass through unchanged.
#[inline]
pub fn fold(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Direct rule at `index`, driven by `index - 1`. No suppression.
#[inline]
pub fn direct_rule_matches(chars: &[char], index: usize) -> bool {
    index >= 1 && index < chars.len() && DIRECT_RULES.matches(chars[index - 1], chars[index])
}

/// Skip rule at `index`, driven by `index - 2`. No suppression.
#[inline]
pub fn skip_rule_matches(chars: &[char], index: usize) -> bool {
    index >= 2 && index < chars.len() && SKIP_RULES.matches(chars[index - 2], chars[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(DIRECT_RULES.len(), 6);
        assert_eq!(SKIP_RULES.len(), 23);
    }

    #[test]
    fn no_self_mappings() {
        for (trigger, output) in DIRECT_RULES.entries().into_iter().chain(SKIP_RULES.entries()) {
            assert_ne!(trigger, output);
        }
    }

    #[test]
    fn explicit_rule_blocks_repeat() {
        // 'a' has an entry, so "aa" is not a repeat.
        assert!(!DIRECT_RULES.matches('a', 'a'));
        assert!(DIRECT_RULES.matches('a', 'o'));
        // 'e' has none, so it repeats.
        assert!(DIRECT_RULES.matches('e', 'e'));
        assert!(!DIRECT_RULES.matches('e', 'o'));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(DIRECT_RULES.matches('A', 'O'));
        assert!(SKIP_RULES.matches('Q', 'e'));
        assert!(SKIP_RULES.matches('s', 'S'));
    }

    #[test]
    fn punctuation_triggers() {
        assert!(SKIP_RULES.matches(',', 'i'));
        assert!(SKIP_RULES.matches('/', 'A'));
        assert!(!DIRECT_RULES.matches(',', 'i'));
    }

    #[test]
    #[should_panic(expected = "maps to itself")]
    fn self_mapping_panics() {
        RuleTable::from_entries(&[('z', 'z')]);
    }

    #[test]
    fn raw_predicates_respect_bounds() {
        let chars: Vec<char> = "ao".chars().collect();
        assert!(!direct_rule_matches(&chars, 0));
        assert!(direct_rule_matches(&chars, 1));
        assert!(!direct_rule_matches(&chars, 2));
        assert!(!skip_rule_matches(&chars, 1));
    }
}
