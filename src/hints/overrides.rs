//! Curated per-word exceptions.
//!
//! A pattern has one character per letter of its word: `#` forces a magic
//! hint, `$` forces a skip-magic hint, anything else forces no hint.

use super::rules::fold;
use super::{is_word_boundary, Hint};
use crate::error::{AfterburnerError, HintResult};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("queue", "qu$u$"),
    ("queued", "qu$u$d"),
    ("queues", "qu$u$s"),
    ("queueing", "qu$u$ing"),
];

static BUILTIN: LazyLock<OverrideStore> = LazyLock::new(|| {
    OverrideStore::from_entries(BUILTIN_ENTRIES.iter().map(|&(w, p)| OverrideEntry::new(w, p)))
        .unwrap_or_else(|e| panic!("built-in override table is invalid: {}", e))
});

/// One position of a word override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideSlot {
    /// Use this hint, whatever the rules say.
    Forced(Hint),
    /// Let the rules decide. The pattern syntax has no way to write this yet.
    PassThrough,
}

impl OverrideSlot {
    #[inline]
    pub fn forced(self) -> Option<Hint> {
        match self {
            Self::Forced(hint) => Some(hint),
            Self::PassThrough => None,
        }
    }
}

/// Parses a pattern into slots. Total: every character yields a forced slot.
pub fn parse_override_pattern(pattern: &str) -> Vec<OverrideSlot> {
    pattern
        .chars()
        .map(|c| match c {
            '#' => OverrideSlot::Forced(Hint::Magic),
            '$' => OverrideSlot::Forced(Hint::SkipMagic),
            _ => OverrideSlot::Forced(Hint::None),
        })
        .collect()
}

/// On-disk form of a single curated entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub word: String,
    pub pattern: String,
}

impl OverrideEntry {
    pub fn new(word: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pattern: pattern.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct ParsedOverride {
    pattern: String,
    slots: Vec<OverrideSlot>,
}

/// Immutable lowercase word -> slots table.
#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    words: FnvHashMap<String, ParsedOverride>,
    // Longest word in chars; longer words cannot match.
    longest: usize,
}

impl OverrideStore {
    /// The curated table shipped with the crate, built on first use.
    pub fn builtin() -> &'static OverrideStore {
        &BUILTIN
    }

    pub fn from_entries<I>(entries: I) -> HintResult<Self>
    where
        I: IntoIterator<Item = OverrideEntry>,
    {
        let mut store = Self::default();

        for entry in entries {
            let word = lowercase(&entry.word);
            let expected = word.chars().count();
            let actual = entry.pattern.chars().count();
            if expected != actual {
                return Err(AfterburnerError::PatternLength {
                    word,
                    expected,
                    actual,
                });
            }
            if store.words.contains_key(&word) {
                return Err(AfterburnerError::DuplicateWord(word));
            }

            store.longest = store.longest.max(expected);
            let slots = parse_override_pattern(&entry.pattern);
            store.words.insert(
                word,
                ParsedOverride {
                    pattern: entry.pattern,
                    slots,
                },
            );
        }

        debug!("Override store built with {} words", store.words.len());
        Ok(store)
    }

    /// Reads a JSON array of `{ "word", "pattern" }` objects.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HintResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let entries: Vec<OverrideEntry> = serde_json::from_str(&content)?;
        let store = Self::from_entries(entries)?;
        info!("Loaded {} word overrides from {}", store.len(), path.display());
        Ok(store)
    }

    /// Slots for `word`, looked up case-insensitively.
    pub fn override_for(&self, word: &str) -> Option<&[OverrideSlot]> {
        self.words.get(&lowercase(word)).map(|o| o.slots.as_slice())
    }

    /// The override slot covering `chars[index]`, if its word is curated.
    pub fn slot_at(&self, chars: &[char], index: usize) -> Option<OverrideSlot> {
        if index >= chars.len() {
            return None;
        }
        let span = word_within(chars, index, self.longest)?;

        let offset = index - span.start;
        let word: String = chars[span].iter().map(|&c| fold(c)).collect();
        self.words
            .get(&word)
            .and_then(|o| o.slots.get(offset).copied())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All entries sorted by word, with their source patterns.
    pub fn entries(&self) -> Vec<OverrideEntry> {
        let mut out: Vec<OverrideEntry> = self
            .words
            .iter()
            .map(|(w, o)| OverrideEntry::new(w.clone(), o.pattern.clone()))
            .collect();
        out.sort_by(|a, b| a.word.cmp(&b.word));
        out
    }
}

/// Range of the whitespace-delimited word containing `index`.
///
/// Empty when `index` is out of range or sits on a separator.
pub fn word_at(chars: &[char], index: usize) -> Range<usize> {
    if index >= chars.len() || is_word_boundary(chars[index]) {
        return index..index;
    }

    let mut start = index;
    while start > 0 && !is_word_boundary(chars[start - 1]) {
        start -= 1;
    }
    let mut end = index + 1;
    while end < chars.len() && !is_word_boundary(chars[end]) {
        end += 1;
    }
    start..end
}

/// Like [`word_at`], but gives up once the word exceeds `max_len` chars.
fn word_within(chars: &[char], index: usize, max_len: usize) -> Option<Range<usize>> {
    if is_word_boundary(chars[index]) || max_len == 0 {
        return None;
    }

    let mut start = index;
    while start > 0 && !is_word_boundary(chars[start - 1]) {
        start -= 1;
        if index - start >= max_len {
            return None;
        }
    }
    let mut end = index + 1;
    while end < chars.len() && !is_word_boundary(chars[end]) {
        end += 1;
        if end - start > max_len {
            return None;
        }
    }
    (end - start <= max_len).then_some(start..end)
}

fn lowercase(word: &str) -> String {
    word.chars().map(fold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn builtin_table_is_valid() {
        let store = OverrideStore::builtin();
        assert!(!store.is_empty());
        for entry in store.entries() {
            assert_eq!(entry.word.chars().count(), entry.pattern.chars().count());
        }
    }

    #[test]
    fn queue_pattern() {
        assert_eq!(
            parse_override_pattern("qu$u$"),
            vec![
                OverrideSlot::Forced(Hint::None),
                OverrideSlot::Forced(Hint::None),
                OverrideSlot::Forced(Hint::SkipMagic),
                OverrideSlot::Forced(Hint::None),
                OverrideSlot::Forced(Hint::SkipMagic),
            ]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = OverrideStore::builtin();
        assert!(store.override_for("QUEUE").is_some());
        assert!(store.override_for("Queue").is_some());
        assert!(store.override_for("cue").is_none());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = OverrideStore::from_entries([OverrideEntry::new("queue", "qu$")]).unwrap_err();
        match err {
            AfterburnerError::PatternLength {
                word,
                expected,
                actual,
            } => {
                assert_eq!(word, "queue");
                assert_eq!(expected, 5);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_after_lowercasing_is_rejected() {
        let err = OverrideStore::from_entries([
            OverrideEntry::new("Queue", "qu$u$"),
            OverrideEntry::new("queue", "queue"),
        ])
        .unwrap_err();
        assert!(matches!(err, AfterburnerError::DuplicateWord(w) if w == "queue"));
    }

    #[test]
    fn word_at_scans_to_whitespace() {
        let line = chars("the queue\tis long");
        assert_eq!(word_at(&line, 0), 0..3);
        assert_eq!(word_at(&line, 6), 4..9);
        assert_eq!(word_at(&line, 3), 3..3);
        assert_eq!(word_at(&line, 10), 10..12);
        assert_eq!(word_at(&line, 99), 99..99);
    }

    #[test]
    fn punctuation_stays_in_word() {
        let line = chars("queue, please");
        assert_eq!(word_at(&line, 2), 0..6);
        assert_eq!(OverrideStore::builtin().slot_at(&line, 2), None);
    }

    #[test]
    fn long_words_are_rejected_early() {
        let line: Vec<char> = "queueing".chars().chain("x".repeat(100).chars()).collect();
        assert_eq!(word_within(&line, 2, 8), None);
        assert_eq!(word_within(&line, 2, 108), Some(0..108));
        assert_eq!(word_within(&chars("queue it"), 5, 8), None);
    }

    #[test]
    fn slot_at_uses_offset_within_word() {
        let line = chars("a QUEUE");
        let store = OverrideStore::builtin();
        assert_eq!(store.slot_at(&line, 0), None);
        assert_eq!(store.slot_at(&line, 4), Some(OverrideSlot::Forced(Hint::SkipMagic)));
        assert_eq!(store.slot_at(&line, 5), Some(OverrideSlot::Forced(Hint::None)));
    }
}
