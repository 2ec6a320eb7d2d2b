use crate::config::HintOptions;
use crate::hints::{classify_line, Hint, OverrideStore};
use crate::layouts::KnownLayout;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// A run of identical, non-`none` hints over `start..end` (char indices).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HintSpan {
    pub start: usize,
    pub end: usize,
    pub hint: Hint,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedLine {
    pub line: usize,
    pub text: String,
    pub hints: Vec<Hint>,
    pub spans: Vec<HintSpan>,
}

impl AnnotatedLine {
    pub fn count(&self, hint: Hint) -> usize {
        self.hints.iter().filter(|&&h| h == hint).count()
    }
}

/// Everything a renderer needs to paint hints for one layout.
#[derive(Debug, Clone)]
pub struct HintService {
    store: Arc<OverrideStore>,
    options: HintOptions,
    layout: KnownLayout,
}

impl HintService {
    pub fn new(layout: KnownLayout, options: HintOptions) -> Self {
        Self {
            store: Arc::new(OverrideStore::builtin().clone()),
            options,
            layout,
        }
    }

    pub fn with_store(mut self, store: Arc<OverrideStore>) -> Self {
        self.store = store;
        self
    }

    pub fn options(&self) -> &HintOptions {
        &self.options
    }

    pub fn layout(&self) -> KnownLayout {
        self.layout
    }

    pub fn store(&self) -> &OverrideStore {
        &self.store
    }

    /// Hints for one line. All `none` unless the layout has magic keys.
    pub fn annotate_line(&self, chars: &[char]) -> Vec<Hint> {
        if !self.layout.has_magic_keys() {
            return vec![Hint::None; chars.len()];
        }
        classify_line(&self.store, chars, &self.options)
    }

    /// Annotates every line of `text`. Lines are classified independently.
    pub fn annotate(&self, text: &str) -> Vec<AnnotatedLine> {
        debug!(
            "Annotating {} bytes for layout '{}'",
            text.len(),
            self.layout
        );

        text.lines()
            .enumerate()
            .map(|(line, raw)| {
                let chars: Vec<char> = raw.chars().collect();
                let hints = self.annotate_line(&chars);
                AnnotatedLine {
                    line,
                    text: raw.to_string(),
                    spans: spans_of(&hints),
                    hints,
                }
            })
            .collect()
    }
}

/// Groups consecutive equal hints, dropping `none`.
pub fn spans_of(hints: &[Hint]) -> Vec<HintSpan> {
    let mut spans: Vec<HintSpan> = Vec::new();
    for (i, &hint) in hints.iter().enumerate() {
        if hint == Hint::None {
            continue;
        }
        match spans.last_mut() {
            Some(last) if last.hint == hint && last.end == i => last.end = i + 1,
            _ => spans.push(HintSpan {
                start: i,
                end: i + 1,
                hint,
            }),
        }
    }
    spans
}
