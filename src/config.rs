use crate::error::HintResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Per-call switches for the hint classifier.
///
/// Every flag defaults to on. Boolean flags take an explicit value on the
/// command line (`--suppress-skip-magic-after-space false`) so that a JSON
/// options file can be partially overridden.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintOptions {
    /// Drop a skip-magic hint when the key two back was itself typed with magic.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub suppress_skip_magic_after_magic: bool,

    /// Drop a skip-magic hint directly after another skip-magic hint.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub suppress_skip_magic_after_skip_magic: bool,

    /// Drop a magic hint directly after a skip-magic hint.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub suppress_magic_after_skip_magic: bool,

    /// Drop a skip-magic hint whose skip would cross a word boundary.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub suppress_skip_magic_after_space: bool,

    /// Consult the curated word override table before the rules.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub use_word_overrides: bool,
}

impl Default for HintOptions {
    fn default() -> Self {
        Self {
            suppress_skip_magic_after_magic: true,
            suppress_skip_magic_after_skip_magic: true,
            suppress_magic_after_skip_magic: true,
            suppress_skip_magic_after_space: true,
            use_word_overrides: true,
        }
    }
}

impl HintOptions {
    /// Raw rule evaluation: no suppression, no word overrides.
    pub fn none() -> Self {
        Self {
            suppress_skip_magic_after_magic: false,
            suppress_skip_magic_after_skip_magic: false,
            suppress_magic_after_skip_magic: false,
            suppress_skip_magic_after_space: false,
            use_word_overrides: false,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HintResult<Self> {
        let path = path.as_ref();
        debug!("Loading hint options from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli_options: &HintOptions, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_options.$field;
                }
            };
        }

        update_if_present!(suppress_skip_magic_after_magic);
        update_if_present!(suppress_skip_magic_after_skip_magic);
        update_if_present!(suppress_magic_after_skip_magic);
        update_if_present!(suppress_skip_magic_after_space);
        update_if_present!(use_word_overrides);
    }
}
