use thiserror::Error;

#[derive(Error, Debug)]
pub enum AfterburnerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Override pattern for '{word}' has {actual} chars, word has {expected}")]
    PatternLength {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate override entry for '{0}'")]
    DuplicateWord(String),
}

pub type HintResult<T> = Result<T, AfterburnerError>;
