pub mod api;
pub mod config;
pub mod error;
pub mod hints;
pub mod layouts;
// cmd and reports belong to the binary crate (main.rs).

pub use crate::config::HintOptions;
pub use crate::error::{AfterburnerError, HintResult};
pub use crate::hints::{classify, classify_line, classify_with, Hint};
