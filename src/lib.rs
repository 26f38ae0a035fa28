//! AI-assisted improvement of C++ game code.
//!
//! Pairs a shallow line-pattern analyzer with an OpenAI-compatible
//! completion service: [`analyze`] classifies common issues into six fixed
//! categories, [`SuggestEngine`] asks the model for an improved version of
//! the code guided by those findings, and [`render_diff`] shows original and
//! improved code side by side. The analyzer, formatter, extractor, and diff
//! renderer are pure functions; only the completion call can fail, and that
//! failure is absorbed into the returned [`SuggestionResponse`].

pub mod config;
pub mod diff;
pub mod extract;
pub mod llm;
pub mod prompt;
pub mod render;
pub mod rule;
pub mod suggest;
pub mod types;

pub use config::Config;
pub use diff::render_diff;
pub use extract::extract_code_and_explanation;
pub use render::format_analysis;
pub use rule::analyze;
pub use suggest::SuggestEngine;
pub use types::{Analysis, Category, Finding, IntegrationRecord, SuggestionResponse};
