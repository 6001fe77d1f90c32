//! WordSpark-RS: an AI-assisted word puzzle solver written in Rust
//!
//! Given a word length, known letters with wildcards, a clue, and
//! puzzle-type filters, the pipeline returns candidate words with
//! definitions, examples, and confidence scores, sourced either from a
//! built-in mock word bank or the OpenRouter completion API.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod parser;
pub mod prompt;
pub mod query;
pub mod results;
pub mod search;
pub mod store;

pub use client::{ModelDescriptor, OpenRouterClient};
pub use config::Settings;
pub use error::{ParseError, SearchError};
pub use mock::MockWordBank;
pub use query::{Category, Difficulty, PuzzleType, SearchParams};
pub use results::{SavedWords, WordResult};
pub use search::{WordSearch, WordSource};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
