//! Helpers shared by the scck prompt widgets and the binary.
//!
//! - [`whitespace_lexing`]: whitespace tokens with byte ranges.
//! - [`command_cursor`]: derive the active field from line + cursor.
//! - [`preferences`]: JSON-backed user preferences.
//! - [`line_prompt`]: sequential question/answer prompt with queued answers.

pub mod command_cursor;
pub mod line_prompt;
pub mod preferences;
pub mod whitespace_lexing;

pub use command_cursor::{token_range, tokenize};
pub use line_prompt::{LinePrompt, LinePromptError, parse_answers};
pub use preferences::{PreferencesError, PreferencesPayload, UserPreferences};
pub use whitespace_lexing::{LexToken, lex_whitespace_ranged};
