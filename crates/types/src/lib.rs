//! Shared types for the scck prompt engine.
//!
//! The section schema, the cursor snapshot derived from the input line, menu
//! entries and the outcome returned by every interactive prompt live here so
//! that the tokenizer, the TUI components and the binary agree on one data
//! model.

pub mod cursor;
pub mod menu;
pub mod schema;
pub mod section;

pub use cursor::CursorInfo;
pub use menu::{MenuEntry, MenuGroups, MenuKey};
pub use schema::{BoundField, Schema, SchemaError};
pub use section::{MenuLayout, Section, SectionKind, Validator};

/// Terminal result of a prompt invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Enter was pressed; carries the raw text of the input line.
    Submitted(String),
    /// The prompt was interrupted (Ctrl+C or an injected cancel).
    Cancelled,
}

impl PromptOutcome {
    /// Raw line for the caller. A cancelled prompt yields an empty string so
    /// that no partially typed content leaks out.
    pub fn into_line(self) -> String {
        match self {
            PromptOutcome::Submitted(line) => line,
            PromptOutcome::Cancelled => String::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PromptOutcome::Cancelled)
    }
}
