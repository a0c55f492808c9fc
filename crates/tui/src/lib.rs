//! # scck TUI Library
//!
//! Interactive prompts for the scck command-line assistant, rendered with
//! Ratatui in an inline viewport below the shell cursor.
//!
//! ## Key Features
//!
//! - [`SectionPrompt`]: several named fields typed positionally on one line,
//!   with ghost-text completion, live validation in a summary line, and
//!   Tab/Shift-Tab cycling through a field's options.
//! - [`MenuPrompt`]: titled groups of numbered entries in a two-column grid;
//!   the entry matching the typed key is highlighted.
//!
//! ## Architecture
//!
//! Each prompt is a component (`ui::components`) owning its state. The
//! runtime blocks on terminal input, hands key presses to the component's
//! reducers, and redraws. The same dispatch path is available without a
//! terminal through `dispatch`, which is how the tests drive the prompts.

pub mod prompt;
pub mod theme;
pub mod ui;

pub use prompt::{MenuPrompt, SectionPrompt};
pub use ui::components::section::{FieldStatus, OptionStyle, SectionPromptState, SummaryLabel};
pub use ui::components::menu::{MenuState, columns};
