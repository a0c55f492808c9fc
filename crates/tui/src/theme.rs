//! Theme and styling for the scck prompts.
//!
//! A dark palette with a blue accent. Colors are exposed as constants, and
//! every widget picks its styles through the helper functions below so the
//! two prompts stay visually consistent.

use ratatui::style::{Color, Modifier, Style};

/// Accent color for the active field, highlights and the prompt symbol.
pub const ACCENT: Color = Color::Rgb(8, 171, 237);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(224, 224, 230);

/// Muted foreground for ghost text, hints and untouched fields.
pub const FG_MUTED: Color = Color::Rgb(168, 168, 175);

/// Default border color.
pub const BORDER: Color = Color::Rgb(72, 72, 80);

/// Background for options visited while cycling.
pub const BG_HIGHLIGHT: Color = Color::Rgb(20, 32, 44);

/// Fields whose value passed validation.
pub const OK: Color = Color::Rgb(102, 187, 106);

/// Validation failures.
pub const WARN: Color = Color::Rgb(220, 96, 110);

pub fn border_style() -> Style {
    Style::default().fg(BORDER)
}

/// Frame titles and group headers.
pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

pub fn text_style() -> Style {
    Style::default().fg(FG)
}

/// Secondary text: ghost completions, help lines, unedited fields.
pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

/// Style of the symbol printed before the editable line.
pub fn prompt_symbol_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn active_field_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn valid_field_style() -> Style {
    Style::default().fg(OK)
}

pub fn invalid_field_style() -> Style {
    Style::default().fg(WARN).add_modifier(Modifier::CROSSED_OUT)
}

/// The option equal to the typed value.
pub fn option_selected_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Options while the user is cycling through them.
pub fn option_focus_style() -> Style {
    Style::default().fg(FG).bg(BG_HIGHLIGHT)
}

/// Menu entry matching the typed key.
pub fn list_highlight_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
