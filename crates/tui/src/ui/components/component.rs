//! Component system for the scck prompts.
//!
//! A component owns the state of one prompt widget, turns key events into
//! state changes, and draws itself into the rectangle handed over by the
//! runtime. Anything that ends the prompt is reported back as an [`Effect`]
//! instead of being acted on directly.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Requests a component sends back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Enter was pressed; carries the raw line.
    Submit(String),
    /// Ctrl-C was pressed.
    Cancel,
}

/// A prompt widget driven by the runtime loop.
///
/// # Lifecycle
///
/// 1. The runtime asks for [`Component::viewport_height`] once and reserves
///    that many terminal rows.
/// 2. Every key press goes through [`Component::handle_key_events`]; state
///    is recomputed inside the handler.
/// 3. The runtime redraws with [`Component::render`] after each event.
pub(crate) trait Component {
    /// Handle a key press, returning the effects the runtime must process.
    ///
    /// # Arguments
    ///
    /// * `key` - The key event to handle
    fn handle_key_events(&mut self, key: KeyEvent) -> Vec<Effect>;

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect);

    /// Rows the inline viewport needs to show the component.
    fn viewport_height(&self) -> u16;
}
