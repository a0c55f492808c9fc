//! Runtime: inline terminal lifecycle and the synchronous event loop.
//!
//! Responsibilities
//! - Put the terminal into raw mode for the lifetime of one prompt and
//!   restore it on every exit path (a guard's `Drop` does the restore).
//! - Reserve an inline viewport below the current cursor line; the prompts
//!   never switch to the alternate screen.
//! - Block on `crossterm::event::read()`, route key presses to the mounted
//!   component, and redraw after each event.
//! - Turn the component's `Effect`s into a `PromptOutcome`.

use std::io::{Stdout, stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, TerminalOptions, Viewport};
use scck_types::PromptOutcome;
use tracing::{debug, warn};

use crate::ui::components::component::{Component, Effect};

type InlineTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Keeps raw mode enabled while alive.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            warn!(error = %error, "failed to disable raw mode");
        }
    }
}

/// Create a terminal drawing into `height` rows below the cursor.
fn setup_terminal(height: u16) -> Result<InlineTerminal> {
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
    .context("failed to create inline viewport")?;
    Ok(terminal)
}

/// Leave the last frame on screen and park the cursor on its final row so
/// that subsequent output starts below the prompt.
fn cleanup_terminal(terminal: &mut InlineTerminal, area: Rect) -> Result<()> {
    terminal.set_cursor_position(Position::new(0, area.bottom().saturating_sub(1)))?;
    terminal.show_cursor()?;
    Ok(())
}

fn render<C: Component>(terminal: &mut InlineTerminal, component: &mut C) -> Result<Rect> {
    let completed = terminal.draw(|frame| {
        let area = frame.area();
        component.render(frame, area)
    })?;
    Ok(completed.area)
}

/// Route one terminal event to the component.
fn handle_input_event<C: Component>(component: &mut C, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key) if key.kind != KeyEventKind::Release => component.handle_key_events(key),
        // Resize is picked up by the next draw.
        _ => Vec::new(),
    }
}

/// Translate effects into an outcome; `None` keeps the loop running.
pub(crate) fn process_effects(effects: Vec<Effect>) -> Option<PromptOutcome> {
    effects.into_iter().find_map(|effect| match effect {
        Effect::Submit(line) => Some(PromptOutcome::Submitted(line)),
        Effect::Cancel => Some(PromptOutcome::Cancelled),
    })
}

/// Mount `component` inline and block until it submits or is cancelled.
pub(crate) fn run_inline<C: Component>(component: &mut C) -> Result<PromptOutcome> {
    let guard = RawModeGuard::enable()?;
    let mut terminal = setup_terminal(component.viewport_height())?;
    let mut area = render(&mut terminal, component)?;

    let outcome = loop {
        let input_event = event::read().context("failed to read terminal event")?;
        let effects = handle_input_event(component, input_event);
        let outcome = process_effects(effects);
        area = render(&mut terminal, component)?;
        if let Some(outcome) = outcome {
            break outcome;
        }
    };

    cleanup_terminal(&mut terminal, area)?;
    drop(guard);
    // Raw mode is off again; a plain newline moves below the viewport.
    println!();
    debug!(cancelled = outcome.is_cancelled(), "prompt finished");
    Ok(outcome)
}
