//! Public entry points: reusable, explicitly configured prompts.
//!
//! Each prompt is built once from its data and the user's preferences, then
//! run any number of times. Every run starts from a fresh line: the editing
//! state is discarded as soon as the prompt is submitted or cancelled.
//! `dispatch` drives the same controller without a terminal, one key event at
//! a time.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use scck_types::{MenuGroups, PromptOutcome, Schema};
use scck_util::UserPreferences;

use crate::ui::components::component::Component;
use crate::ui::components::{MenuComponent, MenuState, SectionComponent, SectionPromptState};
use crate::ui::runtime::{process_effects, run_inline};

/// Single-line prompt filling the fields of a [`Schema`] positionally.
///
/// # Example
///
/// ```no_run
/// use scck_types::{Schema, Section};
/// use scck_tui::SectionPrompt;
/// use scck_util::UserPreferences;
///
/// let schema = Schema::new(vec![Section::menu("nodes", ["1", "2"])])?;
/// let mut prompt = SectionPrompt::new("Nodes", schema, &UserPreferences::ephemeral());
/// let line = prompt.run()?.into_line();
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SectionPrompt {
    component: SectionComponent,
    initial_input: String,
}

impl SectionPrompt {
    pub fn new(title: impl Into<String>, schema: Schema, preferences: &UserPreferences) -> Self {
        let state = SectionPromptState::new(schema);
        Self {
            component: SectionComponent::new(title, state, preferences.max_width(), preferences.prompt_symbol()),
            initial_input: String::new(),
        }
    }

    /// Seed the line every run starts from, e.g. with previously entered
    /// values.
    pub fn with_initial_input(mut self, input: impl Into<String>) -> Self {
        self.initial_input = input.into();
        self.reset();
        self
    }

    pub fn state(&self) -> &SectionPromptState {
        self.component.state()
    }

    /// Feed one key event; `Some` once the prompt is submitted or cancelled.
    pub fn dispatch(&mut self, key: KeyEvent) -> Option<PromptOutcome> {
        let outcome = process_effects(self.component.handle_key_events(key));
        if outcome.is_some() {
            self.reset();
        }
        outcome
    }

    /// Draw the prompt into the whole frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.component.render(frame, area);
    }

    /// Rows the inline viewport needs.
    pub fn height(&self) -> u16 {
        self.component.viewport_height()
    }

    /// Mount inline below the cursor and block until Enter or Ctrl-C.
    pub fn run(&mut self) -> Result<PromptOutcome> {
        let outcome = run_inline(&mut self.component);
        self.reset();
        outcome
    }

    fn reset(&mut self) {
        let mut state = SectionPromptState::new(self.component.state().schema().clone());
        if !self.initial_input.is_empty() {
            state.set_input(self.initial_input.as_str());
        }
        *self.component.state_mut() = state;
    }
}

/// Grid of numbered entries picked by typing their key.
#[derive(Debug, Clone)]
pub struct MenuPrompt {
    component: MenuComponent,
}

impl MenuPrompt {
    pub fn new(banner: Option<&str>, groups: MenuGroups, preferences: &UserPreferences) -> Self {
        Self {
            component: MenuComponent::new(
                banner,
                MenuState::new(groups),
                preferences.max_width(),
                preferences.prompt_symbol(),
            ),
        }
    }

    pub fn state(&self) -> &MenuState {
        self.component.state()
    }

    pub fn dispatch(&mut self, key: KeyEvent) -> Option<PromptOutcome> {
        let outcome = process_effects(self.component.handle_key_events(key));
        if outcome.is_some() {
            self.reset();
        }
        outcome
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.component.render(frame, area);
    }

    pub fn height(&self) -> u16 {
        self.component.viewport_height()
    }

    /// Show the menu and return the raw submitted input.
    pub fn run(&mut self) -> Result<PromptOutcome> {
        let outcome = run_inline(&mut self.component);
        self.reset();
        outcome
    }

    fn reset(&mut self) {
        let groups = self.component.state().groups().clone();
        *self.component.state_mut() = MenuState::new(groups);
    }
}
