//! Editing state of the section prompt.
//!
//! The state owns the line being edited and everything derived from it.
//! Reducers (`reduce_*`) perform plain edits; `apply_*` methods perform the
//! suggestion and cycling behaviors. Every mutation ends in [`recompute`],
//! which re-derives the cursor info, ghost text and validation memo from the
//! buffer, so no derived value can go stale.
//!
//! [`recompute`]: SectionPromptState::recompute

use scck_types::{CursorInfo, Schema};
use scck_util::{token_range, tokenize};
use tracing::debug;

use super::render_state::{self, DetailPanel, SummaryLabel, ValidationMemo};
use super::suggestion_engine::{accept_suggestion, suggest};
use crate::ui::components::common::TextInputState;

#[derive(Debug, Clone)]
pub struct SectionPromptState {
    schema: Schema,
    text_input: TextInputState,
    cursor_info: CursorInfo,
    ghost_text: Option<String>,
    history: ValidationMemo,
    /// Set while the user cycles the active menu field with Tab/Shift-Tab;
    /// cleared by any plain edit or cursor move.
    selected: bool,
}

impl SectionPromptState {
    pub fn new(schema: Schema) -> Self {
        let history = ValidationMemo::new(schema.len());
        let mut state = Self {
            schema,
            text_input: TextInputState::new(),
            cursor_info: CursorInfo::default(),
            ghost_text: None,
            history,
            selected: false,
        };
        state.recompute();
        state
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn input(&self) -> &str {
        self.text_input.input()
    }

    /// Byte offset of the cursor.
    pub fn cursor(&self) -> usize {
        self.text_input.cursor()
    }

    pub fn cursor_column(&self) -> usize {
        self.text_input.cursor_column()
    }

    pub fn cursor_info(&self) -> &CursorInfo {
        &self.cursor_info
    }

    pub fn ghost_text(&self) -> Option<&str> {
        self.ghost_text.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Index of the section being edited, if any.
    pub fn active_field(&self) -> Option<usize> {
        self.cursor_info.active_field(self.schema.len())
    }

    pub fn summary_labels(&self) -> Vec<SummaryLabel> {
        render_state::summary_labels(&self.schema, &self.cursor_info, &self.history)
    }

    pub fn detail_panel(&self) -> Option<DetailPanel> {
        render_state::detail_panel(&self.schema, &self.cursor_info, self.selected)
    }

    /// Replace the whole line and put the cursor at its end.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.text_input.set_input(input);
        self.text_input.move_end();
        self.selected = false;
        self.recompute();
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.edit(|ti| ti.set_cursor(cursor));
    }

    // ===== EDITING =====

    pub fn reduce_insert_char(&mut self, c: char) {
        self.edit(|ti| ti.insert_char(c));
    }

    pub fn reduce_backspace(&mut self) {
        self.edit(|ti| ti.backspace());
    }

    pub fn reduce_delete(&mut self) {
        self.edit(|ti| ti.delete());
    }

    pub fn reduce_move_cursor_left(&mut self) {
        self.edit(|ti| ti.move_left());
    }

    pub fn reduce_move_cursor_right(&mut self) {
        self.edit(|ti| ti.move_right());
    }

    pub fn reduce_move_home(&mut self) {
        self.edit(|ti| ti.move_home());
    }

    pub fn reduce_move_end(&mut self) {
        self.edit(|ti| ti.move_end());
    }

    // ===== SUGGESTIONS & CYCLING =====

    /// Insert the current ghost text when it completes the active field
    /// legally. Returns whether anything was inserted.
    pub fn apply_accept_suggestion(&mut self) -> bool {
        let accepted = accept_suggestion(
            &mut self.text_input,
            &self.schema,
            &self.cursor_info,
            self.ghost_text.as_deref(),
        );
        if accepted {
            self.selected = false;
            self.recompute();
        }
        accepted
    }

    /// Replace the active menu value with the option `step` positions away.
    ///
    /// No-op (returning `false`) unless the active field is a menu whose
    /// current value is one of its options.
    pub fn apply_cycle_option(&mut self, step: isize) -> bool {
        let Some(index) = self.active_field() else {
            return false;
        };
        let Some(section) = self.schema.get(index) else {
            return false;
        };
        let current = self.cursor_info.token(index).unwrap_or_default();
        let Some(next) = section.cycle_option(current, step).map(str::to_string) else {
            return false;
        };
        debug!(field = %section.name, from = current, to = %next, "cycled option");

        match token_range(self.text_input.input(), index) {
            Some(range) => self.text_input.replace_range(range, &next),
            None => self.text_input.insert_str(&next),
        }
        self.recompute();
        true
    }

    /// Tab: accept the ghost text, otherwise start (or continue) cycling.
    pub fn reduce_tab(&mut self) {
        if self.selected {
            self.apply_cycle_option(1);
            return;
        }
        if self.apply_accept_suggestion() {
            return;
        }
        if self.apply_cycle_option(1) {
            self.selected = true;
        }
    }

    /// Shift-Tab: the first press only enters cycling mode; later presses
    /// step backwards.
    pub fn reduce_back_tab(&mut self) {
        if self.selected {
            self.apply_cycle_option(-1);
        } else {
            self.selected = true;
        }
    }

    /// Right arrow: accept the ghost text, otherwise move the cursor.
    pub fn reduce_right(&mut self) {
        if !self.apply_accept_suggestion() {
            self.reduce_move_cursor_right();
        }
    }

    fn edit<F: FnOnce(&mut TextInputState)>(&mut self, f: F) {
        f(&mut self.text_input);
        self.selected = false;
        self.recompute();
    }

    /// Re-derive cursor info, ghost text and validation from the buffer.
    pub fn recompute(&mut self) {
        self.cursor_info = tokenize(self.text_input.input(), self.text_input.cursor());
        self.ghost_text = suggest(&self.schema, &self.cursor_info);
        self.history.refresh(&self.schema, &self.cursor_info.tokens);
    }
}
