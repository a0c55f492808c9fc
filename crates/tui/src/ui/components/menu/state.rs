//! State of the selection menu: the groups on display and the typed key.

use scck_types::{MenuEntry, MenuGroups, MenuKey};

use crate::ui::components::common::TextInputState;

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    groups: MenuGroups,
    text_input: TextInputState,
    /// Normalized form of the input, refreshed on every edit.
    key: Option<MenuKey>,
}

impl MenuState {
    pub fn new(groups: MenuGroups) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    pub fn groups(&self) -> &MenuGroups {
        &self.groups
    }

    /// Groups that have at least one entry, in insertion order.
    pub fn visible_groups(&self) -> impl Iterator<Item = (&String, &Vec<MenuEntry>)> {
        self.groups.iter().filter(|(_, entries)| !entries.is_empty())
    }

    pub fn input(&self) -> &str {
        self.text_input.input()
    }

    pub fn cursor_column(&self) -> usize {
        self.text_input.cursor_column()
    }

    pub fn key(&self) -> Option<&MenuKey> {
        self.key.as_ref()
    }

    pub fn is_highlighted(&self, entry: &MenuEntry) -> bool {
        self.key.as_ref().is_some_and(|key| entry.matches(key))
    }

    /// First entry matching the typed key.
    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        let key = self.key.as_ref()?;
        self.groups.values().flatten().find(|entry| entry.matches(key))
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.edit(|ti| {
            ti.set_input(input);
            ti.move_end();
        });
    }

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
        self.text_input.move_left();
    }

    pub fn reduce_move_cursor_right(&mut self) {
        self.text_input.move_right();
    }

    pub fn reduce_move_home(&mut self) {
        self.text_input.move_home();
    }

    pub fn reduce_move_end(&mut self) {
        self.text_input.move_end();
    }

    fn edit<F: FnOnce(&mut TextInputState)>(&mut self, f: F) {
        f(&mut self.text_input);
        self.key = MenuKey::parse(self.text_input.input());
    }
}

/// Split `entries` into `count` columns, filled top to bottom then left to
/// right. Every column but the last holds `ceil(len / count)` entries.
pub fn columns(entries: &[MenuEntry], count: usize) -> Vec<&[MenuEntry]> {
    if entries.is_empty() {
        return Vec::new();
    }
    let rows = entries.len().div_ceil(count.max(1));
    entries.chunks(rows).collect()
}
