//! Entries of the selection menu.

use indexmap::IndexMap;

/// Titled groups of entries, rendered in insertion order.
pub type MenuGroups = IndexMap<String, Vec<MenuEntry>>;

/// One selectable line of the main menu, e.g. `02) Generate job parameters`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// What the user types to pick the entry (`"2"`, `"q"`).
    pub key: String,
    pub label: String,
}

impl MenuEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Key as shown in the menu: numbers are zero-padded to two digits.
    pub fn display_key(&self) -> String {
        match MenuKey::parse(&self.key) {
            Some(MenuKey::Number(number)) => format!("{number:02}"),
            _ => self.key.clone(),
        }
    }

    pub fn matches(&self, key: &MenuKey) -> bool {
        MenuKey::parse(&self.key).as_ref() == Some(key)
    }
}

/// Normalized selection typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuKey {
    /// Digits compare numerically, so `"02"` and `"2"` are the same entry.
    Number(u64),
    Text(String),
}

impl MenuKey {
    /// Trim and lowercase `input`; `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        if text.chars().all(|c| c.is_ascii_digit())
            && let Ok(number) = text.parse::<u64>()
        {
            return Some(MenuKey::Number(number));
        }
        Some(MenuKey::Text(text))
    }
}
