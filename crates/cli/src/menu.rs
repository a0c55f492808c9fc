//! Main menu: entries, banner and the mapping from typed key to action.

use scck_types::{MenuEntry, MenuGroups, MenuKey};

/// Width the banner and the plain-text menu are centered in.
const MENU_WIDTH: usize = 48;

const BANNER_CARDS: [&str; 6] = [
    ".------..------..------..------.",
    "|S.--. ||C.--. ||C.--. ||K.--. |",
    "| :♥ : || :♦ : || :♣ : || :♠ : |",
    "| :  : || :  : || :  : || :  : |",
    "| '--'S|| '--'C|| '--'C|| '--'K|",
    "`------'`------'`------'`------'",
];

const TAGLINE: &str = "CLI Tool on Super Computer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    HelloWorld,
    JobParameters,
    Exit,
}

/// (group, key, label, action) in display order.
const ENTRIES: &[(&str, &str, &str, MenuAction)] = &[
    ("Basic", "1", "Print Hello World", MenuAction::HelloWorld),
    ("Basic", "2", "Generate job parameters", MenuAction::JobParameters),
    ("Exit", "q", "Exit", MenuAction::Exit),
];

pub fn banner() -> String {
    BANNER_CARDS
        .iter()
        .chain(std::iter::once(&TAGLINE))
        .map(|line| center(line, MENU_WIDTH, ' '))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn groups() -> MenuGroups {
    let mut groups = MenuGroups::new();
    for (group, key, label, _) in ENTRIES {
        groups
            .entry((*group).to_string())
            .or_default()
            .push(MenuEntry::new(*key, *label));
    }
    groups
}

/// Action for the typed input; `None` when no entry matches.
pub fn resolve(input: &str) -> Option<MenuAction> {
    let key = MenuKey::parse(input)?;
    ENTRIES
        .iter()
        .find(|(_, entry_key, _, _)| MenuKey::parse(entry_key).as_ref() == Some(&key))
        .map(|(_, _, _, action)| *action)
}

/// The menu as plain lines for the sequential prompt.
pub fn menu_text(banner: &str, groups: &MenuGroups) -> String {
    let mut lines: Vec<String> = banner.lines().map(|line| format!(" {line}")).collect();
    for (title, entries) in groups.iter().filter(|(_, entries)| !entries.is_empty()) {
        lines.push(format!(" {}", center(&format!(" {title} "), MENU_WIDTH, '=')));
        lines.extend(
            entries
                .iter()
                .map(|entry| format!(" {}) {}", entry.display_key(), entry.label)),
        );
    }
    lines.join("\n")
}

fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let fill = fill.to_string();
    format!("{}{text}{}", fill.repeat(left), fill.repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_numeric_and_text_keys() {
        assert_eq!(resolve("1"), Some(MenuAction::HelloWorld));
        assert_eq!(resolve(" 02 "), Some(MenuAction::JobParameters));
        assert_eq!(resolve("Q"), Some(MenuAction::Exit));
        assert_eq!(resolve("7"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn groups_keep_display_order() {
        let groups = groups();
        let titles: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(titles, ["Basic", "Exit"]);
        assert_eq!(groups["Basic"].len(), 2);
    }

    #[test]
    fn plain_menu_lists_padded_keys() {
        let text = menu_text("scck", &groups());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], " scck");
        assert!(lines[1].contains("= Basic ="));
        assert_eq!(lines[1].chars().count(), MENU_WIDTH + 1);
        assert_eq!(lines[2], " 01) Print Hello World");
        assert_eq!(lines[5], " q) Exit");
    }

    #[test]
    fn banner_lines_are_centered() {
        for line in banner().lines() {
            assert_eq!(line.chars().count(), MENU_WIDTH);
        }
    }
}
