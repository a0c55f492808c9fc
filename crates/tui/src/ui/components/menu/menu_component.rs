//! Selection menu component.
//!
//! Draws an optional banner, then one titled frame per non-empty group with
//! its entries in two columns, then the input line. The entry whose key
//! matches the input is highlighted as the user types.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::state::{MenuState, columns};
use crate::theme;
use crate::ui::components::component::{Component, Effect};

/// Entries per row inside a group frame.
pub const MENU_COLUMNS: usize = 2;

#[derive(Debug, Clone)]
pub struct MenuComponent {
    banner: Vec<String>,
    max_width: u16,
    prompt_symbol: String,
    state: MenuState,
}

impl MenuComponent {
    pub fn new(banner: Option<&str>, state: MenuState, max_width: u16, prompt_symbol: impl Into<String>) -> Self {
        Self {
            banner: banner.map(|text| text.lines().map(str::to_string).collect()).unwrap_or_default(),
            max_width,
            prompt_symbol: prompt_symbol.into(),
            state,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MenuState {
        &mut self.state
    }

    fn group_heights(&self) -> Vec<u16> {
        self.state
            .visible_groups()
            .map(|(_, entries)| {
                let rows = entries.len().div_ceil(MENU_COLUMNS);
                u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
            })
            .collect()
    }

    fn render_group(&self, frame: &mut Frame, rect: Rect, title: &str, entries: &[scck_types::MenuEntry]) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style())
            .title(Span::styled(format!(" {title} "), theme::title_style()));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let column_areas = Layout::horizontal([Constraint::Ratio(1, MENU_COLUMNS as u32); MENU_COLUMNS]).split(inner);
        for (column, area) in columns(entries, MENU_COLUMNS).into_iter().zip(column_areas.iter()) {
            let lines: Vec<Line> = column
                .iter()
                .map(|entry| {
                    let style = if self.state.is_highlighted(entry) {
                        theme::list_highlight_style()
                    } else {
                        theme::text_style()
                    };
                    Line::from(Span::styled(format!("{}) {}", entry.display_key(), entry.label), style))
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), *area);
        }
    }
}

impl Component for MenuComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Vec<Effect> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                debug!("menu cancelled");
                return vec![Effect::Cancel];
            }
            KeyCode::Enter => {
                debug!(input = self.state.input(), selected = ?self.state.selected_entry(), "menu submitted");
                return vec![Effect::Submit(self.state.input().to_string())];
            }
            KeyCode::Char('a') if ctrl => self.state.reduce_move_home(),
            KeyCode::Char('e') if ctrl => self.state.reduce_move_end(),
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.state.reduce_insert_char(c)
            }
            KeyCode::Left => self.state.reduce_move_cursor_left(),
            KeyCode::Right => self.state.reduce_move_cursor_right(),
            KeyCode::Home => self.state.reduce_move_home(),
            KeyCode::End => self.state.reduce_move_end(),
            KeyCode::Backspace => self.state.reduce_backspace(),
            KeyCode::Delete => self.state.reduce_delete(),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect) {
        let width = rect.width.min(self.max_width);
        let banner_height = u16::try_from(self.banner.len()).unwrap_or(u16::MAX);
        let group_heights = self.group_heights();

        let mut constraints = vec![Constraint::Length(banner_height)];
        constraints.extend(group_heights.iter().map(|height| Constraint::Length(*height)));
        constraints.extend([Constraint::Length(1), Constraint::Length(1)]);
        let areas = Layout::vertical(constraints).split(rect);

        let banner: Vec<Line> = self
            .banner
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), theme::prompt_symbol_style())))
            .collect();
        frame.render_widget(Paragraph::new(banner), areas[0]);

        for (index, (title, entries)) in self.state.visible_groups().enumerate() {
            let area = areas[index + 1];
            self.render_group(frame, Rect { width, ..area }, title, entries);
        }

        let input_area = areas[areas.len() - 1];
        let line = Line::from(vec![
            Span::styled(self.prompt_symbol.as_str(), theme::prompt_symbol_style()),
            Span::styled(self.state.input(), theme::text_style()),
        ]);
        frame.render_widget(Paragraph::new(line), input_area);
        let col = self.prompt_symbol.width() + self.state.cursor_column();
        let x = input_area.x.saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
        frame.set_cursor_position((x.min(input_area.right().saturating_sub(1)), input_area.y));
    }

    fn viewport_height(&self) -> u16 {
        let banner = u16::try_from(self.banner.len()).unwrap_or(u16::MAX);
        self.group_heights()
            .into_iter()
            .fold(banner, u16::saturating_add)
            .saturating_add(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use scck_types::{MenuEntry, MenuGroups};

    fn component() -> MenuComponent {
        let mut groups = MenuGroups::new();
        groups.insert(
            "Basic".into(),
            vec![
                MenuEntry::new("1", "Hello world"),
                MenuEntry::new("2", "Job parameters"),
                MenuEntry::new("3", "Third"),
            ],
        );
        groups.insert("Hidden".into(), Vec::new());
        groups.insert("Exit".into(), vec![MenuEntry::new("q", "Quit")]);
        MenuComponent::new(Some("scck\nhelper"), MenuState::new(groups), 50, "> ")
    }

    #[test]
    fn height_counts_banner_groups_and_input() {
        // banner 2 + Basic (2 rows + 2) + Exit (1 row + 2) + blank + input
        assert_eq!(component().viewport_height(), 2 + 4 + 3 + 2);
    }

    #[test]
    fn renders_entries_column_major() {
        let mut c = component();
        c.state_mut().set_input("02");
        let height = c.viewport_height();
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                c.render(frame, area)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>();
        assert!(row(0).starts_with("scck"));
        assert!(row(2).starts_with("╭ Basic "));
        assert!(row(3).contains("01) Hello world"));
        assert!(row(3).contains("03) Third"));
        assert!(row(4).contains("02) Job parameters"));
        assert!(row(6).starts_with("╭ Exit "));
        assert!(row(7).contains("q) Quit"));
        assert!(row(height - 1).starts_with("> 02"));

        let highlighted = (0..buffer.area.width)
            .map(|x| &buffer[(x, 4)])
            .find(|cell| cell.symbol() == "0")
            .map(|cell| cell.fg);
        assert_eq!(highlighted, Some(theme::ACCENT));
    }

    #[test]
    fn enter_submits_raw_input() {
        let mut c = component();
        c.handle_key_events(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT));
        assert_eq!(
            c.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            vec![Effect::Submit("Q".into())]
        );
        assert_eq!(
            c.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![Effect::Cancel]
        );
    }
}
