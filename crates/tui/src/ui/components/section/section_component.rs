//! Section prompt component: key routing and rendering.
//!
//! Layout, top to bottom:
//!
//! ```text
//! ┌ Job parameters ──────────────────────┐
//! │ user  nodes  cores  time-limit       │  summary line
//! │                                      │
//! │ Account to charge                    │  detail panel
//! │ alice                                │
//! │ bob                                  │
//! └──────────────────────────────────────┘
//!
//! > al|ice                                  input line + ghost text
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use scck_types::MenuLayout;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::render_state::{DetailBody, DetailPanel, FieldStatus, OptionStyle, SummaryLabel, max_detail_height};
use super::state::SectionPromptState;
use crate::theme;
use crate::ui::components::component::{Component, Effect};

/// Rows taken by everything except the detail panel: two borders, the
/// summary line, the blank line under it, the blank line above the input and
/// the input line itself.
const CHROME_HEIGHT: u16 = 6;

#[derive(Debug, Clone)]
pub struct SectionComponent {
    title: String,
    max_width: u16,
    prompt_symbol: String,
    detail_height: u16,
    state: SectionPromptState,
}

impl SectionComponent {
    pub fn new(title: impl Into<String>, state: SectionPromptState, max_width: u16, prompt_symbol: impl Into<String>) -> Self {
        let detail_height = u16::try_from(max_detail_height(state.schema())).unwrap_or(u16::MAX);
        Self {
            title: title.into(),
            max_width,
            prompt_symbol: prompt_symbol.into(),
            detail_height,
            state,
        }
    }

    pub fn state(&self) -> &SectionPromptState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SectionPromptState {
        &mut self.state
    }

    fn render_frame(&self, frame: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style())
            .title(Span::styled(format!(" {} ", self.title), theme::title_style()));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [summary_area, _, detail_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        frame.render_widget(Paragraph::new(summary_line(&self.state.summary_labels())), summary_area);
        if let Some(panel) = self.state.detail_panel() {
            frame.render_widget(Paragraph::new(detail_lines(&panel)), detail_area);
        }
    }

    fn render_input(&self, frame: &mut Frame, rect: Rect) {
        let input = self.state.input();
        let (before, after) = input.split_at(self.state.cursor());
        let mut spans = vec![
            Span::styled(self.prompt_symbol.as_str(), theme::prompt_symbol_style()),
            Span::styled(before, theme::text_style()),
        ];
        if let Some(ghost) = self.state.ghost_text()
            && !ghost.is_empty()
        {
            spans.push(Span::styled(ghost, theme::text_muted()));
        }
        spans.push(Span::styled(after, theme::text_style()));

        let col = self.prompt_symbol.width() + self.state.cursor_column();
        let scroll = input_scroll(col, rect.width);
        frame.render_widget(Paragraph::new(Line::from(spans)).scroll((0, scroll)), rect);

        let visible = u16::try_from(col).unwrap_or(u16::MAX).saturating_sub(scroll);
        frame.set_cursor_position((rect.x.saturating_add(visible), rect.y));
    }
}

/// Columns to scroll the input line so the cursor column stays visible.
fn input_scroll(cursor_col: usize, width: u16) -> u16 {
    let last = usize::from(width.saturating_sub(1));
    u16::try_from(cursor_col.saturating_sub(last)).unwrap_or(u16::MAX)
}

impl Component for SectionComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Vec<Effect> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                debug!(input = self.state.input(), "section prompt cancelled");
                return vec![Effect::Cancel];
            }
            KeyCode::Enter => {
                debug!(input = self.state.input(), "section prompt submitted");
                return vec![Effect::Submit(self.state.input().to_string())];
            }
            KeyCode::Char('a') if ctrl => self.state.reduce_move_home(),
            KeyCode::Char('e') if ctrl => self.state.reduce_move_end(),
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.state.reduce_insert_char(c)
            }
            KeyCode::Tab => self.state.reduce_tab(),
            KeyCode::BackTab => self.state.reduce_back_tab(),
            KeyCode::Right => self.state.reduce_right(),
            KeyCode::Left => self.state.reduce_move_cursor_left(),
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
        let frame_height = self.detail_height + 4;
        let [frame_area, _, input_area] =
            Layout::vertical([Constraint::Length(frame_height), Constraint::Length(1), Constraint::Length(1)]).areas(rect);
        self.render_frame(frame, Rect { width, ..frame_area });
        self.render_input(frame, input_area);
    }

    fn viewport_height(&self) -> u16 {
        CHROME_HEIGHT.saturating_add(self.detail_height)
    }
}

fn status_style(status: FieldStatus) -> Style {
    match status {
        FieldStatus::Unedited => theme::text_muted(),
        FieldStatus::Active => theme::active_field_style(),
        FieldStatus::Valid => theme::valid_field_style(),
        FieldStatus::Invalid => theme::invalid_field_style(),
    }
}

fn option_style(style: OptionStyle) -> Style {
    match style {
        OptionStyle::Selected => theme::option_selected_style(),
        OptionStyle::OnFocus => theme::option_focus_style(),
        OptionStyle::Plain => theme::text_style(),
    }
}

fn summary_line(labels: &[SummaryLabel]) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (index, label) in labels.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(label.name.clone(), status_style(label.status)));
    }
    Line::from(spans)
}

/// Lines of the detail panel: help first, then the options or the default.
pub(crate) fn detail_lines(panel: &DetailPanel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(help) = &panel.help {
        lines.push(Line::from(Span::styled(help.clone(), theme::text_muted())));
    }
    match &panel.body {
        DetailBody::Options { options, layout: MenuLayout::Vertical } => {
            lines.extend(
                options
                    .iter()
                    .map(|option| Line::from(Span::styled(option.value.clone(), option_style(option.style)))),
            );
        }
        DetailBody::Options { options, layout: MenuLayout::Horizontal } => {
            let mut spans = Vec::with_capacity(options.len() * 2);
            for (index, option) in options.iter().enumerate() {
                if index > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(option.value.clone(), option_style(option.style)));
            }
            lines.push(Line::from(spans));
        }
        DetailBody::Default(Some(default)) => {
            lines.push(Line::from(vec![
                Span::styled("default: ", theme::text_muted()),
                Span::styled(default.clone(), theme::text_style()),
            ]));
        }
        DetailBody::Default(None) => {}
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use scck_types::{Schema, Section};

    fn component() -> SectionComponent {
        let schema = Schema::new(vec![
            Section::menu("user", ["alice", "bob"])
                .with_layout(MenuLayout::Vertical)
                .with_help("Account"),
            Section::menu("nodes", ["1", "2"]),
        ])
        .unwrap();
        SectionComponent::new("Job", SectionPromptState::new(schema), 30, "> ")
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut key = KeyEvent::new(code, modifiers);
        key.kind = KeyEventKind::Press;
        key
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn viewport_fits_tallest_detail_panel() {
        assert_eq!(component().viewport_height(), CHROME_HEIGHT + 3);
    }

    #[test]
    fn keys_route_to_reducers() {
        let mut c = component();
        for ch in "bo".chars() {
            assert!(c.handle_key_events(press(KeyCode::Char(ch), KeyModifiers::NONE)).is_empty());
        }
        c.handle_key_events(press(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(c.state().input(), "bob");
        c.handle_key_events(press(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(c.state().cursor(), 0);
        c.handle_key_events(press(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(c.state().input(), "ob");
        assert_eq!(
            c.handle_key_events(press(KeyCode::Enter, KeyModifiers::NONE)),
            vec![Effect::Submit("ob".into())]
        );
        assert_eq!(
            c.handle_key_events(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![Effect::Cancel]
        );
    }

    #[test]
    fn renders_summary_detail_and_ghost() {
        let mut c = component();
        c.state_mut().set_input("b");
        let height = c.viewport_height();
        let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                c.render(frame, area)
            })
            .unwrap();

        let rows = rows(terminal.backend().buffer());
        assert!(rows[0].starts_with("╭ Job "), "{rows:?}");
        assert_eq!(rows[0].chars().count(), 30, "frame is capped at max_width");
        assert!(rows[1].contains("user  nodes"));
        assert!(rows[3].contains("Account"));
        assert!(rows[4].contains("alice"));
        assert!(rows[5].contains("bob"));
        assert_eq!(rows[rows.len() - 1], "> bob");

        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!((cursor.x, cursor.y), (3, height - 1));
    }

    fn draw(c: &mut SectionComponent, width: u16) -> (Vec<String>, (u16, u16)) {
        let height = c.viewport_height();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                c.render(frame, area)
            })
            .unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        (rows(terminal.backend().buffer()), (cursor.x, cursor.y))
    }

    #[test]
    fn ghost_text_sits_at_the_cursor_mid_line() {
        let mut c = component();
        c.state_mut().set_input("al 2");
        c.state_mut().set_cursor(2);
        assert_eq!(c.state().ghost_text(), Some("ice"));

        let (rows, cursor) = draw(&mut c, 40);
        assert_eq!(rows[rows.len() - 1], "> alice 2");
        assert_eq!(cursor.0, 4);

        c.handle_key_events(press(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(c.state().input(), "alice 2");
    }

    #[test]
    fn long_input_scrolls_to_keep_the_cursor_visible() {
        let mut c = component();
        c.state_mut().set_input("bob 2 aaaaaaaaaaaaaaaaaaaaz");
        let (rows, cursor) = draw(&mut c, 20);
        let input_row = &rows[rows.len() - 1];
        assert!(input_row.ends_with("az"), "{input_row:?}");
        assert_eq!(cursor.0, 19);

        c.handle_key_events(press(KeyCode::Home, KeyModifiers::NONE));
        let (rows, cursor) = draw(&mut c, 20);
        assert!(rows[rows.len() - 1].starts_with("> bob 2"));
        assert_eq!(cursor.0, 2);
    }

    #[test]
    fn scroll_offset_tracks_the_cursor_column() {
        assert_eq!(input_scroll(5, 20), 0);
        assert_eq!(input_scroll(19, 20), 0);
        assert_eq!(input_scroll(20, 20), 1);
        assert_eq!(input_scroll(45, 20), 26);
        assert_eq!(input_scroll(3, 0), 3);
    }
}
