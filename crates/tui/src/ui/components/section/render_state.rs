//! Presentation model of the section prompt.
//!
//! Everything here is derived from the schema, the current [`CursorInfo`]
//! and the cycling flag; the component only maps the result onto styles.

use scck_types::{CursorInfo, MenuLayout, Schema, SectionKind};
use tracing::trace;

/// Status of one field in the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Nothing typed for this position yet.
    Unedited,
    /// The cursor is inside this field.
    Active,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLabel {
    pub name: String,
    pub status: FieldStatus,
}

/// How a menu option is drawn in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStyle {
    /// Equal to the typed value.
    Selected,
    /// The user is cycling through the options.
    OnFocus,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOption {
    pub value: String,
    pub style: OptionStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    Options { options: Vec<DetailOption>, layout: MenuLayout },
    /// A text field's default suggestion, if it has one.
    Default(Option<String>),
}

/// Details of the active field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub help: Option<String>,
    pub body: DetailBody,
}

impl DetailPanel {
    /// Rows the panel occupies when drawn.
    pub fn height(&self) -> usize {
        let body = match &self.body {
            DetailBody::Options { options, layout: MenuLayout::Vertical } => options.len(),
            DetailBody::Options { .. } | DetailBody::Default(Some(_)) => 1,
            DetailBody::Default(None) => 0,
        };
        body + usize::from(self.help.is_some())
    }
}

/// Last validated value and its verdict, per field.
///
/// A validator only runs again once the field's token has changed since the
/// previous check.
#[derive(Debug, Clone, Default)]
pub struct ValidationMemo {
    entries: Vec<Option<(String, bool)>>,
}

impl ValidationMemo {
    pub fn new(field_count: usize) -> Self {
        Self {
            entries: vec![None; field_count],
        }
    }

    /// Re-validate every typed field whose token differs from the memo.
    pub fn refresh(&mut self, schema: &Schema, tokens: &[String]) {
        self.entries.resize(schema.len(), None);
        for ((section, token), entry) in schema.iter().zip(tokens).zip(self.entries.iter_mut()) {
            if entry.as_ref().is_some_and(|(value, _)| value == token) {
                continue;
            }
            let valid = section.validate(token);
            trace!(field = %section.name, value = %token, valid, "validated field");
            *entry = Some((token.clone(), valid));
        }
    }

    /// Verdict for the last value seen at `index`.
    pub fn is_valid(&self, index: usize) -> Option<bool> {
        self.entries.get(index)?.as_ref().map(|(_, valid)| *valid)
    }
}

/// One label per section, in schema order.
pub fn summary_labels(schema: &Schema, cursor_info: &CursorInfo, memo: &ValidationMemo) -> Vec<SummaryLabel> {
    let active = cursor_info.active_field(schema.len());
    schema
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let status = if index >= cursor_info.tokens.len() {
                FieldStatus::Unedited
            } else if active == Some(index) {
                FieldStatus::Active
            } else if section.validator.is_none() || memo.is_valid(index).unwrap_or(true) {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid
            };
            SummaryLabel {
                name: section.name.clone(),
                status,
            }
        })
        .collect()
}

/// Detail panel of the active field; `None` when no field is active.
pub fn detail_panel(schema: &Schema, cursor_info: &CursorInfo, selected: bool) -> Option<DetailPanel> {
    let index = cursor_info.active_field(schema.len())?;
    let section = schema.get(index)?;
    let body = match &section.kind {
        SectionKind::Menu { options, layout } => {
            let typed = cursor_info.token(index).unwrap_or_default();
            let options = options
                .iter()
                .map(|option| DetailOption {
                    value: option.clone(),
                    style: if option == typed {
                        OptionStyle::Selected
                    } else if selected {
                        OptionStyle::OnFocus
                    } else {
                        OptionStyle::Plain
                    },
                })
                .collect();
            DetailBody::Options {
                options,
                layout: *layout,
            }
        }
        SectionKind::Text => DetailBody::Default(section.default_suggestion().map(str::to_string)),
    };
    Some(DetailPanel {
        help: section.help.clone(),
        body,
    })
}

/// Tallest detail panel any field of `schema` can produce.
pub fn max_detail_height(schema: &Schema) -> usize {
    (0..schema.len())
        .filter_map(|index| {
            let info = CursorInfo::new(vec![String::new(); index + 1], Some(index), 0);
            detail_panel(schema, &info, false)
        })
        .map(|panel| panel.height())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scck_types::Section;
    use scck_util::tokenize;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn schema() -> Schema {
        Schema::new(vec![
            Section::menu("user", ["alice", "bob"])
                .with_layout(MenuLayout::Vertical)
                .with_help("Account to charge"),
            Section::menu("nodes", ["1", "2"]),
            Section::text("cores")
                .with_validator(|value| value.chars().all(|c| c.is_ascii_digit()))
                .with_suggestions(["32"]),
        ])
        .unwrap()
    }

    fn labels(line: &str, cursor: usize) -> Vec<FieldStatus> {
        let schema = schema();
        let info = tokenize(line, cursor);
        let mut memo = ValidationMemo::new(schema.len());
        memo.refresh(&schema, &info.tokens);
        summary_labels(&schema, &info, &memo).into_iter().map(|label| label.status).collect()
    }

    #[test]
    fn summary_tracks_edit_progress() {
        use FieldStatus::*;
        assert_eq!(labels("", 0), [Active, Unedited, Unedited]);
        assert_eq!(labels("alice ", 6), [Valid, Active, Unedited]);
        assert_eq!(labels("alice 2 x", 0), [Active, Valid, Invalid]);
        assert_eq!(labels("alice 2 16", 1), [Active, Valid, Valid]);
    }

    #[test]
    fn validator_reruns_only_on_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let schema = Schema::new(vec![Section::text("a").with_validator(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })])
        .unwrap();
        let mut memo = ValidationMemo::new(schema.len());
        memo.refresh(&schema, &["x".to_string()]);
        memo.refresh(&schema, &["x".to_string()]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        memo.refresh(&schema, &["y".to_string()]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(memo.is_valid(0), Some(true));
        assert_eq!(memo.is_valid(1), None);
    }

    #[test]
    fn detail_marks_typed_option() {
        let panel = detail_panel(&schema(), &tokenize("bob", 3), false).unwrap();
        assert_eq!(panel.help.as_deref(), Some("Account to charge"));
        let DetailBody::Options { options, layout } = panel.body else {
            panic!("menu field must list options");
        };
        assert_eq!(layout, MenuLayout::Vertical);
        let styles: Vec<_> = options.iter().map(|o| o.style).collect();
        assert_eq!(styles, [OptionStyle::Plain, OptionStyle::Selected]);
    }

    #[test]
    fn detail_focuses_options_while_cycling() {
        let panel = detail_panel(&schema(), &tokenize("alice 1", 7), true).unwrap();
        let DetailBody::Options { options, layout } = panel.body else {
            panic!("menu field must list options");
        };
        assert_eq!(layout, MenuLayout::Horizontal);
        let styles: Vec<_> = options.iter().map(|o| o.style).collect();
        assert_eq!(styles, [OptionStyle::Selected, OptionStyle::OnFocus]);
    }

    #[test]
    fn detail_of_text_field_shows_default() {
        let panel = detail_panel(&schema(), &tokenize("alice 1 ", 8), false).unwrap();
        assert_eq!(panel.body, DetailBody::Default(Some("32".into())));
        assert_eq!(panel.height(), 1);
    }

    #[test]
    fn no_detail_without_active_field() {
        assert_eq!(detail_panel(&schema(), &tokenize("a  b", 2), false), None);
        assert_eq!(detail_panel(&schema(), &tokenize("a b c d", 7), false), None);
    }

    #[test]
    fn max_detail_height_covers_vertical_menu() {
        assert_eq!(max_detail_height(&schema()), 3);
    }
}
