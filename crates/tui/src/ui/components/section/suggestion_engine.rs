//! Ghost-text suggestions and their acceptance for the section prompt.
//!
//! A suggestion is the *remainder* of a section's suggestion that the user
//! has not typed yet: with `al` typed in a field suggesting `alice`, the
//! ghost text is `ice`. Accepting inserts that remainder at the cursor.

use scck_types::{CursorInfo, Schema};
use tracing::debug;

use crate::ui::components::common::TextInputState;

/// Ghost text for the active field, if any.
///
/// - No active field (cursor in a gap, or past the last section): `None`.
/// - Section without suggestions: `None`.
/// - Empty typed value: the first suggestion in full.
/// - Otherwise the remainder of the first suggestion that starts with the
///   typed value and is strictly longer than it.
///
/// Only offered while the cursor sits at the end of the active token.
pub fn suggest(schema: &Schema, cursor_info: &CursorInfo) -> Option<String> {
    let index = cursor_info.active_field(schema.len())?;
    if !cursor_info.at_token_end() {
        return None;
    }
    let section = schema.get(index)?;
    let typed = cursor_info.token(index).unwrap_or_default();
    if typed.is_empty() {
        return section.default_suggestion().map(str::to_string);
    }
    section
        .suggestions
        .iter()
        .find(|candidate| candidate.len() > typed.len() && candidate.starts_with(typed))
        .map(|candidate| candidate[typed.len()..].to_string())
}

/// Insert `suggestion` at the cursor when doing so yields a legal value.
///
/// Returns `false` without touching `input` when there is no active field,
/// the suggestion is absent or empty, or the active index lies beyond either
/// the typed tokens or the schema. For menu fields with a non-empty typed
/// value, `typed + suggestion` must be one of the options; text fields
/// accept any completion.
pub fn accept_suggestion(
    input: &mut TextInputState,
    schema: &Schema,
    cursor_info: &CursorInfo,
    suggestion: Option<&str>,
) -> bool {
    let Some(index) = cursor_info.active_index else {
        return false;
    };
    let Some(suggestion) = suggestion.filter(|s| !s.is_empty()) else {
        return false;
    };
    let Some(typed) = cursor_info.token(index) else {
        return false;
    };
    let Some(section) = schema.get(index) else {
        return false;
    };

    if section.is_menu() && !typed.is_empty() && !section.is_option(&format!("{typed}{suggestion}")) {
        return false;
    }

    input.insert_str(suggestion);
    debug!(field = %section.name, inserted = suggestion, "accepted suggestion");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use scck_types::Section;
    use scck_util::tokenize;

    fn schema() -> Schema {
        Schema::new(vec![
            Section::menu("user", ["alice", "bob", "carol"]),
            Section::text("cores").with_suggestions(["32", "64"]),
            Section::text("note"),
        ])
        .unwrap()
    }

    fn input(text: &str) -> TextInputState {
        let mut state = TextInputState::new();
        state.set_input(text);
        state.set_cursor(text.len());
        state
    }

    #[test]
    fn empty_field_suggests_default_in_full() {
        assert_eq!(suggest(&schema(), &tokenize("", 0)), Some("alice".into()));
        assert_eq!(suggest(&schema(), &tokenize("bob ", 4)), Some("32".into()));
    }

    #[test]
    fn partial_value_suggests_remainder() {
        assert_eq!(suggest(&schema(), &tokenize("al", 2)), Some("ice".into()));
        assert_eq!(suggest(&schema(), &tokenize("bob 6", 5)), Some("4".into()));
    }

    #[test]
    fn no_suggestion_for_complete_or_unknown_values() {
        assert_eq!(suggest(&schema(), &tokenize("alice", 5)), None);
        assert_eq!(suggest(&schema(), &tokenize("zed", 3)), None);
        assert_eq!(suggest(&schema(), &tokenize("bob 32 ", 7)), None);
    }

    #[test]
    fn no_suggestion_past_schema_or_in_gap_or_mid_token() {
        let s = schema();
        assert_eq!(suggest(&s, &tokenize("a b c ", 6)), None);
        assert_eq!(suggest(&s, &tokenize("al  b", 3)), None);
        assert_eq!(suggest(&s, &tokenize("al", 1)), None);
    }

    #[test]
    fn accept_inserts_at_cursor() {
        let s = schema();
        let mut state = input("al");
        let info = tokenize(state.input(), state.cursor());
        let ghost = suggest(&s, &info);
        assert!(accept_suggestion(&mut state, &s, &info, ghost.as_deref()));
        assert_eq!(state.input(), "alice");
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn accept_refuses_illegal_menu_completion() {
        let s = schema();
        let mut state = input("al");
        let info = tokenize(state.input(), state.cursor());
        assert!(!accept_suggestion(&mut state, &s, &info, Some("x")));
        assert_eq!(state.input(), "al");
    }

    #[test]
    fn accept_refuses_without_suggestion_or_field() {
        let s = schema();
        let mut state = input("a b c d");
        let info = tokenize(state.input(), state.cursor());
        assert!(!accept_suggestion(&mut state, &s, &info, Some("x")));
        let mut state = input("al");
        let info = tokenize(state.input(), state.cursor());
        assert!(!accept_suggestion(&mut state, &s, &info, None));
        assert!(!accept_suggestion(&mut state, &s, &info, Some("")));
        assert_eq!(state.input(), "al");
    }

    #[test]
    fn text_fields_accept_freely() {
        let s = schema();
        let mut state = input("bob 1");
        let info = tokenize(state.input(), state.cursor());
        assert!(accept_suggestion(&mut state, &s, &info, Some("7")));
        assert_eq!(state.input(), "bob 17");
    }

    #[test]
    fn accepted_menu_value_is_an_option() {
        let s = schema();
        for typed in ["", "a", "al", "b", "c", "car"] {
            let mut state = input(typed);
            let info = tokenize(state.input(), state.cursor());
            let ghost = suggest(&s, &info);
            assert!(accept_suggestion(&mut state, &s, &info, ghost.as_deref()), "{typed}");
            assert!(s.get(0).unwrap().is_option(state.input()), "{typed} -> {}", state.input());
        }
    }
}
