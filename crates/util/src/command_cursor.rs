//! Derive the field under the cursor from the raw input line.
//!
//! The section prompt never stores "which field is being edited"; it
//! re-derives it from the buffer and the cursor on every keystroke through
//! [`tokenize`].

use std::ops::Range;

use scck_types::CursorInfo;

use crate::whitespace_lexing::lex_whitespace_ranged;

/// Split `buffer` into whitespace tokens and locate `cursor` among them.
///
/// `cursor` is a byte offset; values past the end are clamped and offsets
/// inside a multi-byte character snap back to its start.
///
/// Rules, first match wins:
/// 1. Cursor at the end of a buffer ending in whitespace: a synthetic empty
///    token is appended and becomes active.
/// 2. No tokens at all: `[""]`, active 0.
/// 3. Cursor at 0: active 0 unless the buffer starts with whitespace.
/// 4. Whitespace on both sides of the cursor: no active token.
/// 5. Otherwise the token the text before the cursor ends in (or the one
///    starting right at the cursor).
pub fn tokenize(buffer: &str, cursor: usize) -> CursorInfo {
    let cursor = snap_to_char_boundary(buffer, cursor);
    let mut tokens: Vec<String> = lex_whitespace_ranged(buffer)
        .into_iter()
        .map(|token| token.text.to_string())
        .collect();

    let ends_with_whitespace = buffer.chars().next_back().is_some_and(char::is_whitespace);
    if cursor == buffer.len() && ends_with_whitespace {
        tokens.push(String::new());
        let active = tokens.len() - 1;
        return CursorInfo::new(tokens, Some(active), 0);
    }

    if tokens.is_empty() {
        return CursorInfo::default();
    }

    if cursor == 0 {
        let leading_whitespace = buffer.chars().next().is_some_and(char::is_whitespace);
        return CursorInfo::new(tokens, (!leading_whitespace).then_some(0), 0);
    }

    let before = &buffer[..cursor];
    let previous_is_space = before.chars().next_back().is_some_and(char::is_whitespace);
    let next_is_space = buffer[cursor..].chars().next().is_some_and(char::is_whitespace);
    if previous_is_space && next_is_space {
        return CursorInfo::new(tokens, None, 0);
    }

    let before_tokens = lex_whitespace_ranged(before);
    if previous_is_space {
        // Cursor sits at the first character of the next token.
        return CursorInfo::new(tokens, Some(before_tokens.len()), 0);
    }

    let Some(last) = before_tokens.last() else {
        return CursorInfo::new(tokens, None, 0);
    };
    let offset = last.text.chars().count();
    CursorInfo::new(tokens, Some(before_tokens.len() - 1), offset)
}

/// Byte range of the `index`-th whitespace token of `buffer`.
pub fn token_range(buffer: &str, index: usize) -> Option<Range<usize>> {
    lex_whitespace_ranged(buffer)
        .get(index)
        .map(|token| token.start..token.end)
}

fn snap_to_char_boundary(buffer: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(buffer.len());
    while !buffer.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(tokens: &[&str], active: Option<usize>, offset: usize) -> CursorInfo {
        CursorInfo::new(tokens.iter().map(|t| t.to_string()).collect(), active, offset)
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(tokenize("", 0), info(&[""], Some(0), 0));
    }

    #[test]
    fn trailing_space_opens_a_new_token() {
        assert_eq!(tokenize("alice bob ", 10), info(&["alice", "bob", ""], Some(2), 0));
    }

    #[test]
    fn cursor_at_end_of_last_token() {
        assert_eq!(tokenize("alice bob", 9), info(&["alice", "bob"], Some(1), 3));
    }

    #[test]
    fn blank_buffer_counts_as_first_field() {
        assert_eq!(tokenize("   ", 3), info(&[""], Some(0), 0));
        assert_eq!(tokenize("   ", 1), info(&[""], Some(0), 0));
    }

    #[test]
    fn cursor_at_start() {
        assert_eq!(tokenize("alice bob", 0), info(&["alice", "bob"], Some(0), 0));
        assert_eq!(tokenize(" alice", 0), info(&["alice"], None, 0));
    }

    #[test]
    fn cursor_between_double_spaces() {
        assert_eq!(tokenize("alice  bob", 6), info(&["alice", "bob"], None, 0));
    }

    #[test]
    fn cursor_mid_token() {
        assert_eq!(tokenize("alice bob", 2), info(&["alice", "bob"], Some(0), 2));
        assert_eq!(tokenize("alice bob", 7), info(&["alice", "bob"], Some(1), 1));
    }

    #[test]
    fn cursor_at_start_of_following_token() {
        assert_eq!(tokenize("alice bob", 6), info(&["alice", "bob"], Some(1), 0));
    }

    #[test]
    fn cursor_right_after_token_before_space() {
        assert_eq!(tokenize("alice bob", 5), info(&["alice", "bob"], Some(0), 5));
    }

    #[test]
    fn offsets_count_characters() {
        assert_eq!(tokenize("héllo", "héllo".len()), info(&["héllo"], Some(0), 5));
        // Inside the two-byte 'é' snaps back to its start.
        assert_eq!(tokenize("héllo", 2), info(&["héllo"], Some(0), 1));
    }

    #[test]
    fn cursor_past_end_is_clamped() {
        assert_eq!(tokenize("ab", 99), tokenize("ab", 2));
    }

    #[test]
    fn active_index_is_always_a_valid_token_index() {
        let samples = ["", " ", "a", " a", "a ", "a  b", " a b ", "  ab  cd  ", "x\ty", "é  ü", "a b c d e"];
        for buffer in samples {
            for cursor in (0..=buffer.len()).filter(|c| buffer.is_char_boundary(*c)) {
                let first = tokenize(buffer, cursor);
                if let Some(index) = first.active_index {
                    assert!(index < first.tokens.len(), "buffer={buffer:?} cursor={cursor} info={first:?}");
                }
                assert_eq!(first, tokenize(buffer, cursor), "tokenize must be deterministic");
            }
        }
    }

    #[test]
    fn token_range_locates_fields() {
        assert_eq!(token_range(" alice  2", 1), Some(8..9));
        assert_eq!(token_range("alice", 3), None);
    }
}
