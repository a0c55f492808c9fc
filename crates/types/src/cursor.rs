//! Snapshot of "which field is being edited" derived from the input line.

/// Tokens of the input line plus the location of the cursor among them.
///
/// Recomputed from scratch on every buffer or cursor change; see
/// `scck_util::command_cursor::tokenize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorInfo {
    /// Whitespace-split tokens. A synthetic trailing `""` is present when the
    /// cursor sits right after trailing whitespace.
    pub tokens: Vec<String>,
    /// Token holding the cursor; `None` when the cursor is in a gap between
    /// tokens.
    pub active_index: Option<usize>,
    /// Cursor offset inside the active token, in characters.
    pub active_offset: usize,
}

impl Default for CursorInfo {
    /// State of an empty line with the cursor at position zero.
    fn default() -> Self {
        Self {
            tokens: vec![String::new()],
            active_index: Some(0),
            active_offset: 0,
        }
    }
}

impl CursorInfo {
    pub fn new(tokens: Vec<String>, active_index: Option<usize>, active_offset: usize) -> Self {
        Self {
            tokens,
            active_index,
            active_offset,
        }
    }

    /// Active index restricted to a schema of `field_count` sections.
    ///
    /// Tokens typed beyond the last section have no field, so they are
    /// reported as "no active field".
    pub fn active_field(&self, field_count: usize) -> Option<usize> {
        self.active_index.filter(|index| *index < field_count)
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Text of the active token, if the cursor is inside one.
    pub fn active_token(&self) -> Option<&str> {
        self.active_index.and_then(|index| self.token(index))
    }

    /// Whether the cursor sits at the end of the active token.
    pub fn at_token_end(&self) -> bool {
        self.active_token()
            .is_some_and(|token| token.chars().count() == self.active_offset)
    }
}
