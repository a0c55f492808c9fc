//! # Whitespace Lexing Utilities
//!
//! Splits an input line into whitespace-delimited tokens while keeping their
//! byte positions, so that callers can both read and rewrite individual
//! fields of the line.

/// Token with original byte positions.
///
/// # Fields
/// * `text` - The text content of the token
/// * `start` - The starting byte position in the original string
/// * `end` - The ending byte position in the original string (exclusive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexToken<'a> {
    /// The text content of the token
    pub text: &'a str,
    /// The starting byte position in the original string
    pub start: usize,
    /// The ending byte position in the original string
    pub end: usize,
}

/// Tokenize input returning borrowed slices and byte ranges.
///
/// Any Unicode whitespace separates tokens; runs of whitespace never produce
/// empty tokens.
///
/// # Example
/// ```rust
/// use scck_util::whitespace_lexing::lex_whitespace_ranged;
///
/// let tokens = lex_whitespace_ranged("alice  bob");
/// assert_eq!(tokens[1].text, "bob");
/// assert_eq!((tokens[1].start, tokens[1].end), (7, 10));
/// ```
pub fn lex_whitespace_ranged(input: &str) -> Vec<LexToken<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (index, ch) in input.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(token_start)) => {
                tokens.push(LexToken {
                    text: &input[token_start..index],
                    start: token_start,
                    end: index,
                });
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }

    if let Some(token_start) = start {
        tokens.push(LexToken {
            text: &input[token_start..],
            start: token_start,
            end: input.len(),
        });
    }

    tokens
}
