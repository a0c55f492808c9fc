//! Sequential question/answer prompt for non-interactive use.
//!
//! When stdin is not a terminal, or answers were handed over on the command
//! line, the interactive widgets are replaced by this prompt: every question
//! is printed, and the answer is taken from a queue of pre-seeded answers
//! first and from the reader afterwards. A line containing several words
//! answers the current question with its first word and queues the rest for
//! the following questions.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use thiserror::Error;
use tracing::debug;

/// Placeholder in pre-seeded answers standing for "empty answer".
pub const EMPTY_ANSWER: &str = "@";

#[derive(Debug, Error)]
pub enum LinePromptError {
    #[error("line prompt I/O error: {0}")]
    Io(#[from] io::Error),
    /// The reader ran dry with no queued answer left.
    #[error("input closed before an answer was given")]
    Eof,
}

/// Question/answer prompt over any reader and writer.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    queue: VecDeque<String>,
}

impl LinePrompt<BufReader<Stdin>, Stdout> {
    /// Prompt over the process's stdin and stdout.
    pub fn stdio(answers: Vec<String>) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), answers)
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W, answers: Vec<String>) -> Self {
        Self {
            reader,
            writer,
            queue: answers.into(),
        }
    }

    /// Write `line` followed by a newline.
    pub fn say(&mut self, line: &str) -> Result<(), LinePromptError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Print `question` and return the normalized answer.
    ///
    /// Queued answers are echoed after the question so transcripts read the
    /// same as an interactive session.
    pub fn ask(&mut self, question: &str) -> Result<String, LinePromptError> {
        write!(self.writer, "{question}")?;
        let raw = match self.queue.pop_front() {
            Some(answer) => {
                writeln!(self.writer, "{answer}")?;
                answer
            }
            None => {
                self.writer.flush()?;
                self.read_answer()?
            }
        };
        let answer = normalize_answer(&raw);
        debug!(question = question.trim(), answer = %answer, queued = self.queue.len(), "line prompt answered");
        Ok(answer)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self) -> Result<String, LinePromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(LinePromptError::Eof);
        }
        let mut words = line.split_whitespace().map(str::to_string);
        let Some(first) = words.next() else {
            return Ok(String::new());
        };
        self.queue.extend(words);
        Ok(first)
    }
}

/// Split an `--exec` string into answers; [`EMPTY_ANSWER`] becomes `""`.
pub fn parse_answers(exec: &str) -> Vec<String> {
    exec.split_whitespace()
        .map(|word| if word == EMPTY_ANSWER { String::new() } else { word.to_string() })
        .collect()
}

// Numeric answers drop leading zeros so "02" picks the same entry as "2".
fn normalize_answer(raw: &str) -> String {
    let answer = raw.trim();
    if !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit()) {
        let stripped = answer.trim_start_matches('0');
        return if stripped.is_empty() { "0".to_string() } else { stripped.to_string() };
    }
    answer.to_string()
}
