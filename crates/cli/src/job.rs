//! Job parameter prompt: the schema, the sequential fallback and the report.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use regex::Regex;
use scck_types::{BoundField, MenuLayout, Schema, Section};
use scck_util::{LinePrompt, LinePromptError};

pub const JOB_TITLE: &str = "Job parameters";

const USERS: [&str; 3] = ["alice", "bob", "carol"];
const TIME_LIMIT_PATTERN: &str = r"^\d+-\d{2}-\d{2}-\d{2}$";

/// `user nodes cores time-limit`, in that order.
pub fn job_schema() -> Result<Schema> {
    let time_limit = Regex::new(TIME_LIMIT_PATTERN).context("invalid time-limit pattern")?;
    let schema = Schema::new(vec![
        Section::menu("user", USERS)
            .with_layout(MenuLayout::Vertical)
            .with_help("Account submitting the job"),
        Section::menu("nodes", ["1", "2", "3", "4"]).with_help("Number of nodes"),
        Section::text("cores")
            .with_validator(|value| value.parse::<u32>().is_ok_and(|cores| cores > 0))
            .with_suggestions(["32"])
            .with_help("CPU cores per node"),
        Section::text("time-limit")
            .with_validator(move |value| time_limit.is_match(value))
            .with_suggestions(["0-01-00-00"])
            .with_help("Wall time as d-HH-MM-SS"),
    ])?;
    Ok(schema)
}

/// Ask one question per section and join the answers into a line.
///
/// An empty answer takes the section's default. A field with neither an
/// answer nor a default ends the line, so later fields fall back to their
/// own defaults when the line is bound.
pub fn ask_job_line<R: BufRead, W: Write>(
    prompt: &mut LinePrompt<R, W>,
    schema: &Schema,
) -> Result<String, LinePromptError> {
    let mut values = Vec::with_capacity(schema.len());
    for section in schema {
        let mut question = format!(" {}", section.name);
        if section.is_menu() {
            let _ = write!(question, " ({})", section.options().join("/"));
        }
        if let Some(default) = section.default_suggestion() {
            let _ = write!(question, " [{default}]");
        }
        question.push_str(": ");

        let answer = prompt.ask(&question)?;
        match (answer.is_empty(), section.default_suggestion()) {
            (false, _) => values.push(answer),
            (true, Some(default)) => values.push(default.to_string()),
            (true, None) => break,
        }
    }
    Ok(values.join(" "))
}

/// One `name = value` line per field, plus any ignored surplus tokens.
pub fn report(schema: &Schema, line: &str) -> String {
    let fields = schema.bind(line);
    let width = fields.iter().map(|field| field.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for field in &fields {
        let _ = writeln!(out, "{}", field_line(field, width));
    }
    let surplus = schema.surplus(line);
    if !surplus.is_empty() {
        let _ = writeln!(out, "ignored extra values: {}", surplus.join(" "));
    }
    out
}

fn field_line(field: &BoundField, width: usize) -> String {
    let value = field.value.as_deref().unwrap_or("<unset>");
    let mut line = format!("{:<width$} = {value}", field.name);
    if !field.provided && field.value.is_some() {
        line.push_str(" (default)");
    }
    if !field.valid {
        line.push_str("  ✖ invalid");
    }
    line
}
