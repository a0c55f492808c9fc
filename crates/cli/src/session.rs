//! One run of the binary: interactive widgets or the sequential fallback.

use std::io::{self, BufRead, BufReader, IsTerminal, Stdin, Stdout, Write};

use anyhow::{Result, bail};
use scck_tui::{MenuPrompt, SectionPrompt};
use scck_types::PromptOutcome;
use scck_util::{LinePrompt, UserPreferences, parse_answers};
use tracing::{debug, info};

use crate::job::{JOB_TITLE, ask_job_line, job_schema, report};
use crate::menu::{self, MenuAction};

const MENU_QUESTION: &str = " -----> ";

pub struct Session<R, W> {
    preferences: UserPreferences,
    silent: bool,
    /// `Some` when answers are read line by line instead of through the
    /// interactive widgets.
    sequential: Option<LinePrompt<R, W>>,
}

impl Session<BufReader<Stdin>, Stdout> {
    /// Interactive when both ends are terminals and no answers were
    /// pre-seeded; sequential otherwise.
    pub fn from_stdio(exec: Option<&str>, silent: bool, preferences: UserPreferences) -> Self {
        let answers = exec.map(parse_answers).unwrap_or_default();
        let interactive = answers.is_empty() && io::stdin().is_terminal() && io::stdout().is_terminal();
        debug!(interactive, queued = answers.len(), "starting session");
        Self {
            preferences,
            silent,
            sequential: (!interactive).then(|| LinePrompt::stdio(answers)),
        }
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn sequential(prompt: LinePrompt<R, W>, silent: bool, preferences: UserPreferences) -> Self {
        Self {
            preferences,
            silent,
            sequential: Some(prompt),
        }
    }

    /// Show the main menu until an entry finishes or the user exits.
    pub fn run_menu(&mut self) -> Result<()> {
        let banner = menu::banner();
        let groups = menu::groups();
        loop {
            let input = match self.sequential.as_mut() {
                Some(prompt) => {
                    if !self.silent {
                        prompt.say(&menu::menu_text(&banner, &groups))?;
                    }
                    prompt.ask(MENU_QUESTION)?
                }
                None => match MenuPrompt::new(Some(&banner), groups.clone(), &self.preferences).run()? {
                    PromptOutcome::Submitted(line) => line,
                    PromptOutcome::Cancelled => return Ok(()),
                },
            };

            match menu::resolve(&input) {
                Some(MenuAction::Exit) => return Ok(()),
                Some(MenuAction::HelloWorld) => {
                    self.print("Hello, World!")?;
                    return Ok(());
                }
                Some(MenuAction::JobParameters) => {
                    if self.run_job()? {
                        return Ok(());
                    }
                }
                None if self.sequential.is_some() => bail!("menu entry `{}` not found", input.trim()),
                None => info!(input = input.trim(), "no menu entry matches"),
            }
        }
    }

    /// Collect job parameters and print them. Returns `false` when the
    /// interactive prompt was cancelled, so the menu can be shown again.
    pub fn run_job(&mut self) -> Result<bool> {
        let schema = job_schema()?;
        let line = match self.sequential.as_mut() {
            Some(prompt) => ask_job_line(prompt, &schema)?,
            None => match SectionPrompt::new(JOB_TITLE, schema.clone(), &self.preferences).run()? {
                PromptOutcome::Submitted(line) => line,
                PromptOutcome::Cancelled => return Ok(false),
            },
        };
        debug!(line = %line, "job parameters submitted");
        self.print(report(&schema, &line).trim_end())?;
        Ok(true)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        match self.sequential.as_mut() {
            Some(prompt) => prompt.say(text)?,
            None => println!("{text}"),
        }
        Ok(())
    }

    pub fn into_prompt(self) -> Option<LinePrompt<R, W>> {
        self.sequential
    }
}
