//! Line handling for one debugger session.

use anyhow::{Result, bail};
use tapdbg::prelude::*;
use tracing::debug;

/// What the front end should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing to print
    Empty,
    /// Text to print as-is
    Output(String),
    /// End the session
    Quit,
}

/// How successful results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Formatted by the command
    Text,
    /// Raw result attribute as JSON
    Json,
}

pub struct Session<C> {
    command: C,
    mode: OutputMode,
}

impl<C: Command> Session<C> {
    pub fn new(command: C, mode: OutputMode) -> Self {
        Self { command, mode }
    }

    /// Handle one command line
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        let invocation = Invocation::parse(line);
        let Some(name) = invocation.name() else {
            return Ok(Outcome::Empty);
        };

        match name {
            "quit" | "exit" => Ok(Outcome::Quit),
            "help" => Ok(Outcome::Output(self.help())),
            _ => self.execute(&invocation).map(Outcome::Output),
        }
    }

    fn help(&self) -> String {
        format!(
            "{:<8}{}\n{:<8}Show this help\n{:<8}End the session\n\n{}",
            self.command.name(),
            self.command.brief(),
            "help",
            "quit",
            self.command.detail()
        )
    }

    fn execute(&mut self, invocation: &Invocation) -> Result<String> {
        if invocation.name() != Some(self.command.name()) {
            bail!(
                "Unknown command: {}. Type `help` for usage.",
                invocation[0]
            );
        }
        if !self.command.is_valid(invocation) {
            bail!("Invalid arguments.\n{}", self.command.detail());
        }

        debug!("Executing: {}", invocation);
        let mut res = Attribute::Nil;
        self.command.exec(invocation, &mut res)?;

        match self.mode {
            OutputMode::Text => Ok(self.command.format(invocation, &res)?),
            OutputMode::Json => Ok(format!("{}\n", serde_json::to_string(&res)?)),
        }
    }
}
