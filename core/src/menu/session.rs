use std::io::{BufRead, Write};

use crate::config::AppConfig;
use crate::errors::MenuError;

use super::input::read_line;
use super::operation::Operation;
use super::outcome::Outcome;

pub const SELECTION_PROMPT: &str = "Choose a number: ";

pub fn parameter_prompt(op: Operation) -> String {
    format!("Choose a parameter of type {}: ", op.param_kind())
}

/// One menu interaction: list, select, read parameter, run, print.
///
/// Answers given up front (`--choice` / `--param`) are echoed after their
/// prompt instead of being read.
#[derive(Debug, Clone)]
pub struct MenuSession<'a> {
    config: &'a AppConfig,
    choice: Option<String>,
    param: Option<String>,
}

impl<'a> MenuSession<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            choice: None,
            param: None,
        }
    }

    pub fn with_choice(mut self, choice: Option<String>) -> Self {
        self.choice = choice;
        self
    }

    pub fn with_param(mut self, param: Option<String>) -> Self {
        self.param = param;
        self
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<Outcome, MenuError> {
        write_menu(writer)?;

        let selection = answer(
            reader,
            writer,
            SELECTION_PROMPT,
            self.choice.as_deref(),
            "the selection",
        )?;
        let op = Operation::from_selection(&selection)?;
        tracing::info!(operation = %op, "selected");

        let raw = answer(
            reader,
            writer,
            &parameter_prompt(op),
            self.param.as_deref(),
            "the parameter",
        )?;
        let outcome = op.run(&raw, self.config)?;

        writeln!(writer, "{outcome}")?;
        writer.flush()?;
        Ok(outcome)
    }
}

pub fn write_menu<W: Write>(writer: &mut W) -> std::io::Result<()> {
    for (i, op) in Operation::ALL.iter().enumerate() {
        writeln!(writer, "{}: {}", i + 1, op)?;
    }
    Ok(())
}

fn answer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    preset: Option<&str>,
    what: &'static str,
) -> Result<String, MenuError> {
    write!(writer, "{prompt}")?;
    if let Some(preset) = preset {
        writeln!(writer, "{preset}")?;
        return Ok(preset.to_string());
    }
    writer.flush()?;

    read_line(reader)?.ok_or(MenuError::MissingInput(what))
}
