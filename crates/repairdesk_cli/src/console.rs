//! Line-oriented form widgets over any reader/writer pair.
//!
//! # Responsibility
//! - Render headings, status messages and prompts.
//! - Read text, date, choice and confirmation input.
//!
//! # Invariants
//! - Pressing Enter on a prefilled widget keeps the shown value.
//! - `-` clears a value, and only where the widget allows clearing; `\-`
//!   stores a literal dash.
//! - Text values are kept as typed; only the line ending is removed.
//! - End of input surfaces as `UiError::InputClosed`, never as an empty answer.

use crate::error::{UiError, UiResult};
use chrono::NaiveDate;
use repairdesk_core::RepairRequestId;
use std::fmt::Display;
use std::io::{BufRead, Write};

const CLEAR_TOKEN: &str = "-";
const LITERAL_DASH: &str = "\\-";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Console<In, Out> {
    input: In,
    output: Out,
}

impl<In: BufRead, Out: Write> Console<In, Out> {
    pub fn new(input: In, output: Out) -> Self {
        Self { input, output }
    }

    /// Gives back the writer, so tests can inspect what was rendered.
    pub fn into_output(self) -> Out {
        self.output
    }

    pub fn title(&mut self, text: &str) -> UiResult<()> {
        writeln!(self.output, "{text}")?;
        writeln!(self.output, "{}", "=".repeat(text.chars().count()))?;
        Ok(())
    }

    pub fn header(&mut self, text: &str) -> UiResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{text}")?;
        writeln!(self.output, "{}", "-".repeat(text.chars().count()))?;
        Ok(())
    }

    pub fn line(&mut self, text: impl Display) -> UiResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn success(&mut self, message: &str) -> UiResult<()> {
        self.line(format_args!("[ok] {message}"))
    }

    pub fn error(&mut self, message: &str) -> UiResult<()> {
        self.line(format_args!("[error] {message}"))
    }

    pub fn info(&mut self, message: &str) -> UiResult<()> {
        self.line(format_args!("[info] {message}"))
    }

    /// Text widget. Returns `current` on Enter, an empty string on `-` and
    /// `-` itself on `\-`. Anything else is returned untrimmed.
    pub fn text_input(&mut self, label: &str, current: &str) -> UiResult<String> {
        let answer = self.read_answer(&prompt_label(label, current))?;
        Ok(match answer.as_str() {
            "" => current.to_string(),
            CLEAR_TOKEN => String::new(),
            LITERAL_DASH => CLEAR_TOKEN.to_string(),
            _ => answer,
        })
    }

    /// Date widget accepting `YYYY-MM-DD`; re-asks until the input parses.
    pub fn date_input(
        &mut self,
        label: &str,
        current: Option<NaiveDate>,
        clearable: bool,
    ) -> UiResult<Option<NaiveDate>> {
        let shown = current
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        let prompt = prompt_label(&format!("{label} (YYYY-MM-DD)"), &shown);

        loop {
            let answer = self.ask(&prompt)?;
            match answer.as_str() {
                "" => return Ok(current),
                CLEAR_TOKEN if clearable => return Ok(None),
                CLEAR_TOKEN => self.error(&format!("{label} cannot be cleared."))?,
                _ => match NaiveDate::parse_from_str(&answer, DATE_FORMAT) {
                    Ok(date) => return Ok(Some(date)),
                    Err(_) => {
                        self.error(&format!("`{answer}` is not a date; use YYYY-MM-DD."))?
                    }
                },
            }
        }
    }

    /// Numbered choice. Accepts the 1-based number or the option text.
    pub fn select(&mut self, label: &str, options: &[&str]) -> UiResult<Option<usize>> {
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", index + 1)?;
        }
        let answer = self.ask(&format!("{label}: "))?;

        if let Ok(number) = answer.parse::<usize>() {
            return Ok((1..=options.len()).contains(&number).then(|| number - 1));
        }
        Ok(options
            .iter()
            .position(|option| option.eq_ignore_ascii_case(&answer)))
    }

    /// Lists the known identifiers and reads one back.
    ///
    /// Returns `None` when the answer is not a number; membership is left to
    /// the caller.
    pub fn select_id(
        &mut self,
        label: &str,
        ids: &[RepairRequestId],
    ) -> UiResult<Option<RepairRequestId>> {
        let listed = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.line(format_args!("Available IDs: {listed}"))?;
        let answer = self.ask(&format!("{label}: "))?;
        Ok(answer.parse::<RepairRequestId>().ok())
    }

    pub fn confirm(&mut self, label: &str) -> UiResult<bool> {
        let answer = self.ask(&format!("{label} [y/N]: "))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    /// Reads a menu, id, date or confirmation answer, trimmed.
    fn ask(&mut self, prompt: &str) -> UiResult<String> {
        Ok(self.read_answer(prompt)?.trim().to_string())
    }

    /// Reads one line with its line ending removed and nothing else touched.
    fn read_answer(&mut self, prompt: &str) -> UiResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            writeln!(self.output)?;
            return Err(UiError::InputClosed);
        }
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(buffer)
    }
}

fn prompt_label(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{current}]: ")
    }
}
