//! Line-oriented prompts over any `BufRead`/`Write` pair.
//!
//! The interactive binary wires these to stdin/stdout; tests feed a
//! `Cursor` with a scripted answer per line.

use std::io::{BufRead, Write};

use crate::errors::{AppError, AppResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer shared with the rest of the session output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one answer, lowercased.
    ///
    /// Only the line terminator is removed. Returns
    /// [`AppError::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(AppError::InputClosed);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_lowercase())
    }

    /// Ask until the answer is one of `allowed` (compared after lowercasing).
    /// Every rejected answer prints `invalid` and asks again.
    pub fn ask_choice<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        allowed: &[S],
        invalid: &str,
    ) -> AppResult<String> {
        loop {
            let answer = self.ask(prompt)?;
            if allowed.iter().any(|a| a.as_ref() == answer) {
                return Ok(answer);
            }
            writeln!(self.output, "{invalid}")?;
            log::debug!("rejected answer {answer:?} for prompt {prompt:?}");
        }
    }

    /// Strict yes/no: anything else is rejected with `invalid`.
    pub fn ask_yes_no(&mut self, prompt: &str, invalid: &str) -> AppResult<bool> {
        let answer = self.ask_choice(prompt, &["yes", "no"], invalid)?;
        Ok(answer == "yes")
    }

    /// Lenient confirmation: only the literal "yes" counts, everything else
    /// is a silent no.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        Ok(self.ask(prompt)? == "yes")
    }
}
