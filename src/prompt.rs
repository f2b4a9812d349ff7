//! Interactive fallback prompts.
//!
//! Used when neither the command line nor the config file supplies any
//! setting. Generic over input and output so the retry loops can be driven
//! from tests with in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::types::split_list;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `text` and read one trimmed line. EOF reads as empty.
    pub fn line(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(buf.trim().to_string())
    }

    /// Read a comma-separated list; empty answer = empty list.
    pub fn list(&mut self, text: &str) -> io::Result<Vec<String>> {
        let answer = self.line(text)?;
        Ok(split_list(&answer))
    }

    /// Read a depth limit, asking again until the answer is empty
    /// (unlimited) or a non-negative integer.
    pub fn depth(&mut self, text: &str) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "{}", text)?;
            self.output.flush()?;

            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(None);
            }

            let answer = buf.trim();
            if answer.is_empty() {
                return Ok(None);
            }

            match answer.parse::<i64>() {
                Ok(value) if value >= 0 => return Ok(Some(value as usize)),
                Ok(_) => writeln!(self.output, "Please enter a non-negative number for depth.")?,
                Err(_) => writeln!(
                    self.output,
                    "Invalid input. Please enter a number or leave empty."
                )?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
