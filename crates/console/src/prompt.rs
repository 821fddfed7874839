//! Line-oriented prompts over any reader/writer pair.

use std::io::{BufRead, Write};

use stocktrack_core::{DomainError, DomainResult};
use stocktrack_products::Price;

use crate::error::{ConsoleError, ConsoleResult};

/// A reader/writer pair the menu talks through.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one full line.
    pub fn say(&mut self, line: impl core::fmt::Display) -> ConsoleResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `label` (no newline) and read one line, without its line ending.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled
    /// line is just an unparsable answer. Returns [`ConsoleError::InputClosed`]
    /// at end of input.
    pub fn read_line(&mut self, label: &str) -> ConsoleResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Keep asking until `parse` accepts the (trimmed) answer.
    pub fn prompt_parsed<T>(
        &mut self,
        label: &str,
        error_line: &str,
        parse: impl Fn(&str) -> DomainResult<T>,
    ) -> ConsoleResult<T> {
        loop {
            let answer = self.read_line(label)?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(%err, "re-prompting after rejected input");
                    self.say(error_line)?;
                }
            }
        }
    }

    /// Ask for a whole number until one is given.
    pub fn prompt_int(&mut self, label: &str) -> ConsoleResult<i64> {
        self.prompt_parsed(label, "Error: enter a valid whole number!", parse_int)
    }

    /// Ask for a number (fractions allowed) until one is given.
    pub fn prompt_float(&mut self, label: &str) -> ConsoleResult<f64> {
        self.prompt_parsed(label, "Error: enter a valid number!", parse_float)
    }

    /// Ask for a price until a finite, non-negative amount is given.
    pub fn prompt_price(&mut self, label: &str) -> ConsoleResult<Price> {
        loop {
            let amount = self.prompt_float(label)?;
            match Price::non_negative(amount) {
                Ok(price) => return Ok(price),
                Err(err) => {
                    tracing::debug!(%err, "re-prompting for price");
                    self.say("Error: price must be a finite, non-negative amount!")?;
                }
            }
        }
    }

    /// Ask a y/n question until the answer is one of the two (any case).
    pub fn prompt_yes_no(&mut self, label: &str) -> ConsoleResult<bool> {
        loop {
            let answer = self.read_line(label)?;
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Please answer 'y' or 'n' only!")?,
            }
        }
    }
}

/// Parse a trimmed whole number, e.g. `" 12 "` or `"+3"`.
pub fn parse_int(text: &str) -> DomainResult<i64> {
    let text = text.trim();
    text.parse()
        .map_err(|_| DomainError::invalid_input(format!("not a whole number: {text:?}")))
}

pub fn parse_float(text: &str) -> DomainResult<f64> {
    let text = text.trim();
    text.parse()
        .map_err(|_| DomainError::invalid_input(format!("not a number: {text:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn read_line_strips_line_endings_only() {
        let mut c = console("  Kaos  \r\nnext\n");
        assert_eq!(c.read_line("Name: ").unwrap(), "  Kaos  ");
        assert_eq!(c.read_line("Name: ").unwrap(), "next");
        assert_eq!(printed(c), "Name: Name: ");
    }

    #[test]
    fn read_line_replaces_invalid_utf8() {
        let mut c = Console::new(Cursor::new(b"\xff\xfe2\nok\n".to_vec()), Vec::new());
        assert_eq!(c.read_line("> ").unwrap(), "\u{FFFD}\u{FFFD}2");
        assert_eq!(c.read_line("> ").unwrap(), "ok");
    }

    #[test]
    fn prompt_int_retries_after_invalid_utf8() {
        let mut c = Console::new(Cursor::new(b"\xff\n7\n".to_vec()), Vec::new());
        assert_eq!(c.prompt_int("Stock: ").unwrap(), 7);
        assert_eq!(
            printed(c).matches("Error: enter a valid whole number!").count(),
            1
        );
    }

    #[test]
    fn read_line_reports_closed_input() {
        let mut c = console("");
        assert!(matches!(c.read_line("> "), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn prompt_int_retries_until_valid() {
        let mut c = console("abc\n1.5\n\n 42 \n");
        assert_eq!(c.prompt_int("Stock: ").unwrap(), 42);
        assert_eq!(
            printed(c).matches("Error: enter a valid whole number!").count(),
            3
        );
    }

    #[test]
    fn prompt_int_accepts_negative_values() {
        let mut c = console("-3\n");
        assert_eq!(c.prompt_int("Stock: ").unwrap(), -3);
    }

    #[test]
    fn prompt_float_retries_until_valid() {
        let mut c = console("Rp10\n12500.75\n");
        assert_eq!(c.prompt_float("Price: ").unwrap(), 12_500.75);
        assert_eq!(printed(c).matches("Error: enter a valid number!").count(), 1);
    }

    #[test]
    fn prompt_price_rejects_garbage_negative_and_non_finite() {
        let mut c = console("mahal\n-5\nnan\ninf\n15000\n");
        assert_eq!(c.prompt_price("Price (Rp): ").unwrap(), Price::new(15_000.0));

        let out = printed(c);
        assert_eq!(out.matches("Error: enter a valid number!").count(), 1);
        assert_eq!(
            out.matches("Error: price must be a finite, non-negative amount!")
                .count(),
            3
        );
    }

    #[test]
    fn prompt_gives_up_when_input_closes() {
        let mut c = console("nope\n");
        assert!(matches!(c.prompt_int("Stock: "), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn prompt_yes_no_is_case_insensitive_and_repeats() {
        let mut c = console("maybe\n Y \n");
        assert!(c.prompt_yes_no("(y/n): ").unwrap());
        assert_eq!(printed(c).matches("Please answer 'y' or 'n' only!").count(), 1);

        let mut c = console("N\n");
        assert!(!c.prompt_yes_no("(y/n): ").unwrap());
    }

    #[test]
    fn parse_int_trims_and_rejects_garbage() {
        assert_eq!(parse_int(" +7 ").unwrap(), 7);
        assert!(parse_int("7a").is_err());
        assert!(parse_int("").is_err());
    }
}
