//! Plain line-based shell
//!
//! Reads one answer per line and prints narration as text, so a game can be
//! played on a dumb terminal or driven from a script.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::game::{describe, Command, Crossroads, Investigator, Narration};
use crate::{MansionError, Result};

pub struct ConsoleInvestigator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleInvestigator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next line without its line ending, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// A line holding exactly one non-blank character is a key press.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Command::from_key(key),
        _ => Command::Unrecognized(trimmed.to_string()),
    }
}

impl<R: BufRead, W: Write> Investigator for ConsoleInvestigator<R, W> {
    fn narrate(&mut self, event: &Narration<'_>) -> Result<()> {
        if matches!(event, Narration::Arrived { .. } | Narration::EvidenceReview { .. }) {
            writeln!(self.output)?;
        }
        for message in describe(event) {
            writeln!(self.output, "{}", message.text)?;
        }
        Ok(())
    }

    fn choose(&mut self, crossroads: &Crossroads<'_>) -> Result<Command> {
        writeln!(self.output, "\nOptions:")?;
        if let Some(left) = crossroads.left {
            writeln!(self.output, "l - Go left ({})", left)?;
        }
        if let Some(right) = crossroads.right {
            writeln!(self.output, "r - Go right ({})", right)?;
        }
        writeln!(self.output, "s - Stop exploring")?;
        write!(self.output, "Option: ")?;
        self.output.flush()?;

        match self.read_line()? {
            Some(line) => Ok(parse_command(&line)),
            None => Ok(Command::Stop),
        }
    }

    fn name_suspect(&mut self, suspects: &[&str]) -> Result<String> {
        if !suspects.is_empty() {
            writeln!(self.output, "\nSuspects on file: {}", suspects.join(", "))?;
        }
        loop {
            write!(self.output, "Name the suspect to accuse: ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(name) if name.trim().is_empty() => continue,
                Some(name) => return Ok(name),
                None => return Err(MansionError::InputClosed.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleInvestigator<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInvestigator::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: ConsoleInvestigator<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("l"), Command::Left);
        assert_eq!(parse_command("  r "), Command::Right);
        assert_eq!(parse_command("s"), Command::Stop);
        assert_eq!(parse_command("left"), Command::Unrecognized("left".to_string()));
        assert_eq!(parse_command(""), Command::Unrecognized(String::new()));
    }

    #[test]
    fn test_choose_lists_only_existing_exits() {
        let mut console = console("r\n");
        let crossroads = Crossroads {
            room: "Kitchen",
            left: None,
            right: Some("Attic"),
        };
        assert_eq!(console.choose(&crossroads).unwrap(), Command::Right);

        let text = printed(console);
        assert!(text.contains("r - Go right (Attic)"));
        assert!(!text.contains("l - Go left"));
        assert!(text.contains("s - Stop exploring"));
    }

    #[test]
    fn test_end_of_input_stops_exploring() {
        let mut console = console("");
        let crossroads = Crossroads { room: "Attic", left: None, right: None };
        assert_eq!(console.choose(&crossroads).unwrap(), Command::Stop);
    }

    #[test]
    fn test_suspect_name_keeps_inner_spaces() {
        let mut console = console("\n  \nSuspect A \r\n");
        assert_eq!(console.name_suspect(&["Suspect A"]).unwrap(), "Suspect A ");
        assert!(printed(console).contains("Suspects on file: Suspect A"));
    }

    #[test]
    fn test_carriage_return_without_newline_is_stripped() {
        let mut console = console("Suspect B\r");
        assert_eq!(console.name_suspect(&[]).unwrap(), "Suspect B");
    }

    #[test]
    fn test_closed_input_while_accusing_is_an_error() {
        let mut console = console("");
        let err = console.name_suspect(&[]).unwrap_err();
        assert_eq!(err.downcast_ref::<MansionError>(), Some(&MansionError::InputClosed));
    }
}
