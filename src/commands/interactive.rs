//! Interactive command - menu-driven encode/decode loop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use emojihide::config::parse_carrier;
use emojihide::{decode_detailed, encode};

use super::{AppContext, CommandExecutor};

const MENU_PROMPT: &str = "Do you want to (e)ncode or (d)ecode? (Enter 'e' or 'd', or 'q' to quit): ";
const ENCODE_PROMPT: &str = "Enter the text you want to encode (press Ctrl+D (Unix/Linux) or Ctrl+Z (Windows) on an empty line to finish):";
const DECODE_PROMPT: &str = "Paste the encoded emoji here (press Enter):";

/// Run the interactive encode/decode menu (default when no command is given).
#[derive(Args, Debug, Default)]
pub struct InteractiveCommand {
    /// Carrier character (overrides the configured one)
    #[arg(short, long, value_parser = parse_carrier)]
    pub carrier: Option<char>,
}

impl CommandExecutor for InteractiveCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let carrier = ctx.carrier(self.carrier);
        let stdin = io::stdin();
        let stdout = io::stdout();

        Session::new(stdin.lock(), stdout.lock(), carrier)
            .run()
            .context("Interactive session failed")
    }
}

/// A prompt loop over any line-oriented input and any output.
pub struct Session<R, W> {
    input: R,
    output: W,
    carrier: char,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that attaches payloads to `carrier`.
    pub fn new(input: R, output: W, carrier: char) -> Self {
        Self {
            input,
            output,
            carrier,
        }
    }

    /// Runs until the user quits or input ends at the menu.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU_PROMPT)?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match choice.to_lowercase().as_str() {
                "e" => self.encode_step()?,
                "d" => self.decode_step()?,
                "q" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice. Please enter 'e', 'd', or 'q'.\n")?,
            }
        }
    }

    fn encode_step(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", ENCODE_PROMPT)?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        let input_text = lines.join("\n");

        if input_text.is_empty() {
            return writeln!(self.output, "No input provided.  Please try again.\n");
        }

        let encoded = encode(self.carrier, input_text.as_bytes());
        writeln!(self.output, "\nEncoded emoji (copy and paste this):")?;
        writeln!(self.output, "{}", encoded)
    }

    fn decode_step(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", DECODE_PROMPT)?;
        self.output.flush()?;

        let encoded = self.read_line()?.unwrap_or_default();
        if encoded.is_empty() {
            return writeln!(self.output, "No input provided. Please try again.\n");
        }

        let decoded = decode_detailed(&encoded);
        match decoded.as_text() {
            Ok(text) => {
                writeln!(self.output, "\nDecoded text:")?;
                writeln!(self.output, "{}", text)
            }
            Err(_) => {
                writeln!(self.output, "\nDecoded bytes (could not decode as UTF-8):")?;
                writeln!(self.output, "{}", decoded.escaped())
            }
        }
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> String {
        let mut session = Session::new(Cursor::new(input.as_bytes()), Vec::new(), '😊');
        session.run().unwrap();
        String::from_utf8(session.output).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let output = run_session("q\n");
        assert_eq!(output, MENU_PROMPT);
    }

    #[test]
    fn test_end_of_input_at_menu_ends_session() {
        let output = run_session("");
        assert!(output.starts_with(MENU_PROMPT));
    }

    #[test]
    fn test_invalid_choice() {
        let output = run_session("x\nq\n");
        assert!(output.contains("Invalid choice. Please enter 'e', 'd', or 'q'."));
        assert_eq!(output.matches(MENU_PROMPT).count(), 2);
    }

    #[test]
    fn test_padded_choice_is_invalid() {
        let output = run_session(" e\nd \nq\n");
        assert_eq!(
            output
                .matches("Invalid choice. Please enter 'e', 'd', or 'q'.")
                .count(),
            2
        );
        assert!(!output.contains(ENCODE_PROMPT));
        assert!(!output.contains(DECODE_PROMPT));
    }

    #[test]
    fn test_encode_joins_lines() {
        let output = run_session("e\nHi\nthere\n");
        let expected = encode('😊', b"Hi\nthere");
        assert!(output.contains("Encoded emoji (copy and paste this):"));
        assert!(output.contains(&expected));
    }

    #[test]
    fn test_encode_without_text() {
        let output = run_session("E\n");
        assert!(output.contains("No input provided.  Please try again."));
    }

    #[test]
    fn test_decode_text() {
        let encoded = encode('😊', b"Hi");
        let output = run_session(&format!("d\n{}\nq\n", encoded));
        assert!(output.contains("Decoded text:\nHi\n"));
    }

    #[test]
    fn test_decode_invalid_utf8_falls_back_to_bytes() {
        let encoded = encode('😊', &[0xff, 0xfe]);
        let output = run_session(&format!("d\n{}\nq\n", encoded));
        assert!(output.contains("Decoded bytes (could not decode as UTF-8):"));
        assert!(output.contains("b'\\xff\\xfe'"));
    }

    #[test]
    fn test_decode_empty_line() {
        let output = run_session("d\n\nq\n");
        assert!(output.contains("No input provided. Please try again."));
    }

    #[test]
    fn test_uses_session_carrier() {
        let mut session = Session::new(Cursor::new("e\nA".as_bytes()), Vec::new(), '*');
        session.run().unwrap();
        let output = String::from_utf8(session.output).unwrap();
        assert!(output.contains(&encode('*', b"A")));
    }
}
