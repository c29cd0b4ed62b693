//! Decode command - recover the bytes hidden behind a carrier.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use emojihide::decode_detailed;

use super::{AppContext, CommandExecutor};

/// Recover the bytes hidden behind a carrier character.
///
/// NOTE: Decoding itself never fails - characters that are not variation
/// selectors are skipped. Without --output the payload is printed as text,
/// or as an escaped byte literal when it is not valid UTF-8.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// The encoded string (direct text)
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the encoded string from a text file
    #[arg(long, conflicts_with = "code")]
    pub code_file: Option<PathBuf>,

    /// Write the raw decoded bytes to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report the carrier and skipped characters
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, _ctx: &AppContext) -> Result<()> {
        let code = self.read_code()?;
        let code = strip_trailing_newlines(&code);
        if code.is_empty() {
            anyhow::bail!("No input provided");
        }

        let decoded = decode_detailed(code);

        if self.verbose {
            if let Some(carrier) = decoded.carrier {
                eprintln!("Carrier: {} ({})", carrier, carrier.escape_unicode());
            }
            eprintln!("Decoded bytes: {}", decoded.data.len());
            eprintln!("Skipped characters: {}", decoded.skipped);
        }

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, &decoded.data)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!("Decoded {} bytes to {}", decoded.data.len(), output_path.display());
            return Ok(());
        }

        match decoded.as_text() {
            Ok(text) => println!("{}", text),
            Err(_) => {
                eprintln!("Decoded bytes (could not decode as UTF-8):");
                println!("{}", decoded.escaped());
            }
        }

        Ok(())
    }
}

/// Removes trailing line terminators only; the carrier at position 0 is kept
/// even when it is whitespace.
fn strip_trailing_newlines(code: &str) -> &str {
    code.trim_end_matches(&['\r', '\n'][..])
}

impl DecodeCommand {
    /// Resolves the encoded string from the various input sources.
    fn read_code(&self) -> Result<String> {
        if let Some(code) = &self.code {
            return Ok(code.clone());
        }

        if let Some(path) = &self.code_file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read code from {}", path.display()));
        }

        eprintln!("Paste the encoded string (Ctrl+D to finish):");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read code from stdin")?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojihide::{decode, encode};

    #[test]
    fn test_strip_keeps_selector_carrier() {
        let code = strip_trailing_newlines("\u{FE00}\u{FE05}\r\n");
        assert_eq!(code, "\u{FE00}\u{FE05}");
        assert_eq!(decode(code), vec![5]);
    }

    #[test]
    fn test_strip_keeps_leading_whitespace_carrier() {
        let encoded = encode(' ', b"ok");
        let input = format!("{}\n\n", encoded);

        let code = strip_trailing_newlines(&input);
        assert_eq!(code, encoded);
        assert_eq!(decode(code), b"ok");
    }

    #[test]
    fn test_strip_only_newlines_is_empty() {
        assert_eq!(strip_trailing_newlines("\r\n"), "");
        assert_eq!(strip_trailing_newlines(""), "");
    }
}
