//! Encode command - hide a message or file behind a carrier character.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use emojihide::config::parse_carrier;
use emojihide::encode;

use super::{strip_line_ending, AppContext, CommandExecutor};

/// Hide a message or file behind a carrier character.
///
/// The payload is read from --message, --file, or stdin (in that order).
/// The output looks like the carrier alone in most renderers.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Text message to encode (mutually exclusive with --file)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// File whose raw bytes are encoded (mutually exclusive with --message)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Carrier character (overrides the configured one)
    #[arg(short, long, value_parser = parse_carrier)]
    pub carrier: Option<char>,

    /// Write the encoded string to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let data = self.read_payload()?;
        if data.is_empty() {
            anyhow::bail!("No input provided");
        }

        let carrier = ctx.carrier(self.carrier);
        debug!(bytes = data.len(), carrier = %carrier.escape_unicode(), "encoding payload");

        let encoded = encode(carrier, &data);

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, &encoded)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!("Encoded {} bytes to {}", data.len(), output_path.display());
        } else {
            println!("{}", encoded);
        }

        Ok(())
    }
}

impl EncodeCommand {
    /// Resolves the payload from the various input sources.
    fn read_payload(&self) -> Result<Vec<u8>> {
        if let Some(message) = &self.message {
            return Ok(message.as_bytes().to_vec());
        }

        if let Some(path) = &self.file {
            return std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }

        eprintln!("Reading message from stdin (Ctrl+D to finish):");
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read message from stdin")?;
        strip_line_ending(&mut buffer);
        Ok(buffer)
    }
}
