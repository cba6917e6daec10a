//! CLI commands.

mod decode;
mod encode;
mod inspect;

use anyhow::{Context, Result};
use chv_id::PublicIdCodec;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// CaroHans Ventures ID tool - translate between record keys and public IDs.
#[derive(Debug, Parser)]
#[command(name = "chv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Base salt for public IDs.
    #[arg(long, global = true, env = "CHV_ID_SALT", hide_env_values = true)]
    salt: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode primary keys into public IDs.
    Encode(encode::EncodeCommand),

    /// Decode public IDs or bare tokens back into primary keys.
    Decode(decode::DecodeCommand),

    /// Show how lookup input would be interpreted.
    Inspect(inspect::InspectCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        if let Commands::Version = self.command {
            println!("chv {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        let format = OutputFormat::from_flag(&self.format);
        let config = Config::load()?;
        let codec = build_codec(&config, self.salt)?;

        let ctx = CommandContext { codec, format };

        match self.command {
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Inspect(cmd) => cmd.run(ctx),
            Commands::Version => Ok(()),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub codec: PublicIdCodec,
    pub format: OutputFormat,
}

fn build_codec(config: &Config, salt: Option<String>) -> Result<PublicIdCodec> {
    PublicIdCodec::new(&config.codec_config(salt))
        .map_err(CliError::from)
        .context("Failed to build ID codec")
}

fn display_option<T: std::fmt::Display>(opt: &Option<T>) -> String {
    opt.as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}
