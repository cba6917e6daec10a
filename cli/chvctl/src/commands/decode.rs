//! `chv decode` - public IDs back to primary keys.

use anyhow::Result;
use chv_id::{PublicIdCodec, RecordKind};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::{display_option, CommandContext};

/// Decode public IDs or bare tokens.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Record kind. Required for bare tokens; inferred from the prefix otherwise.
    #[arg(long)]
    kind: Option<RecordKind>,

    /// Public IDs (ORD-XXXXXX, CUS-XXXXXX) or bare tokens.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub(super) struct DecodeRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Kind", display = "display_option")]
    kind: Option<RecordKind>,

    #[tabled(rename = "ID", display = "display_option")]
    id: Option<u64>,
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = decode_rows(&ctx.codec, self.kind, &self.inputs);
        print_output(&rows, ctx.format);

        let failed = rows.iter().filter(|row| row.id.is_none()).count();
        if failed > 0 {
            return Err(CliError::Undecodable {
                count: failed,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

pub(super) fn decode_rows(
    codec: &PublicIdCodec,
    kind: Option<RecordKind>,
    inputs: &[String],
) -> Vec<DecodeRow> {
    inputs
        .iter()
        .map(|input| {
            let decoded = match kind {
                Some(kind) => codec.decode(kind, input).map(|id| (kind, id)),
                None => codec.decode_any(input),
            };
            tracing::debug!(input = %input, decoded = decoded.is_some(), "decode");
            DecodeRow {
                input: input.clone(),
                kind: decoded.map(|(kind, _)| kind).or(kind),
                id: decoded.map(|(_, id)| id),
            }
        })
        .collect()
}
