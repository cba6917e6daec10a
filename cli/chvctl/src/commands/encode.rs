//! `chv encode` - primary keys to public IDs.

use anyhow::{Context, Result};
use chv_id::{IdError, PublicIdCodec, RecordKind};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Encode primary keys into public IDs.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Record kind (order or client).
    kind: RecordKind,

    /// Primary keys to encode (0 to 18446744073709551615).
    #[arg(required = true, allow_negative_numbers = true)]
    ids: Vec<i128>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub(super) struct EncodeRow {
    #[tabled(rename = "Kind")]
    kind: RecordKind,

    #[tabled(rename = "ID")]
    id: u64,

    #[tabled(rename = "Public ID")]
    public_id: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = encode_rows(&ctx.codec, self.kind, &self.ids)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

pub(super) fn encode_rows(
    codec: &PublicIdCodec,
    kind: RecordKind,
    ids: &[i128],
) -> Result<Vec<EncodeRow>> {
    ids.iter()
        .map(|&id| {
            let key = primary_key(id).with_context(|| format!("Failed to encode {kind} {id}"))?;
            Ok(EncodeRow {
                kind,
                id: key,
                public_id: codec.encode(kind, key),
            })
        })
        .collect()
}

fn primary_key(id: i128) -> Result<u64, CliError> {
    if let Ok(key) = u64::try_from(id) {
        return Ok(key);
    }
    match i64::try_from(id) {
        Ok(negative) => Err(IdError::NegativeId(negative).into()),
        Err(_) => Err(CliError::KeyOutOfRange(id)),
    }
}
