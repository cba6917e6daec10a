//! `chv inspect` - how a search box would treat some input.

use anyhow::Result;
use chv_id::{looks_like_public_id, LookupKey, PublicIdCodec, RecordKind};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Classify lookup input the way the portal search does.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Record kind being searched.
    #[arg(long, default_value = "order")]
    kind: RecordKind,

    /// Raw search input.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub(super) struct InspectRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Public ID shape")]
    public_id_shape: bool,

    #[tabled(rename = "Token shape")]
    token_shape: bool,

    #[tabled(rename = "Lookup", display = "display_lookup")]
    lookup: LookupKey,
}

fn display_lookup(lookup: &LookupKey) -> String {
    match lookup {
        LookupKey::Record { kind, id } => format!("{kind} #{id}"),
        LookupKey::SearchTerm { term } => format!("search {term:?}"),
    }
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = inspect_rows(&ctx.codec, self.kind, &self.inputs);
        print_output(&rows, ctx.format);
        Ok(())
    }
}

pub(super) fn inspect_rows(
    codec: &PublicIdCodec,
    kind: RecordKind,
    inputs: &[String],
) -> Vec<InspectRow> {
    inputs
        .iter()
        .map(|input| InspectRow {
            input: input.clone(),
            public_id_shape: looks_like_public_id(input.trim()),
            token_shape: codec.looks_like_token(input.trim()),
            lookup: codec.resolve_lookup(kind, input),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chv_id::CodecConfig;

    use super::*;

    #[test]
    fn test_inspect_rows() {
        let codec = PublicIdCodec::new(&CodecConfig::new("test-salt")).unwrap();
        let inputs = vec!["ORD-JL995L".to_string(), "pressure washer".to_string()];
        let rows = inspect_rows(&codec, RecordKind::Order, &inputs);

        assert!(rows[0].public_id_shape);
        assert!(rows[0].token_shape);
        assert_eq!(rows[0].lookup.record_id(), Some(101));
        assert_eq!(display_lookup(&rows[0].lookup), "order #101");

        assert!(!rows[1].public_id_shape);
        assert!(!rows[1].token_shape);
        assert_eq!(display_lookup(&rows[1].lookup), "search \"pressure washer\"");
    }
}
