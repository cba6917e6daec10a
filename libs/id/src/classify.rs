//! Heuristics for deciding what a user-supplied string is.
//!
//! Search boxes and URL segments receive public IDs, bare tokens, and free
//! text alike. These helpers decide whether decoding is worth attempting and
//! fall back to a literal search term when it is not.

use serde::Serialize;

use crate::codec::PublicIdCodec;
use crate::config::{DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH};
use crate::types::RecordKind;

/// True if `s` matches `^(ORD|CUS)-[A-Z0-9]+$`, ignoring ASCII case.
///
/// This is a shape check only; `ORD-000` passes even though it can never
/// decode.
pub fn looks_like_public_id(s: &str) -> bool {
    let Some((prefix, rest)) = s.split_once('-') else {
        return false;
    };
    RecordKind::from_prefix(prefix).is_some()
        && !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_alphanumeric())
}

/// True if `s`, minus an optional `ORD-`/`CUS-` prefix, is at least six
/// characters drawn entirely from the default alphabet (ignoring ASCII case).
///
/// Codecs with a custom alphabet or minimum length should use
/// [`PublicIdCodec::looks_like_token`] instead.
pub fn looks_like_token(s: &str) -> bool {
    token_shape(s, DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH, true)
}

fn token_shape(s: &str, alphabet: &str, min_length: usize, case_insensitive: bool) -> bool {
    let token = RecordKind::ALL
        .into_iter()
        .find_map(|kind| kind.strip_prefix(s))
        .unwrap_or(s);

    let in_alphabet = |c: char| {
        if case_insensitive {
            alphabet.contains(c.to_ascii_uppercase())
        } else {
            alphabet.contains(c)
        }
    };

    !token.is_empty() && token.chars().count() >= min_length && token.chars().all(in_alphabet)
}

/// What a lookup input should be resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LookupKey {
    /// The input decoded to a primary key.
    Record { kind: RecordKind, id: u64 },
    /// The input should be matched literally against searchable fields.
    SearchTerm { term: String },
}

impl LookupKey {
    /// The decoded primary key, if any.
    pub fn record_id(&self) -> Option<u64> {
        match self {
            LookupKey::Record { id, .. } => Some(*id),
            LookupKey::SearchTerm { .. } => None,
        }
    }
}

impl PublicIdCodec {
    /// Like [`looks_like_token`], but against this codec's alphabet and
    /// minimum length.
    pub fn looks_like_token(&self, s: &str) -> bool {
        token_shape(
            s,
            self.alphabet(),
            self.min_length(),
            self.is_case_insensitive(),
        )
    }

    /// Resolves free-form input for a `kind` lookup.
    ///
    /// Inputs shaped like a public ID or token are decoded; anything else, or
    /// anything that fails to decode, becomes a trimmed search term.
    pub fn resolve_lookup(&self, kind: RecordKind, input: &str) -> LookupKey {
        let input = input.trim();

        if looks_like_public_id(input) || self.looks_like_token(input) {
            if let Some(id) = self.decode(kind, input) {
                tracing::debug!(%kind, id, "lookup input decoded to record id");
                return LookupKey::Record { kind, id };
            }
            tracing::debug!(%kind, "lookup input looked like a public id but did not decode");
        }

        LookupKey::SearchTerm {
            term: input.to_string(),
        }
    }
}
