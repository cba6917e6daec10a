//! The public identifier codec.
//!
//! Maps raw primary keys to `ORD-XXXXXX` / `CUS-XXXXXX` strings and back.
//! Each record kind gets its own salt namespace derived from one base salt.

use crate::config::CodecConfig;
use crate::error::IdError;
use crate::hashids::Hashids;
use crate::public_id::PublicId;
use crate::types::RecordKind;

/// Bidirectional mapping between primary keys and public identifiers.
///
/// Immutable after construction; share it behind an `Arc` or clone it.
#[derive(Debug, Clone)]
pub struct PublicIdCodec {
    orders: Hashids,
    clients: Hashids,
    alphabet: String,
    min_length: usize,
    case_insensitive: bool,
    default_salt: bool,
}

impl PublicIdCodec {
    /// Builds a codec from configuration.
    ///
    /// Fails if the alphabet is unusable or the minimum length is too large.
    pub fn new(config: &CodecConfig) -> Result<Self, IdError> {
        let build = |kind: RecordKind| {
            Hashids::new(
                &config.salt_for(kind),
                config.min_length(),
                config.alphabet(),
            )
        };

        let codec = Self {
            orders: build(RecordKind::Order)?,
            clients: build(RecordKind::Client)?,
            alphabet: config.alphabet().to_string(),
            min_length: config.min_length(),
            case_insensitive: !config.alphabet().chars().any(|c| c.is_ascii_lowercase()),
            default_salt: config.uses_default_salt(),
        };

        tracing::debug!(
            min_length = config.min_length(),
            default_salt = codec.default_salt,
            "public ID codec initialized"
        );

        Ok(codec)
    }

    /// Returns true if the codec was built from the built-in default salt.
    pub fn uses_default_salt(&self) -> bool {
        self.default_salt
    }

    /// The token alphabet this codec was built with.
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// The minimum token length this codec was built with.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether tokens are matched without regard to ASCII case.
    ///
    /// True when the alphabet has no lowercase letters.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    fn engine(&self, kind: RecordKind) -> &Hashids {
        match kind {
            RecordKind::Order => &self.orders,
            RecordKind::Client => &self.clients,
        }
    }

    /// Encodes a primary key as `"<PREFIX>-<TOKEN>"`.
    #[must_use]
    pub fn encode(&self, kind: RecordKind, id: u64) -> String {
        format!("{}-{}", kind.prefix(), self.encode_token(kind, id))
    }

    /// Encodes a primary key as a bare token without the prefix.
    #[must_use]
    pub fn encode_token(&self, kind: RecordKind, id: u64) -> String {
        self.engine(kind).encode(&[id])
    }

    /// Encodes a signed storage key, rejecting negative values.
    pub fn try_encode_signed(&self, kind: RecordKind, id: i64) -> Result<String, IdError> {
        let id = u64::try_from(id).map_err(|_| IdError::NegativeId(id))?;
        Ok(self.encode(kind, id))
    }

    /// Decodes a public identifier or bare token for `kind`.
    ///
    /// A leading `"<PREFIX>-"` for `kind` is stripped regardless of case; a
    /// prefix belonging to another kind is left in place and makes the input
    /// undecodable. Returns `None` for anything that does not decode.
    pub fn decode(&self, kind: RecordKind, input: &str) -> Option<u64> {
        let input = input.trim();
        let token = kind.strip_prefix(input).unwrap_or(input);
        self.decode_token(kind, token)
    }

    /// Decodes a bare token for `kind`.
    pub fn decode_token(&self, kind: RecordKind, token: &str) -> Option<u64> {
        if token.is_empty() {
            return None;
        }
        if self.case_insensitive {
            self.engine(kind).decode_one(&token.to_ascii_uppercase())
        } else {
            self.engine(kind).decode_one(token)
        }
    }

    /// Parses a public ID against this codec's alphabet.
    ///
    /// Unlike [`PublicId::parse`], this accepts tokens from a custom alphabet
    /// and keeps their case when the alphabet is case-sensitive.
    pub fn parse_public_id(&self, input: &str) -> Result<PublicId, IdError> {
        PublicId::parse_with(input, &self.alphabet, self.case_insensitive)
    }

    /// Decodes an already parsed [`PublicId`].
    pub fn decode_public_id(&self, id: &PublicId) -> Option<u64> {
        self.decode_token(id.kind(), id.token())
    }

    /// Decodes a prefixed public identifier of either kind.
    pub fn decode_any(&self, input: &str) -> Option<(RecordKind, u64)> {
        let (prefix, _) = input.trim().split_once('-')?;
        let kind = RecordKind::from_prefix(prefix)?;
        self.decode(kind, input).map(|id| (kind, id))
    }
}
